//! Numeric literal construct.
//!
//! Recognition is permissive: separators, radix prefixes, exponents and the
//! bigint suffix are consumed without checking that their combination is a
//! legal ECMAScript literal. Callers that need strict conformance validate
//! the raw value themselves.

use super::{Construct, Step, Tokenize};
use crate::cursor::Code;
use crate::lexer::TokenizeContext;
use crate::token::{Token, TokenFields, TokenType};
use crate::unicode::is_digit_in_radix;

/// Recognizes decimal, radix and bigint literals
#[derive(Clone, Copy, Debug, Default)]
pub struct Numeric;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Decimal,
    Radix(u32),
}

/// Exponent markers seen so far; each may occur at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Exponential {
    e: bool,
    sign: bool,
}

struct Machine {
    state: State,
    /// The literal starts with `0`.
    zero: bool,
    /// A `.` has been consumed.
    float: bool,
    exponential: Exponential,
}

impl Machine {
    fn consume(&mut self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step {
        ctx.consume(code);
        Step::Next
    }

    fn finish(&mut self, ctx: &mut TokenizeContext<'_>) -> Step {
        ctx.exit(TokenType::Number);
        Step::Resume
    }

    fn suffix(&mut self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step {
        self.consume(ctx, code);
        self.finish(ctx)
    }
}

fn radix(prefix: char) -> u32 {
    match prefix {
        'b' | 'B' => 2,
        'o' | 'O' => 8,
        _ => 16,
    }
}

impl Construct for Numeric {
    fn name(&self) -> &'static str {
        "numeric"
    }

    fn test(&self, ctx: &TokenizeContext<'_>) -> Option<Box<dyn Tokenize>> {
        let accepts = match ctx.code()? {
            c if c.is_ascii_digit() => true,
            '.' => ctx.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };

        accepts.then(|| {
            Box::new(Machine {
                state: State::Start,
                zero: false,
                float: false,
                exponential: Exponential::default(),
            }) as Box<dyn Tokenize>
        })
    }

    fn resolve(&self, token: &mut Token) {
        if token.ty == TokenType::Number && token.text().ends_with('n') {
            token.ty = TokenType::Bigint;
        }
    }
}

impl Tokenize for Machine {
    fn step(&mut self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step {
        match self.state {
            State::Start => {
                ctx.enter(TokenType::Number, TokenFields::default());
                self.zero = code == Some('0');
                self.float = code == Some('.');
                self.state = State::Decimal;
                self.consume(ctx, code)
            },
            State::Decimal => match code {
                Some('n') => self.suffix(ctx, code),
                Some(c @ ('b' | 'B' | 'o' | 'O' | 'x' | 'X')) if self.zero => {
                    self.state = State::Radix(radix(c));
                    self.consume(ctx, code)
                },
                Some(c) if c.is_ascii_digit() || c == '_' => self.consume(ctx, code),
                Some('.') if !self.float && !self.exponential.e => {
                    self.float = true;
                    self.consume(ctx, code)
                },
                Some('e' | 'E') if !self.exponential.e => {
                    self.exponential.e = true;
                    self.consume(ctx, code)
                },
                Some('+' | '-')
                    if !self.exponential.sign && matches!(ctx.previous(), Some('e' | 'E')) =>
                {
                    self.exponential.sign = true;
                    self.consume(ctx, code)
                },
                _ => self.finish(ctx),
            },
            State::Radix(base) => match code {
                Some('n') => self.suffix(ctx, code),
                Some(c) if is_digit_in_radix(c, base) || c == '_' => self.consume(ctx, code),
                _ => self.finish(ctx),
            },
        }
    }
}
