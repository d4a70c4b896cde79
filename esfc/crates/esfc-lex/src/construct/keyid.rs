//! Identifier and keyword construct.
//!
//! Every word is a `keyid` token; telling keywords from identifiers is left
//! to whoever reads the token (see [`Token::keyword`](crate::Token::keyword)).

use super::{Construct, Step, Tokenize};
use crate::cursor::Code;
use crate::lexer::TokenizeContext;
use crate::token::{TokenFields, TokenType};
use crate::unicode::{is_id_continue, is_id_start};

/// Recognizes identifiers, keywords and private names
#[derive(Clone, Copy, Debug, Default)]
pub struct Keyid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Inside,
}

struct Machine {
    private: bool,
    state: State,
}

/// Whether an identifier can start with `code`, looking `k` characters
/// past the current one for the character that follows it.
///
/// Returns the private flag on success.
fn starts(ctx: &TokenizeContext<'_>, code: Code, k: usize) -> Option<bool> {
    match code? {
        '\\' => (ctx.peek(k) == Some('u')).then_some(false),
        '$' => (ctx.peek(k) != Some('{')).then_some(false),
        '#' => starts(ctx, ctx.peek(k), k + 1).map(|_| true),
        '_' => Some(false),
        c => is_id_start(c).then_some(false),
    }
}

impl Construct for Keyid {
    fn name(&self) -> &'static str {
        "keyid"
    }

    fn test(&self, ctx: &TokenizeContext<'_>) -> Option<Box<dyn Tokenize>> {
        let private = starts(ctx, ctx.code(), 1)?;
        Some(Box::new(Machine {
            private,
            state: State::Start,
        }))
    }
}

impl Tokenize for Machine {
    fn step(&mut self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step {
        match (self.state, code) {
            (State::Start, _) => {
                ctx.enter(TokenType::Keyid, TokenFields::keyid(self.private));
                ctx.consume(code);
                self.state = State::Inside;
                Step::Next
            },
            (State::Inside, Some(c))
                if is_id_continue(c) || c == '$' || (c == '\\' && ctx.next() == Some('u')) =>
            {
                ctx.consume(code);
                Step::Next
            },
            (State::Inside, _) => {
                ctx.exit(TokenType::Keyid);
                Step::Resume
            },
        }
    }
}
