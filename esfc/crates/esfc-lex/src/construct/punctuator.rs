//! Punctuator construct: one punctuation or symbol character per token.
//!
//! Also the driver's fallback for characters no construct claims.

use super::{Construct, Step, Tokenize};
use crate::cursor::Code;
use crate::lexer::TokenizeContext;
use crate::token::{TokenFields, TokenType};
use crate::unicode::is_punctuation;

/// Recognizes a single Unicode punctuation or symbol character
#[derive(Clone, Copy, Debug, Default)]
pub struct Punctuator;

struct Machine;

impl Punctuator {
    /// A machine that turns the current character into a punctuator,
    /// whatever it is.
    pub(crate) fn machine() -> Box<dyn Tokenize> {
        Box::new(Machine)
    }
}

impl Construct for Punctuator {
    fn name(&self) -> &'static str {
        "punctuator"
    }

    fn test(&self, ctx: &TokenizeContext<'_>) -> Option<Box<dyn Tokenize>> {
        ctx.code()
            .filter(|c| is_punctuation(*c))
            .map(|_| Self::machine())
    }
}

impl Tokenize for Machine {
    fn step(&mut self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step {
        ctx.enter(TokenType::Punctuator, TokenFields::default());
        ctx.consume(code);
        ctx.exit(TokenType::Punctuator);
        Step::Resume
    }
}
