//! Whitespace construct.
//!
//! Runs of whitespace and line terminators are tokenized like everything
//! else, then folded away by [`Whitespace::resolve_all`]: each run is copied
//! into the `whitespace` field of the token that follows it and unlinked.

use super::{Construct, Event, Step, Tokenize};
use crate::cursor::Code;
use crate::lexer::TokenizeContext;
use crate::token::{Token, TokenFields, TokenId, TokenType};
use crate::unicode::is_whitespace;
use esfc_util::IndexVec;

/// Recognizes whitespace and line terminators
#[derive(Clone, Copy, Debug, Default)]
pub struct Whitespace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Inside,
}

struct Machine {
    state: State,
}

impl Construct for Whitespace {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn test(&self, ctx: &TokenizeContext<'_>) -> Option<Box<dyn Tokenize>> {
        match ctx.code() {
            Some(c) if is_whitespace(c) => Some(Box::new(Machine {
                state: State::Start,
            })),
            _ => None,
        }
    }

    fn resolve_all(&self, events: &[Event], tokens: &mut IndexVec<TokenId, Token>) {
        for event in events.iter().filter(|e| e.enters(TokenType::Whitespace)) {
            let id = event.token;
            let (previous, next) = (tokens[id].previous, tokens[id].next);

            if let Some(next) = next {
                tokens[next].whitespace = tokens[id].value.clone().unwrap_or_default();
                tokens[next].previous = previous;
            }
            if let Some(previous) = previous {
                tokens[previous].next = next;
            }

            tokens[id].next = None;
            tokens[id].previous = None;
        }
    }
}

impl Tokenize for Machine {
    fn step(&mut self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step {
        match (self.state, code) {
            (State::Start, _) => {
                ctx.enter(TokenType::Whitespace, TokenFields::default());
                ctx.consume(code);
                self.state = State::Inside;
                Step::Next
            },
            (State::Inside, Some(c)) if is_whitespace(c) => {
                ctx.consume(code);
                Step::Next
            },
            (State::Inside, _) => {
                ctx.exit(TokenType::Whitespace);
                Step::Resume
            },
        }
    }
}
