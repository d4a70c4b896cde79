//! Comment construct.
//!
//! The kind is decided by the test from up to three characters of
//! lookahead and travels to the state machine inside it:
//!
//! - `#!` hashbang, `//` line: run to the end of the line or file.
//! - `/*` block, `/**` docblock: run to `*/`. Reaching the end of the file
//!   first raises "Unterminated comment" and keeps what was consumed.

use super::{Construct, Step, Tokenize};
use crate::cursor::Code;
use crate::lexer::TokenizeContext;
use crate::token::{CommentKind, TokenFields, TokenType};
use esfc_util::RaiseOptions;

/// Recognizes hashbang, line, block and docblock comments
#[derive(Clone, Copy, Debug, Default)]
pub struct Comment;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Opener,
    Line,
    Block { star: bool },
}

struct Machine {
    kind: CommentKind,
    state: State,
}

impl Construct for Comment {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn test(&self, ctx: &TokenizeContext<'_>) -> Option<Box<dyn Tokenize>> {
        let kind = match (ctx.code()?, ctx.next()?) {
            ('#', '!') => CommentKind::Hashbang,
            ('/', '/') => CommentKind::Line,
            ('/', '*') if ctx.peek(2) == Some('*') => CommentKind::Docblock,
            ('/', '*') => CommentKind::Block,
            _ => return None,
        };

        Some(Box::new(Machine {
            kind,
            state: State::Start,
        }))
    }
}

impl Tokenize for Machine {
    fn step(&mut self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step {
        match self.state {
            State::Start => {
                ctx.enter(TokenType::Comment, TokenFields::comment(self.kind));
                ctx.consume(code);
                self.state = State::Opener;
                Step::Next
            },
            State::Opener => {
                ctx.consume(code);
                self.state = if self.kind.is_line() {
                    State::Line
                } else {
                    State::Block { star: false }
                };
                Step::Next
            },
            State::Line => {
                if code.is_none() || ctx.is_line_ending(code) {
                    ctx.exit(TokenType::Comment);
                    return Step::Resume;
                }
                ctx.consume(code);
                Step::Next
            },
            State::Block { star } => match code {
                None => {
                    ctx.raise(
                        "Unterminated comment",
                        ctx.now(),
                        RaiseOptions::new().expected(["*/"]).rule_id("comment"),
                    );
                    ctx.exit(TokenType::Comment);
                    Step::Resume
                },
                Some('/') if star => {
                    ctx.consume(code);
                    ctx.exit(TokenType::Comment);
                    Step::Resume
                },
                Some(c) => {
                    ctx.consume(code);
                    self.state = State::Block { star: c == '*' };
                    Step::Next
                },
            },
        }
    }
}
