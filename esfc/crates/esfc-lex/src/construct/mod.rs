//! Constructs: one recognizer per token kind.
//!
//! A construct decides whether it can start at the current character
//! ([`Construct::test`]) and, if so, hands the driver a state machine
//! ([`Tokenize`]) seeded with whatever the test learned (comment kind,
//! string opener, private flag). The machine is fed one code at a time and
//! reports progress through the enter/consume/exit effects on
//! [`TokenizeContext`]. Nothing a test learns outlives its attempt.
//!
//! Constructs are tried in the order of [`CONSTRUCTS`]; the first whose
//! test succeeds owns the span.

mod comment;
mod keyid;
mod numeric;
mod punctuator;
mod string;
mod whitespace;

pub use comment::Comment;
pub use keyid::Keyid;
pub use numeric::Numeric;
pub use punctuator::Punctuator;
pub use string::StringLiteral;
pub use whitespace::Whitespace;

use crate::cursor::Code;
use crate::lexer::TokenizeContext;
use crate::token::{Token, TokenId, TokenType};
use esfc_util::IndexVec;

/// Constructs in the order they are tried
pub static CONSTRUCTS: [&dyn Construct; 6] = [
    &Whitespace,
    &Comment,
    &Keyid,
    &Numeric,
    &StringLiteral,
    &Punctuator,
];

/// What a state machine wants after seeing a code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Feed the next code
    Next,
    /// Done; the current code goes to the next attempt
    Resume,
}

/// Whether an event opened or closed a token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A token was entered
    Enter,
    /// A token was exited
    Exit,
}

/// A recorded enter or exit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    /// Enter or exit
    pub kind: EventKind,
    /// Token the event belongs to
    pub token: TokenId,
    /// Type the token had when the event was recorded
    pub ty: TokenType,
}

impl Event {
    /// Returns true for an enter event of the given type
    pub fn enters(&self, ty: TokenType) -> bool {
        self.kind == EventKind::Enter && self.ty == ty
    }
}

/// A recognizer for one token kind
pub trait Construct: Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Gate on the character before the current one
    fn previous(&self, code: Code) -> bool {
        let _ = code;
        true
    }

    /// Start an attempt at the current character, or decline
    fn test(&self, ctx: &TokenizeContext<'_>) -> Option<Box<dyn Tokenize>>;

    /// Finish a token this construct produced
    fn resolve(&self, token: &mut Token) {
        let _ = token;
    }

    /// Post-process the whole list once tokenization is complete
    fn resolve_all(&self, events: &[Event], tokens: &mut IndexVec<TokenId, Token>) {
        let _ = (events, tokens);
    }
}

/// State machine of one recognition attempt
pub trait Tokenize {
    /// Consume `code` (or not) and report what to do next
    fn step(&mut self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step;
}
