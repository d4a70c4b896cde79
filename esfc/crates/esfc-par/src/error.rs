//! Error types for the operator grammar
//!
//! A combinator that does not match returns one of these instead of a
//! candidate. Alternation recovers from them; only the caller decides
//! whether a failure is final.

use esfc_lex::{TokenId, TokenList};
use esfc_util::Point;
use thiserror::Error;

/// Why a combinator did not match
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token was found that the combinator does not accept
    #[error("expected {expected}, found {found} at {place}")]
    Unexpected {
        /// What would have been accepted
        expected: String,
        /// The token found instead
        found: String,
        /// Start of the token found
        place: Point,
        /// Id of the token found
        token: TokenId,
    },

    /// The list ended before the combinator was satisfied
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd {
        /// What would have been accepted
        expected: String,
    },

    /// A token that must touch the previous one was preceded by whitespace
    #[error("unexpected whitespace before {found} at {place}")]
    Whitespace {
        /// The token found
        found: String,
        /// Start of the token found
        place: Point,
        /// Id of the token found
        token: TokenId,
    },

    /// Explicit failure
    #[error("{reason}")]
    Failed {
        /// Why parsing failed
        reason: String,
        /// Token parsing stopped at, `None` past the end of the list
        token: Option<TokenId>,
    },
}

impl ParseError {
    /// Token at which matching stopped, `None` at the end of the list
    pub fn token(&self) -> Option<TokenId> {
        match self {
            ParseError::Unexpected { token, .. } | ParseError::Whitespace { token, .. } => {
                Some(*token)
            },
            ParseError::UnexpectedEnd { .. } => None,
            ParseError::Failed { token, .. } => *token,
        }
    }

    /// Offset matching got to; the end of the list is furthest
    pub(crate) fn reach(&self, tokens: &TokenList) -> usize {
        self.token()
            .and_then(|id| tokens.get(id))
            .map_or(usize::MAX, |token| token.start.offset)
    }
}

/// Result type alias for grammar operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;
