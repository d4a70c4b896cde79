//! Lexer configuration.

use esfc_util::{Point, SpanResult};

/// Lexer configuration
///
/// # Example
///
/// ```
/// use esfc_lex::{Lexer, LexerOptions};
/// use esfc_util::Point;
///
/// let options = LexerOptions {
///     from: Some(Point::new(4, 9, 60)),
/// };
/// let lexer = Lexer::with_options("x", options).unwrap();
///
/// assert_eq!(lexer.head().start, Point::new(4, 9, 60));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Point of the first character of the source
    ///
    /// Lets a fragment of a larger document report positions relative to
    /// where it sits in that document. Defaults to `1:1`, offset `0`.
    pub from: Option<Point>,
}

impl LexerOptions {
    /// Starting point, falling back to the start of the document
    pub fn start(&self) -> Point {
        self.from.unwrap_or_default()
    }

    /// Reject a `from` point with a zero line or column
    pub fn validate(&self) -> SpanResult<()> {
        match self.from {
            Some(point) => point.validate(),
            None => Ok(()),
        }
    }
}
