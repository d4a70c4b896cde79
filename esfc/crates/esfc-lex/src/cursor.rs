//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. Positions are character
//! based and can start anywhere in a larger document (see
//! [`LexerOptions::from`](crate::LexerOptions::from)).

use esfc_util::Point;

/// A character, or `None` at end of file.
pub type Code = Option<char>;

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use esfc_lex::cursor::Cursor;
/// use esfc_util::Point;
///
/// let mut cursor = Cursor::new("a\nb", Point::START);
///
/// assert_eq!(cursor.code(), Some('a'));
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.code(), Some('b'));
/// assert_eq!(cursor.now(), Point::new(2, 1, 2));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The source text, one entry per character.
    chars: Vec<char>,

    /// Index of the current character in `chars`.
    index: usize,

    /// Point of the first character.
    from: Point,

    /// Point of the current character.
    point: Point,
}

impl Cursor {
    /// Creates a new cursor whose first character sits at `from`.
    pub fn new(source: &str, from: Point) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            from,
            point: from,
        }
    }

    /// Returns the current character.
    #[inline]
    pub fn code(&self) -> Code {
        self.peek(0)
    }

    /// Returns the character `k` places after the current one (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use esfc_lex::cursor::Cursor;
    /// use esfc_util::Point;
    ///
    /// let cursor = Cursor::new("abc", Point::START);
    /// assert_eq!(cursor.peek(0), Some('a'));
    /// assert_eq!(cursor.peek(2), Some('c'));
    /// assert_eq!(cursor.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, k: usize) -> Code {
        self.chars.get(self.index + k).copied()
    }

    /// Returns the character before the current one.
    #[inline]
    pub fn previous(&self) -> Code {
        self.index
            .checked_sub(1)
            .and_then(|i| self.chars.get(i).copied())
    }

    /// Returns the point of the current character.
    #[inline]
    pub fn now(&self) -> Point {
        self.point
    }

    /// Returns the point the cursor started at.
    #[inline]
    pub fn from(&self) -> Point {
        self.from
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Number of characters in the source.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. A CR immediately followed by LF
    /// counts as a single line break. Does nothing if already at end.
    pub fn advance(&mut self) {
        let Some(c) = self.code() else {
            return;
        };

        self.index += 1;
        self.point.offset += 1;

        let breaks = match c {
            '\n' | '\u{2028}' | '\u{2029}' => true,
            '\r' => self.code() != Some('\n'),
            _ => false,
        };

        if breaks {
            self.point.line += 1;
            self.point.column = 1;
        } else {
            self.point.column += 1;
        }
    }

    /// Returns the source text between two points this cursor produced.
    ///
    /// # Example
    ///
    /// ```
    /// use esfc_lex::cursor::Cursor;
    /// use esfc_util::Point;
    ///
    /// let mut cursor = Cursor::new("let x", Point::START);
    /// let start = cursor.now();
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice(start, cursor.now()), "let");
    /// ```
    pub fn slice(&self, start: Point, end: Point) -> String {
        let lo = start.offset.saturating_sub(self.from.offset);
        let hi = end.offset.saturating_sub(self.from.offset);
        self.chars
            .get(lo..hi.min(self.chars.len()))
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }
}
