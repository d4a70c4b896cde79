//! Span module - Source location tracking.
//!
//! This module provides the unist-style location types every token and
//! diagnostic carries: a [`Point`] is one place in a document, a
//! [`Position`] is the half-open range between two points, and a [`Place`]
//! is either of the two.
//!
//! # Examples
//!
//! ```
//! use esfc_util::span::{Point, Position};
//!
//! let start = Point::new(1, 1, 0);
//! let end = Point::new(1, 4, 3);
//! let position = Position::new(start, end);
//!
//! assert_eq!(start.to_string(), "1:1");
//! assert_eq!(position.to_string(), "1:1-1:4");
//! ```

use crate::error::{SpanError, SpanResult};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A single place in a source document
///
/// `line` and `column` are 1-based, `offset` is the 0-based index of the
/// character (Unicode scalar value) at this place.
///
/// # Examples
///
/// ```
/// use esfc_util::span::Point;
///
/// let point = Point::default();
/// assert_eq!(point, Point::new(1, 1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// Character index (0-based)
    pub offset: usize,
}

impl Point {
    /// The first place of a document
    pub const START: Point = Point {
        line: 1,
        column: 1,
        offset: 0,
    };

    /// Create a new point without validation
    #[inline]
    pub const fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Create a new point, rejecting a zero line or column
    ///
    /// # Examples
    ///
    /// ```
    /// use esfc_util::span::Point;
    ///
    /// assert!(Point::try_new(3, 2, 10).is_ok());
    /// assert!(Point::try_new(0, 2, 10).is_err());
    /// ```
    pub fn try_new(line: u32, column: u32, offset: usize) -> SpanResult<Self> {
        let point = Self::new(line, column, offset);
        point.validate()?;
        Ok(point)
    }

    /// Check that `line` and `column` are 1-based
    pub fn validate(&self) -> SpanResult<()> {
        if self.line == 0 {
            return Err(SpanError::InvalidLine { line: self.line });
        }
        if self.column == 0 {
            return Err(SpanError::InvalidColumn {
                column: self.column,
            });
        }
        Ok(())
    }
}

impl Default for Point {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Points are ordered by offset; line and column follow from it.
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset
            .cmp(&other.offset)
            .then(self.line.cmp(&other.line))
            .then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range `[start, end)` in a source document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// First place covered by the range
    pub start: Point,
    /// First place after the range
    pub end: Point,
}

impl Position {
    /// Create a new position
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a position, rejecting an end that lies before its start
    ///
    /// # Examples
    ///
    /// ```
    /// use esfc_util::span::{Point, Position};
    ///
    /// let a = Point::new(1, 1, 0);
    /// let b = Point::new(1, 5, 4);
    ///
    /// assert!(Position::try_new(a, b).is_ok());
    /// assert!(Position::try_new(b, a).is_err());
    /// ```
    pub fn try_new(start: Point, end: Point) -> SpanResult<Self> {
        start.validate()?;
        end.validate()?;
        if start.offset > end.offset {
            return Err(SpanError::InvertedPosition {
                start: start.offset,
                end: end.offset,
            });
        }
        Ok(Self::new(start, end))
    }

    /// Returns true if the range covers no characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Number of characters covered by the range
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Check if this range contains a character offset
    ///
    /// # Examples
    ///
    /// ```
    /// use esfc_util::span::{Point, Position};
    ///
    /// let position = Position::new(Point::new(1, 3, 2), Point::new(1, 6, 5));
    /// assert!(position.contains(2));
    /// assert!(!position.contains(5));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start.offset <= offset && offset < self.end.offset
    }

    /// Smallest position covering both `self` and `other`
    pub fn merge(&self, other: Position) -> Position {
        Position {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Where a diagnostic applies: a single point or a range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Place {
    /// A single place
    Point(Point),
    /// A range of places
    Position(Position),
}

impl Place {
    /// The first point of the place
    pub fn start(&self) -> Point {
        match self {
            Place::Point(point) => *point,
            Place::Position(position) => position.start,
        }
    }
}

impl From<Point> for Place {
    fn from(point: Point) -> Self {
        Place::Point(point)
    }
}

impl From<Position> for Place {
    fn from(position: Position) -> Self {
        Place::Position(position)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Point(point) => point.fmt(f),
            Place::Position(position) => position.fmt(f),
        }
    }
}
