//! Diagnostic module - Recoverable problem reporting.
//!
//! Lexing never fails: when a construct runs into something it cannot close
//! (an unterminated comment or string) it records a [`Message`] and carries
//! on. Messages are vfile-style: a human reason, the [`Place`] it applies
//! to, optional `actual`/`expected` detail, a `fatal` flag, a rule id and
//! a url pointing at the project named by the source tag.
//!
//! # Examples
//!
//! ```
//! use esfc_util::diagnostic::{Handler, RaiseOptions};
//! use esfc_util::span::Point;
//!
//! let handler = Handler::new("esfc-lex");
//! handler.raise(
//!     "Unterminated comment",
//!     Point::new(1, 16, 15),
//!     RaiseOptions::new().expected(["*/"]).rule_id("comment"),
//! );
//!
//! assert_eq!(handler.len(), 1);
//! assert_eq!(handler.messages()[0].message, "Unterminated comment (1:16)");
//! ```

mod builder;

pub use builder::RaiseOptions;

use crate::span::Place;
use serde::Serialize;
use std::cell::{Ref, RefCell};
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use esfc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// A fatal message
    Error,
    /// A recoverable message
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// Prefix of [`Message::url`], completed by the source tag
pub const URL_BASE: &str = "https://github.com/flex-development/";

/// A diagnostic message attached to a place in the source
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Human readable reason
    pub reason: String,
    /// Where the problem was found
    pub place: Place,
    /// What was found instead, if anything (`None` at end of file)
    pub actual: Option<String>,
    /// What would have been accepted
    pub expected: Option<Vec<String>>,
    /// Whether the message is an error rather than a warning
    pub fatal: bool,
    /// Category of the message, usually the construct that raised it
    pub rule_id: Option<String>,
    /// Tag of the component that raised the message
    pub source: &'static str,
    /// Project page of the component named by `source`
    pub url: String,
    /// `reason` followed by the stringified place
    pub message: String,
}

impl Message {
    /// Create a new message
    ///
    /// # Examples
    ///
    /// ```
    /// use esfc_util::diagnostic::{Level, Message, RaiseOptions};
    /// use esfc_util::span::Point;
    ///
    /// let message = Message::new(
    ///     "Unterminated string constant",
    ///     Point::new(1, 5, 4),
    ///     RaiseOptions::new().expected(["\""]),
    ///     "esfc-lex",
    /// );
    ///
    /// assert_eq!(message.level(), Level::Warning);
    /// assert_eq!(message.to_string(), "Unterminated string constant (1:5)");
    /// assert_eq!(message.url, "https://github.com/flex-development/esfc-lex");
    /// ```
    pub fn new(
        reason: impl Into<String>,
        place: impl Into<Place>,
        options: RaiseOptions,
        source: &'static str,
    ) -> Self {
        let reason = reason.into();
        let place = place.into();
        let message = format!("{} ({})", reason, place);
        let url = format!("{}{}", URL_BASE, source);

        Self {
            reason,
            place,
            actual: options.actual,
            expected: options.expected,
            fatal: options.fatal,
            rule_id: options.rule_id,
            source,
            url,
            message,
        }
    }

    /// Severity derived from the `fatal` flag
    pub fn level(&self) -> Level {
        if self.fatal {
            Level::Error
        } else {
            Level::Warning
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Collects messages in the order they are raised
///
/// The handler only records; it never aborts the caller.
#[derive(Debug)]
pub struct Handler {
    messages: RefCell<Vec<Message>>,
    source: &'static str,
}

impl Handler {
    /// Create a handler whose messages carry the given source tag
    pub fn new(source: &'static str) -> Self {
        Self {
            messages: RefCell::new(Vec::new()),
            source,
        }
    }

    /// Source tag stamped on raised messages
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Build a message, record it and return a copy
    pub fn raise(
        &self,
        reason: impl Into<String>,
        place: impl Into<Place>,
        options: RaiseOptions,
    ) -> Message {
        let message = Message::new(reason, place, options, self.source);
        self.emit(message.clone());
        message
    }

    /// Record a pre-built message
    pub fn emit(&self, message: Message) {
        self.messages.borrow_mut().push(message);
    }

    /// Borrow every recorded message, oldest first
    pub fn messages(&self) -> Ref<'_, [Message]> {
        Ref::map(self.messages.borrow(), Vec::as_slice)
    }

    /// Number of recorded messages
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Returns true if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Returns true if any recorded message is fatal
    pub fn has_fatal(&self) -> bool {
        self.messages.borrow().iter().any(|m| m.fatal)
    }

    /// Number of non-fatal messages
    pub fn warning_count(&self) -> usize {
        self.messages
            .borrow()
            .iter()
            .filter(|m| m.level() == Level::Warning)
            .count()
    }

    /// Consume the handler, returning the recorded messages
    pub fn into_messages(self) -> Vec<Message> {
        self.messages.into_inner()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new("esfc")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::{Point, Position};

    #[test]
    fn test_message_format_point() {
        let message = Message::new(
            "Unterminated comment",
            Point::new(1, 16, 15),
            RaiseOptions::default(),
            "esfc-lex",
        );
        assert_eq!(message.message, "Unterminated comment (1:16)");
        assert!(!message.fatal);
        assert_eq!(message.actual, None);
        assert_eq!(message.expected, None);
    }

    #[test]
    fn test_message_format_position() {
        let position = Position::new(Point::new(1, 1, 0), Point::new(2, 4, 9));
        let message = Message::new("bad", position, RaiseOptions::new(), "test");
        assert_eq!(message.to_string(), "bad (1:1-2:4)");
        assert_eq!(message.place.start(), Point::new(1, 1, 0));
    }

    #[test]
    fn test_level_follows_fatal() {
        let fatal = Message::new("x", Point::START, RaiseOptions::new().fatal(true), "t");
        let warn = Message::new("x", Point::START, RaiseOptions::new(), "t");
        assert_eq!(fatal.level(), Level::Error);
        assert_eq!(warn.level(), Level::Warning);
    }

    #[test]
    fn test_handler_records_in_order() {
        let handler = Handler::new("esfc-lex");
        assert!(handler.is_empty());

        handler.raise("first", Point::new(1, 2, 1), RaiseOptions::new());
        handler.raise("second", Point::new(3, 1, 10), RaiseOptions::new().fatal(true));

        let messages = handler.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].reason, "first");
        assert_eq!(messages[1].reason, "second");
        assert_eq!(messages[1].source, "esfc-lex");
        assert_eq!(messages[1].url, "https://github.com/flex-development/esfc-lex");
        drop(messages);

        assert!(handler.has_fatal());
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.into_messages().len(), 2);
    }

    #[test]
    fn test_serialize_message() {
        let message = Message::new(
            "Unterminated string constant",
            Point::new(1, 4, 3),
            RaiseOptions::new().expected(["'"]).rule_id("string"),
            "esfc-lex",
        );
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["ruleId"], "string");
        assert_eq!(json["expected"], serde_json::json!(["'"]));
        assert_eq!(json["actual"], serde_json::Value::Null);
        assert_eq!(json["place"]["line"], 1);
        assert_eq!(json["url"], "https://github.com/flex-development/esfc-lex");
    }

    #[test]
    fn test_url_follows_source_tag() {
        let handler = Handler::default();
        let message = handler.raise("x", Point::START, RaiseOptions::new());
        assert_eq!(message.url, format!("{}esfc", URL_BASE));
        assert_eq!(handler.messages()[0].url, message.url);
    }
}
