//! Lexer module.
//!
//! This module organizes the lexer into two parts:
//! - `context` - The tokenizer driver and the effects constructs use
//! - this file - The [`Lexer`] handle owning the finished token list

mod context;

pub use context::TokenizeContext;

use crate::cursor::Code;
use crate::options::LexerOptions;
use crate::token::{Token, TokenList, Tokens};
use crate::unicode;
use esfc_util::{Handler, Message, Place, Point, RaiseOptions, SpanResult};
use std::cell::Ref;

/// Source name stamped on every message the lexer raises
pub const SOURCE: &str = "esfc-lex";

/// Eager lexer for ECMAScript-like source text.
///
/// The whole document is tokenized on construction. The result is a linked
/// list of tokens from a `sof` sentinel to an `eof` sentinel; whitespace is
/// folded into the `whitespace` field of the token after it. Problems never
/// abort tokenization, they are recorded as messages instead.
///
/// # Example
///
/// ```
/// use esfc_lex::{Lexer, TokenType};
///
/// let lexer = Lexer::new("let x = 42;");
/// let types: Vec<_> = lexer.iter().map(|t| t.ty).collect();
///
/// assert_eq!(types.first(), Some(&TokenType::Sof));
/// assert_eq!(types.last(), Some(&TokenType::Eof));
/// assert_eq!(lexer.iter().count(), 7);
/// assert!(lexer.messages().is_empty());
/// ```
#[derive(Debug)]
pub struct Lexer {
    /// Finished token list.
    tokens: TokenList,

    /// Messages raised while tokenizing, and any raised later.
    handler: Handler,

    /// Options the lexer was created with.
    options: LexerOptions,
}

impl Lexer {
    /// Tokenize `source` starting at `1:1`.
    pub fn new(source: &str) -> Self {
        Self::build(source, LexerOptions::default(), Point::START)
    }

    /// Tokenize `source` with `options`.
    ///
    /// Fails only if `options.from` has a zero line or column.
    pub fn with_options(source: &str, options: LexerOptions) -> SpanResult<Self> {
        options.validate()?;
        Ok(Self::build(source, options, options.start()))
    }

    fn build(source: &str, options: LexerOptions, from: Point) -> Self {
        let handler = Handler::new(SOURCE);
        let tokens = context::tokenize(source, from, &handler);
        Self {
            tokens,
            handler,
            options,
        }
    }

    /// The `sof` token
    pub fn head(&self) -> &Token {
        &self.tokens[self.tokens.head()]
    }

    /// The `eof` token
    pub fn tail(&self) -> &Token {
        &self.tokens[self.tokens.tail()]
    }

    /// The token list
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Walk the tokens from `sof` to `eof`
    pub fn iter(&self) -> Tokens<'_> {
        self.tokens.iter()
    }

    /// Options the lexer was created with
    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Messages raised so far, in order
    pub fn messages(&self) -> Ref<'_, [Message]> {
        self.handler.messages()
    }

    /// Record a message against this lexer's source
    ///
    /// # Example
    ///
    /// ```
    /// use esfc_lex::Lexer;
    /// use esfc_util::RaiseOptions;
    ///
    /// let lexer = Lexer::new("x");
    /// let message = lexer.raise(
    ///     "Unexpected identifier",
    ///     lexer.tail().start,
    ///     RaiseOptions::new().fatal(true),
    /// );
    ///
    /// assert_eq!(message.message, "Unexpected identifier (1:2)");
    /// assert_eq!(message.source, "esfc-lex");
    /// assert_eq!(lexer.messages().len(), 1);
    /// ```
    pub fn raise(
        &self,
        reason: impl Into<String>,
        place: impl Into<Place>,
        options: RaiseOptions,
    ) -> Message {
        self.handler.raise(reason, place, options)
    }

    /// Check if `code` is a line ending
    pub fn is_line_ending(code: Code) -> bool {
        unicode::is_line_ending(code)
    }
}

impl<'a> IntoIterator for &'a Lexer {
    type Item = &'a Token;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        self.iter()
    }
}
