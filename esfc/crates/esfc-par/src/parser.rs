//! The parser: a lexed file plus the grammar.

use crate::combinator::{kmid, tok, Output, Runner};
use crate::grammar::Grammar;
use crate::punctuator::Punctuators;
use esfc_lex::{Lexer, LexerOptions, Token, TokenId, TokenList, TokenType};
use esfc_util::{Message, SpanResult};
use log::debug;
use std::cell::Ref;

/// Parser configuration
pub type Options = LexerOptions;

/// Runs grammar parsers over one tokenized file
///
/// # Example
///
/// ```
/// use esfc_par::{Grammar, Parser};
///
/// let parser = Parser::new(">>>=");
/// let candidate = parser.parse_file(&parser.assignment_operator()).unwrap();
///
/// assert_eq!(candidate.result, ">>>=");
/// ```
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    punctuators: Punctuators,
}

impl Parser {
    /// Tokenize `source` with default options
    pub fn new(source: &str) -> Self {
        Self::build(Lexer::new(source))
    }

    /// Tokenize `source` with `options`
    ///
    /// Fails if `options.from` has a zero line or column.
    pub fn with_options(source: &str, options: Options) -> SpanResult<Self> {
        Ok(Self::build(Lexer::with_options(source, options)?))
    }

    fn build(lexer: Lexer) -> Self {
        debug!(
            "parser ready: {} tokens, {} lexer messages",
            lexer.tokens().len(),
            lexer.messages().len()
        );
        Self {
            lexer,
            punctuators: Punctuators::new(),
        }
    }

    /// The `sof` token
    pub fn head(&self) -> &Token {
        self.lexer.head()
    }

    /// The `eof` token
    pub fn tail(&self) -> &Token {
        self.lexer.tail()
    }

    /// The token list
    pub fn tokens(&self) -> &TokenList {
        self.lexer.tokens()
    }

    /// The underlying lexer
    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    /// Lexer diagnostics, in discovery order
    pub fn messages(&self) -> Ref<'_, [Message]> {
        self.lexer.messages()
    }

    /// Run `runner` from the first token after `sof`
    ///
    /// The runner does not have to consume the whole file.
    pub fn parse<T: 'static>(&self, runner: &Runner<T>) -> Output<T> {
        let tokens = self.tokens();
        self.parse_at(runner, tokens.next(tokens.head()))
    }

    /// Run `runner` from token `at`; `None` is past the end of the list
    pub fn parse_at<T: 'static>(&self, runner: &Runner<T>, at: Option<TokenId>) -> Output<T> {
        let output = runner.parse(self.tokens(), at);
        if let Err(error) = &output {
            debug!("parse failed: {}", error);
        }
        output
    }

    /// Run `runner` between `sof` and `eof`, requiring it to cover the file
    pub fn parse_file<T: 'static>(&self, runner: &Runner<T>) -> Output<T> {
        let file = kmid(tok(TokenType::Sof), runner.clone(), tok(TokenType::Eof));
        self.parse_at(&file, Some(self.tokens().head()))
    }
}

impl Grammar for Parser {
    fn punctuators(&self) -> &Punctuators {
        &self.punctuators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use esfc_util::{Point, SpanError};

    #[test]
    fn test_parse_starts_after_sof() {
        let parser = Parser::new("a + b");
        let error = parser.parse(&parser.plus()).unwrap_err();
        assert!(matches!(error, ParseError::Unexpected { .. }));

        let tokens = parser.tokens();
        let plus = tokens.next(tokens.next(tokens.head()).unwrap());
        let candidate = parser.parse_at(&parser.plus(), plus).unwrap();
        assert_eq!(candidate.result.whitespace, " ");
    }

    #[test]
    fn test_parse_file_requires_full_coverage() {
        let parser = Parser::new("== =");
        let error = parser.parse_file(&parser.equality_operator()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "expected eof, found punctuator \"=\" at 1:4"
        );
    }

    #[test]
    fn test_head_and_tail() {
        let parser = Parser::new("x");
        assert_eq!(parser.head().ty, TokenType::Sof);
        assert_eq!(parser.tail().ty, TokenType::Eof);
        assert_eq!(parser.tail().start, Point::new(1, 2, 1));
        assert!(parser.messages().is_empty());
        assert_eq!(parser.lexer().tokens().len(), 3);
    }

    #[test]
    fn test_options_are_validated() {
        let options = Options {
            from: Some(Point::new(0, 1, 0)),
        };
        let error = Parser::with_options("x", options).unwrap_err();
        assert_eq!(error, SpanError::InvalidLine { line: 0 });

        let options = Options {
            from: Some(Point::new(3, 1, 20)),
        };
        let parser = Parser::with_options("--", options).unwrap();
        let update = parser.parse_file(&parser.update_operator()).unwrap();
        assert_eq!(update.result.start, Point::new(3, 1, 20));
        assert_eq!(update.result.end, Point::new(3, 3, 22));
    }
}
