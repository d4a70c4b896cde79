//! esfc-par - Operator Grammar for ECMAScript-like Source
//!
//! This crate reads the token list produced by `esfc-lex` with parser
//! combinators. The lexer emits every punctuation character as its own
//! token; the grammar here assembles them into compound operators such as
//! `=>`, `...`, `>>>=` and `?.`.
//!
//! # Overview
//!
//! Parsers are [`Runner`] values: they start at a token id, never mutate
//! the list, and return either a [`Candidate`] or a [`ParseError`]. The
//! [`Grammar`] trait hands out one runner per punctuator and per operator
//! category, and [`Parser`] implements it over a lexed file.
//!
//! Pieces of a compound operator after the first must not be preceded by
//! whitespace, so `= >` is not an arrow and `+ +` is not an update.
//!
//! # Example Usage
//!
//! ```
//! use esfc_par::{ExpressionKind, Grammar, Parser};
//!
//! let parser = Parser::new("!==");
//! let candidate = parser.parse_file(&parser.binary_operator()).unwrap();
//! assert_eq!(candidate.result, ("!==".to_string(), ExpressionKind::Equality));
//!
//! let parser = Parser::new("= >");
//! assert!(parser.parse_file(&parser.arrow()).is_err());
//! ```
//!
//! # Module Structure
//!
//! - [`combinator`] - Runners and the combinator primitives
//! - [`punctuator`] - Single punctuator parsers and the whitespace gate
//! - [`operator`] - Compound operator categories
//! - [`grammar`] - The [`Grammar`] capability
//! - [`parser`] - The [`Parser`] over one file
//! - [`error`] - Parse errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod combinator;
pub mod error;
pub mod grammar;
pub mod operator;
pub mod parser;
pub mod punctuator;

#[cfg(test)]
mod edge_cases;

pub use combinator::{
    alt, apply, combine, condition, fail, keyword, kmid, opt, satisfy, seq, seq2, seq3, succ, tok,
    val, Candidate, Output, Runner,
};
pub use error::{ParseError, ParseResult};
pub use grammar::Grammar;
pub use operator::{apply_operator, ExpressionKind, Matched, UpdateOperator};
pub use parser::{Options, Parser};
pub use punctuator::{nw, Punctuator, Punctuators};
