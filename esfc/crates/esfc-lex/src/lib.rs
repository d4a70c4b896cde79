//! esfc-lex - Lexical Analyzer for ECMAScript-like Source
//!
//! This crate turns source text into a linked list of tokens carrying
//! unist-style positions. It is the first half of the esfc front end; the
//! combinators in `esfc-par` read the list it produces.
//!
//! # Overview
//!
//! Tokenization is eager and never fails. Each recognition attempt is
//! driven by a [`construct`]: a recognizer that claims the current
//! character and a state machine that consumes it. Problems such as an
//! unterminated string are recorded as messages and tokenization goes on.
//!
//! # Example Usage
//!
//! ```
//! use esfc_lex::{Lexer, TokenType};
//!
//! let lexer = Lexer::new("const j = k + 3n // sum");
//!
//! for token in &lexer {
//!     println!("{} {:?} {}", token.ty, token.whitespace, token.position());
//! }
//!
//! let types: Vec<_> = lexer.iter().map(|t| t.ty).collect();
//! assert_eq!(types[6], TokenType::Bigint);
//! assert_eq!(types[7], TokenType::Comment);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token type and the linked token list
//! - [`lexer`] - The [`Lexer`] handle and the tokenizer driver
//! - [`construct`] - One recognizer per token kind
//! - [`cursor`] - Character cursor with line and column tracking
//! - [`keyword`] - Reserved and contextual words
//! - [`options`] - Lexer configuration
//! - [`unicode`] - Character classes
//!
//! # Token Types
//!
//! - **sof** / **eof**: Sentinels at the ends of every list
//! - **comment**: `#!` hashbang, `//` line, `/* */` block, `/** */` docblock
//! - **keyid**: Identifiers and keywords alike, including `#private` names
//!   and `\u` escapes
//! - **number** / **bigint**: Decimal, binary, octal and hex literals,
//!   separators, exponents and the `n` suffix
//! - **string**: Single or double quoted, quotes included
//! - **punctuator**: Any single punctuation or symbol character
//!
//! Whitespace never appears in the list: every run is stored on the token
//! that follows it, so the `eof` token holds trailing whitespace.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod construct;
pub mod cursor;
pub mod keyword;
pub mod lexer;
pub mod options;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Code, Cursor};
pub use keyword::Keyword;
pub use lexer::{Lexer, TokenizeContext};
pub use options::LexerOptions;
pub use token::{CommentKind, Token, TokenFields, TokenId, TokenList, TokenType, Tokens};
pub use unicode::{is_id_continue, is_id_start, is_line_ending, is_punctuation, is_whitespace};
