//! Single punctuator parsers and the whitespace gate.
//!
//! Every punctuator character gets one parser matching a token with that
//! exact value. The parsers are built once into a [`Punctuators`] table;
//! multi-character operators are sequences of these, glued together with
//! [`nw`] so that `= >` is not an arrow.

use crate::combinator::{seq2, seq3, val, Runner};
use crate::error::ParseError;
use esfc_lex::Token;
use indexmap::IndexMap;
use std::fmt;

/// A punctuator character the grammar knows by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punctuator {
    /// `&`
    Ampersand,
    /// `*`
    Asterisk,
    /// `@`
    At,
    /// `\`
    Backslash,
    /// `` ` ``
    Backtick,
    /// `|`
    Bar,
    /// `^`
    Caret,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `$`
    Dollar,
    /// `.`
    Dot,
    /// `=`
    Equal,
    /// `!`
    Exclamation,
    /// `>`
    Gt,
    /// `#`
    Hash,
    /// `{`
    LeftBrace,
    /// `[`
    LeftBracket,
    /// `(`
    LeftParen,
    /// `<`
    Lt,
    /// `-`
    Minus,
    /// `%`
    Percent,
    /// `+`
    Plus,
    /// `?`
    Question,
    /// `}`
    RightBrace,
    /// `]`
    RightBracket,
    /// `)`
    RightParen,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `~`
    Tilde,
}

impl Punctuator {
    /// Every punctuator, in declaration order
    pub const ALL: [Punctuator; 29] = [
        Punctuator::Ampersand,
        Punctuator::Asterisk,
        Punctuator::At,
        Punctuator::Backslash,
        Punctuator::Backtick,
        Punctuator::Bar,
        Punctuator::Caret,
        Punctuator::Colon,
        Punctuator::Comma,
        Punctuator::Dollar,
        Punctuator::Dot,
        Punctuator::Equal,
        Punctuator::Exclamation,
        Punctuator::Gt,
        Punctuator::Hash,
        Punctuator::LeftBrace,
        Punctuator::LeftBracket,
        Punctuator::LeftParen,
        Punctuator::Lt,
        Punctuator::Minus,
        Punctuator::Percent,
        Punctuator::Plus,
        Punctuator::Question,
        Punctuator::RightBrace,
        Punctuator::RightBracket,
        Punctuator::RightParen,
        Punctuator::Semicolon,
        Punctuator::Slash,
        Punctuator::Tilde,
    ];

    /// The character
    pub fn as_char(&self) -> char {
        match self {
            Punctuator::Ampersand => '&',
            Punctuator::Asterisk => '*',
            Punctuator::At => '@',
            Punctuator::Backslash => '\\',
            Punctuator::Backtick => '`',
            Punctuator::Bar => '|',
            Punctuator::Caret => '^',
            Punctuator::Colon => ':',
            Punctuator::Comma => ',',
            Punctuator::Dollar => '$',
            Punctuator::Dot => '.',
            Punctuator::Equal => '=',
            Punctuator::Exclamation => '!',
            Punctuator::Gt => '>',
            Punctuator::Hash => '#',
            Punctuator::LeftBrace => '{',
            Punctuator::LeftBracket => '[',
            Punctuator::LeftParen => '(',
            Punctuator::Lt => '<',
            Punctuator::Minus => '-',
            Punctuator::Percent => '%',
            Punctuator::Plus => '+',
            Punctuator::Question => '?',
            Punctuator::RightBrace => '}',
            Punctuator::RightBracket => ']',
            Punctuator::RightParen => ')',
            Punctuator::Semicolon => ';',
            Punctuator::Slash => '/',
            Punctuator::Tilde => '~',
        }
    }

    /// Look a punctuator up by character
    pub fn from_char(c: char) -> Option<Punctuator> {
        Self::ALL.into_iter().find(|p| p.as_char() == c)
    }
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parser for a single punctuator, matched by value
pub fn punctuator(punctuator: Punctuator) -> Runner<Token> {
    val(punctuator.as_char().to_string())
}

/// Table of single punctuator parsers, keyed by character
#[derive(Clone, Debug)]
pub struct Punctuators {
    table: IndexMap<char, Runner<Token>>,
}

impl Punctuators {
    /// Build a parser for every punctuator
    pub fn new() -> Self {
        let table = Punctuator::ALL
            .into_iter()
            .map(|p| (p.as_char(), punctuator(p)))
            .collect();
        Self { table }
    }

    /// Parser for `p`
    pub fn get(&self, p: Punctuator) -> Runner<Token> {
        self.table
            .get(&p.as_char())
            .cloned()
            .unwrap_or_else(|| punctuator(p))
    }

    /// Parser for the punctuator spelled `c`, if there is one
    pub fn by_char(&self, c: char) -> Option<&Runner<Token>> {
        self.table.get(&c)
    }

    /// Characters and parsers, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (char, &Runner<Token>)> {
        self.table.iter().map(|(c, runner)| (*c, runner))
    }

    /// Number of punctuators in the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Punctuators {
    fn default() -> Self {
        Self::new()
    }
}

/// Fail unless the first token `parser` matched has no leading whitespace
pub fn nw<T: 'static>(parser: Runner<T>) -> Runner<T> {
    Runner::new(move |tokens, at| {
        let candidate = parser.parse(tokens, at)?;
        let spaced = candidate
            .head
            .and_then(|id| tokens.get(id).map(|token| (id, token)))
            .filter(|(_, token)| token.has_whitespace());

        match spaced {
            Some((id, token)) => Err(ParseError::Whitespace {
                found: token.to_string(),
                place: token.start,
                token: id,
            }),
            None => Ok(candidate),
        }
    })
}

/// `=>`
pub fn arrow(punctuators: &Punctuators) -> Runner<(Token, Token)> {
    seq2(
        punctuators.get(Punctuator::Equal),
        nw(punctuators.get(Punctuator::Gt)),
    )
}

/// `...`
pub fn ellipsis(punctuators: &Punctuators) -> Runner<(Token, Token, Token)> {
    let dot = || punctuators.get(Punctuator::Dot);
    seq3(dot(), nw(dot()), nw(dot()))
}
