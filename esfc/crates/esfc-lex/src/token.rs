//! Token definitions and the token list.
//!
//! Tokens live in an arena ([`TokenList`]) and link to their neighbours by
//! [`TokenId`]. The list always runs from one `sof` token to one `eof`
//! token; traversal follows `next` links, so tokens spliced out during
//! whitespace resolution stay in the arena but are never visited.

use crate::keyword::Keyword;
use esfc_util::{define_idx, IndexVec, Point, Position};
use serde::Serialize;
use std::fmt;
use std::ops::Index;

define_idx!(
    /// Index of a token in its [`TokenList`].
    TokenId
);

/// Token type tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Start of file sentinel
    Sof,
    /// End of file sentinel
    Eof,
    /// Whitespace run; never survives in the final list
    Whitespace,
    /// Comment of any kind
    Comment,
    /// Identifier or keyword
    Keyid,
    /// Numeric literal
    Number,
    /// Numeric literal with a trailing `n`
    Bigint,
    /// String literal, quotes included
    String,
    /// Single punctuation or symbol character
    Punctuator,
}

impl TokenType {
    /// Lowercase tag of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Sof => "sof",
            TokenType::Eof => "eof",
            TokenType::Whitespace => "whitespace",
            TokenType::Comment => "comment",
            TokenType::Keyid => "keyid",
            TokenType::Number => "number",
            TokenType::Bigint => "bigint",
            TokenType::String => "string",
            TokenType::Punctuator => "punctuator",
        }
    }

    /// Returns true for the `sof` and `eof` sentinels
    pub fn is_sentinel(&self) -> bool {
        matches!(self, TokenType::Sof | TokenType::Eof)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a comment token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// `#!` up to the end of the line
    Hashbang,
    /// `//` up to the end of the line
    Line,
    /// `/* */`
    Block,
    /// `/** */`
    Docblock,
}

impl CommentKind {
    /// Lowercase name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentKind::Hashbang => "hashbang",
            CommentKind::Line => "line",
            CommentKind::Block => "block",
            CommentKind::Docblock => "docblock",
        }
    }

    /// Returns true for comments that run to the end of the line
    pub fn is_line(&self) -> bool {
        matches!(self, CommentKind::Hashbang | CommentKind::Line)
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construct specific fields set when a token is entered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenFields {
    /// Comment kind
    pub kind: Option<CommentKind>,
    /// Private identifier flag
    pub private: Option<bool>,
}

impl TokenFields {
    /// Fields of a comment token
    pub fn comment(kind: CommentKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Fields of a keyid token
    pub fn keyid(private: bool) -> Self {
        Self {
            private: Some(private),
            ..Default::default()
        }
    }
}

/// A lexical token
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Type tag
    #[serde(rename = "type")]
    pub ty: TokenType,
    /// Point of the first character
    pub start: Point,
    /// Point after the last character
    pub end: Point,
    /// Raw source text, `None` for the sentinels
    pub value: Option<String>,
    /// Whitespace that immediately preceded the token
    pub whitespace: String,
    /// Comment kind, set on comment tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommentKind>,
    /// Private identifier flag, set on keyid tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// Following token
    #[serde(skip)]
    pub next: Option<TokenId>,
    /// Preceding token
    #[serde(skip)]
    pub previous: Option<TokenId>,
}

impl Token {
    /// Create an unlinked token with an empty range at `start`
    pub fn new(ty: TokenType, start: Point, fields: TokenFields) -> Self {
        Self {
            ty,
            start,
            end: start,
            value: None,
            whitespace: String::new(),
            kind: fields.kind,
            private: fields.private,
            next: None,
            previous: None,
        }
    }

    /// Range covered by the token
    pub fn position(&self) -> Position {
        Position::new(self.start, self.end)
    }

    /// Raw value, or `""` for the sentinels
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Returns true if the token was preceded by whitespace
    pub fn has_whitespace(&self) -> bool {
        !self.whitespace.is_empty()
    }

    /// The keyword a keyid token spells, if any
    ///
    /// # Example
    ///
    /// ```
    /// use esfc_lex::{Keyword, Lexer};
    ///
    /// let lexer = Lexer::new("typeof x");
    /// let tokens: Vec<_> = lexer.iter().collect();
    ///
    /// assert_eq!(tokens[1].keyword(), Some(Keyword::Typeof));
    /// assert_eq!(tokens[2].keyword(), None);
    /// ```
    pub fn keyword(&self) -> Option<Keyword> {
        match self.ty {
            TokenType::Keyid => Keyword::lookup(self.text()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {:?}", self.ty, value),
            None => write!(f, "{}", self.ty),
        }
    }
}

/// Arena of tokens linked from `sof` to `eof`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenList {
    arena: IndexVec<TokenId, Token>,
    head: TokenId,
    tail: TokenId,
}

impl TokenList {
    pub(crate) fn new(arena: IndexVec<TokenId, Token>, head: TokenId, tail: TokenId) -> Self {
        Self { arena, head, tail }
    }

    /// Id of the `sof` token
    pub fn head(&self) -> TokenId {
        self.head
    }

    /// Id of the `eof` token
    pub fn tail(&self) -> TokenId {
        self.tail
    }

    /// Look up a token
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.arena.get(id)
    }

    /// Id of the token after `id`
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        self.arena.get(id).and_then(|token| token.next)
    }

    /// Id of the token before `id`
    pub fn previous(&self, id: TokenId) -> Option<TokenId> {
        self.arena.get(id).and_then(|token| token.previous)
    }

    /// Walk the list from `sof` to `eof`
    pub fn iter(&self) -> Tokens<'_> {
        Tokens {
            list: self,
            cursor: Some(self.head),
        }
    }

    /// Walk the list from `sof` to `eof`, yielding ids
    pub fn ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        std::iter::successors(Some(self.head), move |id| self.next(*id))
    }

    /// Number of linked tokens, sentinels included
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a list holds at least its two sentinels
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<TokenId> for TokenList {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Token {
        &self.arena[id]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        self.iter()
    }
}

/// Iterator over the linked tokens of a [`TokenList`]
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    list: &'a TokenList,
    cursor: Option<TokenId>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.list.get(self.cursor?)?;
        self.cursor = token.next;
        Some(token)
    }
}
