//! Test Utilities for the esfc-lex Integration Suite
//!
//! Helpers shared by the integration and property tests. Every helper
//! walks the token list through the public API only.

#![allow(dead_code)]

use esfc_lex::{Lexer, Token, TokenType};

/// Sample module exercising every construct
pub const COUNTER: &str = include_str!("../fixtures/counter.mjs");

/// ============================================================================
/// COLLECTORS
/// ============================================================================

/// Tokens between the sentinels, cloned
pub fn inner(lexer: &Lexer) -> Vec<Token> {
    lexer
        .iter()
        .filter(|t| !t.ty.is_sentinel())
        .cloned()
        .collect()
}

/// Types of every linked token, sentinels included
pub fn types(lexer: &Lexer) -> Vec<TokenType> {
    lexer.iter().map(|t| t.ty).collect()
}

/// Rebuild the source from whitespace and values
pub fn reassemble(lexer: &Lexer) -> String {
    lexer
        .iter()
        .map(|t| format!("{}{}", t.whitespace, t.text()))
        .collect()
}

/// ============================================================================
/// ASSERTIONS
/// ============================================================================

/// Assert the structural invariants every token list must hold
pub fn assert_well_formed(lexer: &Lexer) {
    let list = lexer.tokens();
    let tokens: Vec<_> = lexer.iter().collect();

    assert_eq!(tokens.first().map(|t| t.ty), Some(TokenType::Sof));
    assert_eq!(tokens.last().map(|t| t.ty), Some(TokenType::Eof));
    assert_eq!(
        tokens.iter().filter(|t| t.ty.is_sentinel()).count(),
        2,
        "exactly two sentinels"
    );
    assert!(
        tokens.iter().all(|t| t.ty != TokenType::Whitespace),
        "whitespace token left in the list"
    );

    for id in list.ids() {
        if let Some(next) = list.next(id) {
            assert_eq!(list.previous(next), Some(id), "broken back link");
            assert!(list[id].end <= list[next].start, "tokens overlap");
        }
    }

    for token in &tokens {
        assert!(token.start <= token.end, "inverted token {}", token);
        if !token.ty.is_sentinel() {
            assert_eq!(
                token.text().chars().count(),
                token.end.offset - token.start.offset,
                "value length differs from range of {}",
                token
            );
        }
    }
}
