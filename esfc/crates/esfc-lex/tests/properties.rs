//! Property Tests - Token List Invariants
//!
//! Arbitrary input must always produce a well formed list that gives the
//! source back, whatever messages are raised along the way.

mod common;

use common::{assert_well_formed, reassemble};
use esfc_lex::{Lexer, TokenType};
use proptest::prelude::*;

/// Characters that open, close or break every construct.
const TRICKY: &str = "[a-z0-9_$#!\\\\/*'\"`.+\\-eExXn \\t\\r\\n\u{2028}\u{FEFF}{}()]{0,80}";

#[test]
fn test_property_tricky_input_is_well_formed() {
    proptest!(|(source in TRICKY)| {
        let lexer = Lexer::new(&source);
        assert_well_formed(&lexer);
        prop_assert_eq!(reassemble(&lexer), source);
    });
}

#[test]
fn test_property_printable_input_is_well_formed() {
    proptest!(|(source in "\\PC{0,120}")| {
        let lexer = Lexer::new(&source);
        assert_well_formed(&lexer);
        prop_assert_eq!(reassemble(&lexer), source);
    });
}

#[test]
fn test_property_tail_offset_is_length() {
    proptest!(|(source in "\\PC{0,120}")| {
        let lexer = Lexer::new(&source);
        prop_assert_eq!(lexer.tail().start.offset, source.chars().count());
    });
}

#[test]
fn test_property_relexing_is_idempotent() {
    proptest!(|(source in TRICKY)| {
        let first = Lexer::new(&source);
        let second = Lexer::new(&source);
        prop_assert!(first.iter().eq(second.iter()));
        prop_assert_eq!(&*first.messages(), &*second.messages());
    });
}

#[test]
fn test_property_identifiers_are_single_keyids() {
    proptest!(|(input in "[a-zA-Z_$][a-zA-Z0-9_$]{0,40}")| {
        let lexer = Lexer::new(&input);
        let tokens: Vec<_> = lexer.iter().collect();
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[1].ty, TokenType::Keyid);
        prop_assert_eq!(tokens[1].text(), input.as_str());
    });
}

#[test]
fn test_property_decimal_numbers_are_single_tokens() {
    proptest!(|(input in "[0-9][0-9_]{0,20}(\\.[0-9]{1,5})?([eE][+-]?[0-9]{1,3})?")| {
        let lexer = Lexer::new(&input);
        let tokens: Vec<_> = lexer.iter().collect();
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[1].ty, TokenType::Number);
    });
}

#[test]
fn test_property_hex_bigints() {
    proptest!(|(digits in "[0-9a-fA-F]{1,16}")| {
        let source = format!("0x{}n", digits);
        let lexer = Lexer::new(&source);
        let token = lexer.iter().nth(1).cloned().unwrap();
        prop_assert_eq!(token.ty, TokenType::Bigint);
        prop_assert_eq!(token.text(), source.as_str());
    });
}

#[test]
fn test_property_closed_strings_raise_nothing() {
    proptest!(|(body in "[^\"'\\\\\\r\\n\u{2028}\u{2029}]{0,60}")| {
        let source = format!("\"{}\"", body);
        let lexer = Lexer::new(&source);
        prop_assert!(lexer.messages().is_empty());
        prop_assert_eq!(lexer.iter().count(), 3);
    });
}
