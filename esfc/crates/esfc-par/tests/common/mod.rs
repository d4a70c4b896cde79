//! Test Utilities for the esfc-par Integration Suite
//!
//! Every helper builds a fresh [`Parser`] and runs one grammar rule over
//! the whole file, the way downstream code consumes the grammar.

#![allow(dead_code)]

use esfc_par::{Output, Parser, Runner};

/// Samples from the assignment operator table
pub const ASSIGNMENT_OPERATORS: [&str; 16] = [
    "%=", "&&=", "&=", "**=", "*=", "+=", "-=", "/=", "<<=", "=", ">>=", ">>>=", "??=", "^=",
    "|=", "||=",
];

/// ============================================================================
/// RUNNERS
/// ============================================================================

/// Run the rule `pick` selects over all of `source`
pub fn parse_file<T, F>(source: &str, pick: F) -> Output<T>
where
    T: 'static,
    F: Fn(&Parser) -> Runner<T>,
{
    let parser = Parser::new(source);
    parser.parse_file(&pick(&parser))
}

/// Result of the rule `pick` selects over all of `source`
///
/// Panics with the parse error if the rule does not cover the file.
pub fn result<T, F>(source: &str, pick: F) -> T
where
    T: 'static,
    F: Fn(&Parser) -> Runner<T>,
{
    match parse_file(source, pick) {
        Ok(candidate) => candidate.result,
        Err(error) => panic!("{:?} should parse: {}", source, error),
    }
}

/// ============================================================================
/// ASSERTIONS
/// ============================================================================

/// Assert the rule `pick` selects rejects all of `source`
pub fn assert_fails<T, F>(source: &str, pick: F)
where
    T: 'static,
    F: Fn(&Parser) -> Runner<T>,
{
    assert!(
        parse_file(source, pick).is_err(),
        "{:?} should not parse",
        source
    );
}
