//! Edge case tests for esfc-par

#[cfg(test)]
mod tests {
    use crate::{Grammar, ParseError, Parser, Punctuator};

    fn whole<T: 'static>(source: &str, pick: impl Fn(&Parser) -> crate::Runner<T>) -> bool {
        let parser = Parser::new(source);
        parser.parse_file(&pick(&parser)).is_ok()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let parser = Parser::new("");
        let error = parser.parse(&parser.plus()).unwrap_err();
        assert_eq!(error.to_string(), "expected \"+\", found eof at 1:1");
        assert!(parser.parse_file(&parser.plus()).is_err());
    }

    #[test]
    fn test_edge_past_end_of_list() {
        let parser = Parser::new("+");
        let error = parser.parse_at(&parser.plus(), None).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnexpectedEnd {
                expected: "\"+\"".into()
            }
        );
    }

    #[test]
    fn test_edge_dollar_is_keyid_but_matches() {
        let parser = Parser::new("$");
        let candidate = parser.parse_file(&parser.dollar()).unwrap();
        assert_eq!(candidate.result.ty, esfc_lex::TokenType::Keyid);
    }

    #[test]
    fn test_edge_quote_inside_string_is_not_punctuator() {
        assert!(!whole("'+'", |p| p.plus()));
        assert!(whole("'+'", |_| crate::tok(esfc_lex::TokenType::String).map(|_| ())));
    }

    #[test]
    fn test_edge_line_break_between_pieces() {
        assert!(!whole("=\n>", |p| p.arrow()));
        assert!(!whole("+\r\n+", |p| p.update_operator()));
        assert!(!whole("?\u{2028}?", |p| p.logical_operator()));
    }

    #[test]
    fn test_edge_comment_between_pieces() {
        assert!(!whole("=/**/>", |p| p.arrow()));
        assert!(!whole("=/**/=", |p| p.equality_operator()));
    }

    #[test]
    fn test_edge_leading_whitespace_allowed_on_first_piece() {
        assert!(whole("  \n=>", |p| p.arrow()));
        assert!(whole("\t...", |p| p.ellipsis()));
        assert!(whole(" ?.", |p| p.optional_chaining_operator()));
    }

    #[test]
    fn test_edge_quadruple_gt_is_not_shift() {
        assert!(!whole(">>>>", |p| p.bitwise_shift_operator()));
        assert!(whole(">>>", |p| p.bitwise_shift_operator()));
    }

    #[test]
    fn test_edge_triple_lt_assignment() {
        let parser = Parser::new("<<<=");
        let candidate = parser.parse_file(&parser.assignment_operator()).unwrap();
        assert_eq!(candidate.result, "<<<=");
    }

    #[test]
    fn test_edge_binary_prefers_relational_for_gt() {
        let parser = Parser::new(">>");
        let candidate = parser.parse(&parser.binary_operator()).unwrap();
        assert_eq!(candidate.result.0, ">");
        assert!(parser.parse_file(&parser.binary_operator()).is_err());
    }

    #[test]
    fn test_edge_keyword_operators_need_keyid() {
        assert!(whole("typeof", |p| p.unary_operator()));
        assert!(whole("typeof", |p| p.unary_type_operator()));
        assert!(!whole("Typeof", |p| p.unary_type_operator()));
        assert!(!whole("#with", |p| p.import_assertion_operator()));
    }

    #[test]
    fn test_edge_every_punctuator_rejects_others() {
        let parser = Parser::new(";");
        for p in Punctuator::ALL {
            let ok = parser.parse_file(&parser.punctuator(p)).is_ok();
            assert_eq!(ok, p == Punctuator::Semicolon, "{:?}", p);
        }
    }
}
