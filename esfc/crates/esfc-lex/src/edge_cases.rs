//! Edge case tests for esfc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexerOptions, TokenType};
    use esfc_util::Point;

    fn lex_all(source: &str) -> Vec<(TokenType, String)> {
        Lexer::new(source)
            .iter()
            .filter(|t| !t.ty.is_sentinel())
            .map(|t| (t.ty, t.text().to_string()))
            .collect()
    }

    fn values(source: &str) -> Vec<String> {
        lex_all(source).into_iter().map(|(_, v)| v).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let lexer = Lexer::new("");
        assert_eq!(lexer.iter().count(), 2);
        assert_eq!(lexer.head().next, Some(lexer.tokens().tail()));
        assert_eq!(lexer.tail().previous, Some(lexer.tokens().head()));
        assert_eq!(lexer.tail().start, Point::START);
    }

    #[test]
    fn test_edge_whitespace_only() {
        let lexer = Lexer::new("\t \n");
        assert_eq!(lexer.iter().count(), 2);
        assert_eq!(lexer.tail().whitespace, "\t \n");
        assert_eq!(lexer.tail().start, Point::new(2, 1, 3));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("let {} = 1;", name));
        assert_eq!(tokens[1], (TokenType::Keyid, name));
    }

    #[test]
    fn test_edge_binary_bigint() {
        assert_eq!(lex_all("0b1010n"), vec![(TokenType::Bigint, "0b1010n".into())]);
    }

    #[test]
    fn test_edge_float_with_separator_and_exponent() {
        assert_eq!(
            lex_all("1_000.5e-2"),
            vec![(TokenType::Number, "1_000.5e-2".into())]
        );
        assert_eq!(
            lex_all("100_130e-2_6"),
            vec![(TokenType::Number, "100_130e-2_6".into())]
        );
    }

    #[test]
    fn test_edge_unterminated_block_comment() {
        let lexer = Lexer::new("/* unterminated");
        let tokens = lex_all("/* unterminated");
        assert_eq!(tokens, vec![(TokenType::Comment, "/* unterminated".into())]);
        let messages = lexer.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].reason, "Unterminated comment");
        assert_eq!(messages[0].place.start(), Point::new(1, 16, 15));
    }

    #[test]
    fn test_edge_unterminated_escaped_string() {
        let lexer = Lexer::new("\"a\\\"b");
        let token = lexer.iter().nth(1).cloned().unwrap();
        assert_eq!(token.ty, TokenType::String);
        assert_eq!(token.text(), "\"a\\\"b");

        let messages = lexer.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].expected, Some(vec!["\"".to_string()]));
        assert_eq!(messages[0].actual, None);
    }

    #[test]
    fn test_edge_crlf_counts_once() {
        let lexer = Lexer::new("a\r\nb\r\nc");
        let tokens: Vec<_> = lexer.iter().collect();
        assert_eq!(tokens[2].start, Point::new(2, 1, 3));
        assert_eq!(tokens[3].start, Point::new(3, 1, 6));
        assert_eq!(tokens[3].whitespace, "\r\n");
    }

    #[test]
    fn test_edge_multibyte_offsets_are_characters() {
        let lexer = Lexer::new("你好 = 'ü'");
        let tokens: Vec<_> = lexer.iter().collect();
        assert_eq!(tokens[1].end, Point::new(1, 3, 2));
        assert_eq!(tokens[3].start, Point::new(1, 6, 5));
        assert_eq!(tokens[3].end, Point::new(1, 9, 8));
        assert_eq!(lexer.tail().start.offset, "你好 = 'ü'".chars().count());
    }

    #[test]
    fn test_edge_byte_order_mark_is_whitespace() {
        let lexer = Lexer::new("\u{FEFF}x");
        let x = lexer.iter().nth(1).unwrap();
        assert_eq!(x.whitespace, "\u{FEFF}");
        assert_eq!(x.start, Point::new(1, 2, 1));
    }

    #[test]
    fn test_edge_adjacent_comments() {
        assert_eq!(values("/**//* */// x"), vec!["/**/", "/* */", "// x"]);
    }

    #[test]
    fn test_edge_division_is_punctuator() {
        assert_eq!(values("a / b"), vec!["a", "/", "b"]);
    }

    #[test]
    fn test_edge_hash_bang_anywhere() {
        let tokens = lex_all("x #!y");
        assert_eq!(tokens[1], (TokenType::Comment, "#!y".into()));
    }

    #[test]
    fn test_edge_from_option_offsets_everything() {
        let options = LexerOptions {
            from: Some(Point::new(5, 5, 50)),
        };
        let lexer = Lexer::with_options(" 'x", options).unwrap();
        let string = lexer.iter().nth(1).unwrap();
        assert_eq!(string.start, Point::new(5, 6, 51));
        assert_eq!(lexer.messages()[0].place.start(), Point::new(5, 8, 53));
    }

    #[test]
    fn test_edge_relexing_is_idempotent() {
        let source = "#!/bin/env node\nconst a = `${b}` /* c */ + 0x1Fn;\r\n'd";
        let first: Vec<_> = Lexer::new(source).iter().cloned().collect();
        let second: Vec<_> = Lexer::new(source).iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(
            Lexer::new(source).messages().len(),
            Lexer::new(source).messages().len()
        );
    }
}
