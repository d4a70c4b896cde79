//! String literal construct.
//!
//! A string runs from its opening quote to the next unescaped copy of it.
//! It is cut short, with an "Unterminated string constant" message, by the
//! end of the file, by a line ending (escaped or not) and by an unescaped
//! quote of the other kind.

use super::{Construct, Step, Tokenize};
use crate::cursor::Code;
use crate::lexer::TokenizeContext;
use crate::token::{TokenFields, TokenType};
use esfc_util::RaiseOptions;

/// Recognizes single and double quoted strings
#[derive(Clone, Copy, Debug, Default)]
pub struct StringLiteral;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Body,
    /// After a backslash; the next character is taken literally.
    Escape,
}

struct Machine {
    /// `'` or `"`
    quote: char,
    state: State,
}

impl Machine {
    /// The quote that does not open this string.
    fn other(&self) -> char {
        if self.quote == '"' {
            '\''
        } else {
            '"'
        }
    }

    fn unterminated(&self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step {
        ctx.raise(
            "Unterminated string constant",
            ctx.now(),
            RaiseOptions::new()
                .actual(code)
                .expected([self.quote.to_string()])
                .rule_id("string"),
        );
        ctx.exit(TokenType::String);
        Step::Resume
    }
}

impl Construct for StringLiteral {
    fn name(&self) -> &'static str {
        "string"
    }

    /// A quote right after a backslash is not an opener.
    fn previous(&self, code: Code) -> bool {
        code != Some('\\')
    }

    fn test(&self, ctx: &TokenizeContext<'_>) -> Option<Box<dyn Tokenize>> {
        match ctx.code()? {
            quote @ ('\'' | '"') => Some(Box::new(Machine {
                quote,
                state: State::Start,
            })),
            _ => None,
        }
    }
}

impl Tokenize for Machine {
    fn step(&mut self, ctx: &mut TokenizeContext<'_>, code: Code) -> Step {
        if self.state != State::Start && (code.is_none() || ctx.is_line_ending(code)) {
            return self.unterminated(ctx, code);
        }

        match (self.state, code) {
            (State::Start, _) => {
                ctx.enter(TokenType::String, TokenFields::default());
                ctx.consume(code);
                self.state = State::Body;
                Step::Next
            },
            (State::Body, Some(c)) if c == self.quote => {
                ctx.consume(code);
                ctx.exit(TokenType::String);
                Step::Resume
            },
            (State::Body, Some(c)) if c == self.other() => self.unterminated(ctx, code),
            (State::Body, Some('\\')) => {
                ctx.consume(code);
                self.state = State::Escape;
                Step::Next
            },
            (State::Body | State::Escape, _) => {
                ctx.consume(code);
                self.state = State::Body;
                Step::Next
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenType};
    use crate::Lexer;
    use esfc_util::Point;

    fn strings(lexer: &Lexer) -> Vec<Token> {
        lexer
            .iter()
            .filter(|t| t.ty == TokenType::String)
            .cloned()
            .collect()
    }

    #[test]
    fn test_non_string_start() {
        let lexer = Lexer::new("");
        assert!(strings(&lexer).is_empty());
    }

    #[test]
    fn test_string() {
        for source in ["\"string\"", "'string'", "''", "\"a\\'b\"", "'say \\\"hi\\\"'"] {
            let lexer = Lexer::new(source);
            let found = strings(&lexer);
            assert_eq!(found.len(), 1, "{:?}", source);
            assert_eq!(found[0].text(), source);
            assert!(lexer.messages().is_empty(), "{:?}", source);
        }
    }

    #[test]
    fn test_other_quote_in_body_splits_string() {
        let cases: [(&str, &[&str], usize, Point); 2] = [
            ("\"it's\"", &["\"it", "'s", "\""], 3, Point::new(1, 4, 3)),
            ("'say \"hi\"'", &["'say ", "\"hi\"", "'"], 2, Point::new(1, 6, 5)),
        ];

        for (source, expected, count, place) in cases {
            let lexer = Lexer::new(source);
            let found: Vec<_> = strings(&lexer).iter().map(|t| t.text().to_string()).collect();
            assert_eq!(found, expected, "{:?}", source);

            let messages = lexer.messages();
            assert_eq!(messages.len(), count, "{:?}", source);
            assert_eq!(messages[0].reason, "Unterminated string constant");
            assert_eq!(messages[0].place.start(), place);
        }
    }

    #[test]
    fn test_escaped_opener() {
        for source in ["\"\\\"\"", "'\\''"] {
            let lexer = Lexer::new(source);
            assert_eq!(lexer.iter().count(), 3, "{:?}", source);
            assert_eq!(strings(&lexer)[0].text(), source);
            assert!(lexer.messages().is_empty());
        }
    }

    #[test]
    fn test_escaped_backslash_before_closer() {
        let lexer = Lexer::new("'a\\\\' b");
        let tokens: Vec<_> = lexer.iter().collect();
        assert_eq!(tokens[1].text(), "'a\\\\'");
        assert_eq!(tokens[2].text(), "b");
        assert!(lexer.messages().is_empty());
    }

    #[test]
    fn test_unterminated_at_eof() {
        for quote in ['"', '\''] {
            let source = format!("{}string", quote);
            let lexer = Lexer::new(&source);
            assert_eq!(strings(&lexer)[0].text(), source);

            let messages = lexer.messages();
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].reason, "Unterminated string constant");
            assert_eq!(messages[0].actual, None);
            assert_eq!(messages[0].expected, Some(vec![quote.to_string()]));
            assert_eq!(messages[0].rule_id.as_deref(), Some("string"));
            assert_eq!(messages[0].place.start(), Point::new(1, 8, 7));
        }
    }

    #[test]
    fn test_unterminated_at_line_ending() {
        for quote in ['"', '\''] {
            let source = format!("{}string\n", quote);
            let lexer = Lexer::new(&source);
            assert_eq!(strings(&lexer)[0].text(), format!("{}string", quote));
            assert_eq!(lexer.tail().whitespace, "\n");

            let messages = lexer.messages();
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].actual.as_deref(), Some("\n"));
        }
    }

    #[test]
    fn test_escaped_line_ending_still_terminates() {
        let lexer = Lexer::new("'a\\\nb'");
        assert_eq!(strings(&lexer)[0].text(), "'a\\");
        assert!(!lexer.messages().is_empty());
    }

    #[test]
    fn test_unterminated_opener_mismatch() {
        for (quote, other) in [('"', '\''), ('\'', '"')] {
            let source = format!("{q}string{o}{o}", q = quote, o = other);
            let lexer = Lexer::new(&source);
            let found = strings(&lexer);

            assert_eq!(found.len(), 2);
            assert_eq!(found[0].text(), format!("{}string", quote));
            assert_eq!(found[1].text(), format!("{o}{o}", o = other));

            let messages = lexer.messages();
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].actual, Some(other.to_string()));
            assert_eq!(messages[0].expected, Some(vec![quote.to_string()]));
        }
    }

    #[test]
    fn test_quote_after_backslash_is_punctuator() {
        let lexer = Lexer::new("\\'");
        let types: Vec<_> = lexer.iter().map(|t| t.ty).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Sof,
                TokenType::Punctuator,
                TokenType::Punctuator,
                TokenType::Eof
            ]
        );
    }
}
