//! Unicode character classes used by the constructs.
//!
//! Identifier classes come from the Unicode XID tables, punctuation from the
//! general category tables. Whitespace and line endings follow ECMAScript.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};
use unicode_xid::UnicodeXID;

/// Zero width non-joiner, allowed inside identifiers.
const ZWNJ: char = '\u{200C}';

/// Zero width joiner, allowed inside identifiers.
const ZWJ: char = '\u{200D}';

/// Checks if a character may start an identifier (`ID_Start`).
///
/// `$`, `_`, `#` and `\` are handled by the keyid construct itself.
///
/// # Example
///
/// ```
/// use esfc_lex::unicode::is_id_start;
///
/// assert!(is_id_start('a'));
/// assert!(is_id_start('α'));
/// assert!(is_id_start('你'));
/// assert!(!is_id_start('1'));
/// assert!(!is_id_start('+'));
/// ```
pub fn is_id_start(c: char) -> bool {
    c.is_xid_start()
}

/// Checks if a character may continue an identifier (`ID_Continue`).
///
/// # Example
///
/// ```
/// use esfc_lex::unicode::is_id_continue;
///
/// assert!(is_id_continue('a'));
/// assert!(is_id_continue('_'));
/// assert!(is_id_continue('1'));
/// assert!(is_id_continue('\u{200D}'));
/// assert!(!is_id_continue('$'));
/// assert!(!is_id_continue(' '));
/// ```
pub fn is_id_continue(c: char) -> bool {
    c.is_xid_continue() || c == ZWNJ || c == ZWJ
}

/// Checks if a character is ECMAScript whitespace or a line terminator.
///
/// This is the class matched by `\s`: Unicode `White_Space` and the byte
/// order mark, but not NEL (U+0085).
///
/// # Example
///
/// ```
/// use esfc_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\u{2028}'));
/// assert!(is_whitespace('\u{FEFF}'));
/// assert!(!is_whitespace('\u{85}'));
/// assert!(!is_whitespace('a'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Checks if a code is a line ending: CR, LF, U+2028 or U+2029.
///
/// End of file (`None`) is not a line ending.
///
/// # Example
///
/// ```
/// use esfc_lex::unicode::is_line_ending;
///
/// assert!(is_line_ending(Some('\n')));
/// assert!(is_line_ending(Some('\r')));
/// assert!(is_line_ending(Some('\u{2028}')));
/// assert!(is_line_ending(Some('\u{2029}')));
/// assert!(!is_line_ending(Some(' ')));
/// assert!(!is_line_ending(None));
/// ```
pub fn is_line_ending(code: Option<char>) -> bool {
    matches!(code, Some('\n' | '\r' | '\u{2028}' | '\u{2029}'))
}

/// Checks if a character is Unicode punctuation or a symbol (`\p{P}`, `\p{S}`).
///
/// # Example
///
/// ```
/// use esfc_lex::unicode::is_punctuation;
///
/// assert!(is_punctuation(';'));
/// assert!(is_punctuation('+'));
/// assert!(is_punctuation('`'));
/// assert!(is_punctuation('$'));
/// assert!(is_punctuation('«'));
/// assert!(!is_punctuation('a'));
/// assert!(!is_punctuation(' '));
/// ```
pub fn is_punctuation(c: char) -> bool {
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Punctuation | GeneralCategoryGroup::Symbol
    )
}

/// Checks if a character is a digit of a radix literal.
///
/// # Example
///
/// ```
/// use esfc_lex::unicode::is_digit_in_radix;
///
/// assert!(is_digit_in_radix('1', 2));
/// assert!(!is_digit_in_radix('2', 2));
/// assert!(is_digit_in_radix('7', 8));
/// assert!(!is_digit_in_radix('8', 8));
/// assert!(is_digit_in_radix('f', 16));
/// assert!(is_digit_in_radix('F', 16));
/// assert!(!is_digit_in_radix('g', 16));
/// ```
pub fn is_digit_in_radix(c: char, radix: u32) -> bool {
    c.is_digit(radix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_punctuation_is_covered() {
        for c in "&*@\\`|^:,$.=!>#{[(<-%+?}]);/~'\"".chars() {
            assert!(is_punctuation(c), "{:?} should be punctuation", c);
        }
    }

    #[test]
    fn test_identifier_classes() {
        assert!(!is_id_start('_'));
        assert!(is_id_continue('_'));
        assert!(!is_id_start('$'));
        assert!(is_id_continue('٣'));
        assert!(!is_id_start('٣'));
    }

    #[test]
    fn test_whitespace_includes_line_terminators() {
        for c in ['\n', '\r', '\u{2028}', '\u{2029}', '\u{A0}', '\u{3000}', '\u{B}', '\u{C}'] {
            assert!(is_whitespace(c), "{:?} should be whitespace", c);
        }
    }

    #[test]
    fn test_line_ending_excludes_other_whitespace() {
        for c in [' ', '\t', '\u{A0}', '\u{FEFF}', '\u{85}'] {
            assert!(!is_line_ending(Some(c)), "{:?} is not a line ending", c);
        }
    }
}
