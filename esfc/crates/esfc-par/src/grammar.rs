//! The grammar capability.
//!
//! [`Grammar`] asks implementors for a [`Punctuators`] table and derives
//! every punctuator and operator parser from it.

use crate::combinator::Runner;
use crate::operator::{self, ExpressionKind, UpdateOperator};
use crate::punctuator::{self, Punctuator, Punctuators};
use esfc_lex::Token;

/// Combinator constructors for punctuators and operators
pub trait Grammar {
    /// The single punctuator parsers
    fn punctuators(&self) -> &Punctuators;

    // ==================== PUNCTUATORS ====================

    /// Parser for one punctuator
    fn punctuator(&self, p: Punctuator) -> Runner<Token> {
        self.punctuators().get(p)
    }

    /// `&`
    fn ampersand(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Ampersand)
    }

    /// `*`
    fn asterisk(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Asterisk)
    }

    /// `@`
    fn at(&self) -> Runner<Token> {
        self.punctuator(Punctuator::At)
    }

    /// `\`
    fn backslash(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Backslash)
    }

    /// `` ` ``
    fn backtick(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Backtick)
    }

    /// `|`
    fn bar(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Bar)
    }

    /// `^`
    fn caret(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Caret)
    }

    /// `:`
    fn colon(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Colon)
    }

    /// `,`
    fn comma(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Comma)
    }

    /// `$`
    fn dollar(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Dollar)
    }

    /// `.`
    fn dot(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Dot)
    }

    /// `=`
    fn equal(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Equal)
    }

    /// `!`
    fn exclamation(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Exclamation)
    }

    /// `>`
    fn gt(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Gt)
    }

    /// `#`
    fn hash(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Hash)
    }

    /// `{`
    fn left_brace(&self) -> Runner<Token> {
        self.punctuator(Punctuator::LeftBrace)
    }

    /// `[`
    fn left_bracket(&self) -> Runner<Token> {
        self.punctuator(Punctuator::LeftBracket)
    }

    /// `(`
    fn left_paren(&self) -> Runner<Token> {
        self.punctuator(Punctuator::LeftParen)
    }

    /// `<`
    fn lt(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Lt)
    }

    /// `-`
    fn minus(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Minus)
    }

    /// `%`
    fn percent(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Percent)
    }

    /// `+`
    fn plus(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Plus)
    }

    /// `?`
    fn question(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Question)
    }

    /// `}`
    fn right_brace(&self) -> Runner<Token> {
        self.punctuator(Punctuator::RightBrace)
    }

    /// `]`
    fn right_bracket(&self) -> Runner<Token> {
        self.punctuator(Punctuator::RightBracket)
    }

    /// `)`
    fn right_paren(&self) -> Runner<Token> {
        self.punctuator(Punctuator::RightParen)
    }

    /// `;`
    fn semicolon(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Semicolon)
    }

    /// `/`
    fn slash(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Slash)
    }

    /// `~`
    fn tilde(&self) -> Runner<Token> {
        self.punctuator(Punctuator::Tilde)
    }

    /// Wrap `parser` so it rejects a token preceded by whitespace
    fn nw<T: 'static>(&self, parser: Runner<T>) -> Runner<T>
    where
        Self: Sized,
    {
        punctuator::nw(parser)
    }

    /// `=>`
    fn arrow(&self) -> Runner<(Token, Token)> {
        punctuator::arrow(self.punctuators())
    }

    /// `...`
    fn ellipsis(&self) -> Runner<(Token, Token, Token)> {
        punctuator::ellipsis(self.punctuators())
    }

    // ==================== OPERATORS ====================

    /// `+ - * ** / %`
    fn arithmetic_operator(&self) -> Runner<String> {
        operator::arithmetic_operator(self.punctuators())
    }

    /// `=` and the compound assignments
    fn assignment_operator(&self) -> Runner<String> {
        operator::assignment_operator(self.punctuators())
    }

    /// Any binary operator with its expression kind
    fn binary_operator(&self) -> Runner<(String, ExpressionKind)> {
        operator::binary_operator(self.punctuators())
    }

    /// `| ^ &`
    fn bitwise_binary_operator(&self) -> Runner<String> {
        operator::bitwise_binary_operator(self.punctuators())
    }

    /// `<< >> >>>`
    fn bitwise_shift_operator(&self) -> Runner<String> {
        operator::bitwise_shift_operator(self.punctuators())
    }

    /// `== === != !==`
    fn equality_operator(&self) -> Runner<String> {
        operator::equality_operator(self.punctuators())
    }

    /// `assert` or `with`
    fn import_assertion_operator(&self) -> Runner<String> {
        operator::import_assertion_operator()
    }

    /// `?? || &&`
    fn logical_operator(&self) -> Runner<String> {
        operator::logical_operator(self.punctuators())
    }

    /// `?.`
    fn optional_chaining_operator(&self) -> Runner<(Token, Token)> {
        operator::optional_chaining_operator(self.punctuators())
    }

    /// `< > <= >= in instanceof`
    fn relational_operator(&self) -> Runner<String> {
        operator::relational_operator(self.punctuators())
    }

    /// `delete typeof void ! - + ~`
    fn unary_operator(&self) -> Runner<String> {
        operator::unary_operator(self.punctuators())
    }

    /// `keyof readonly typeof unique`
    fn unary_type_operator(&self) -> Runner<String> {
        operator::unary_type_operator()
    }

    /// `--` or `++`
    fn update_operator(&self) -> Runner<UpdateOperator> {
        operator::update_operator(self.punctuators())
    }
}
