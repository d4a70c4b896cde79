//! Compound operators assembled from punctuator and keyword tokens.
//!
//! The lexer never joins punctuators, so `>>>=` arrives as four tokens.
//! Each operator category below is a combinator over those tokens; the
//! pieces after the first are wrapped in [`nw`] so that `> >` is two
//! relational operators and not a shift.
//!
//! Alternatives are tried in order and the first match wins.

use crate::combinator::{
    alt, apply, combine, condition, keyword, opt, seq2, seq3, succ, Runner,
};
use crate::punctuator::{nw, Punctuator, Punctuators};
use esfc_lex::{Keyword, Token};
use esfc_util::Point;
use std::fmt;

/// Tokens matched by a compound parser, nested the way they were matched
///
/// Optional pieces that did not match are kept as [`Matched::Skipped`] so the
/// shape of the parse survives until [`apply_operator`] flattens it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Matched {
    /// A single token
    Token(Token),
    /// An optional piece that was absent
    Skipped,
    /// A sequence of pieces
    Group(Vec<Matched>),
}

impl From<Token> for Matched {
    fn from(token: Token) -> Self {
        Matched::Token(token)
    }
}

impl<T: Into<Matched>> From<Option<T>> for Matched {
    fn from(value: Option<T>) -> Self {
        value.map_or(Matched::Skipped, Into::into)
    }
}

impl<T: Into<Matched>> From<Vec<T>> for Matched {
    fn from(values: Vec<T>) -> Self {
        Matched::Group(values.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Matched>, B: Into<Matched>> From<(A, B)> for Matched {
    fn from((a, b): (A, B)) -> Self {
        Matched::Group(vec![a.into(), b.into()])
    }
}

impl<A: Into<Matched>, B: Into<Matched>, C: Into<Matched>> From<(A, B, C)> for Matched {
    fn from((a, b, c): (A, B, C)) -> Self {
        Matched::Group(vec![a.into(), b.into(), c.into()])
    }
}

/// Concatenate the raw values of every matched token, in order
///
/// # Example
///
/// ```
/// use esfc_lex::{Lexer, Token};
/// use esfc_par::{apply_operator, Matched};
///
/// let lexer = Lexer::new(">>=");
/// let tokens: Vec<Token> = lexer.iter().skip(1).take(3).cloned().collect();
/// let shift = (tokens[0].clone(), tokens[1].clone(), None::<Token>);
/// let matched = Matched::from((shift, tokens[2].clone()));
///
/// assert_eq!(apply_operator(&matched), ">>=");
/// ```
pub fn apply_operator(matched: &Matched) -> String {
    let mut operator = String::new();
    flatten(matched, &mut operator);
    operator
}

fn flatten(matched: &Matched, out: &mut String) {
    match matched {
        Matched::Token(token) => out.push_str(token.text()),
        Matched::Skipped => {},
        Matched::Group(pieces) => pieces.iter().for_each(|piece| flatten(piece, out)),
    }
}

/// Erase the shape of a parser's result
fn matched<T: Into<Matched> + 'static>(parser: Runner<T>) -> Runner<Matched> {
    parser.map(Into::into)
}

/// Turn a parser's matched tokens into operator text
fn operator<T: Into<Matched> + 'static>(parser: Runner<T>) -> Runner<String> {
    apply(parser, |value| apply_operator(&value.into()))
}

/// Expression kind a binary operator produces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// `+ - * ** / %`
    Arithmetic,
    /// `| ^ &` and the shifts
    Bitwise,
    /// `== != === !==`
    Equality,
    /// `&& || ??`
    Logical,
    /// `< > <= >= in instanceof`
    Relational,
}

impl ExpressionKind {
    /// Node type tag of the expression
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionKind::Arithmetic => "arithmeticExpression",
            ExpressionKind::Bitwise => "bitwiseExpression",
            ExpressionKind::Equality => "equalityExpression",
            ExpressionKind::Logical => "logicalExpression",
            ExpressionKind::Relational => "relationalExpression",
        }
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An update operator and the span of both of its tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateOperator {
    /// `--` or `++`
    pub operator: String,
    /// Start of the first token
    pub start: Point,
    /// End of the second token
    pub end: Point,
}

/// `+ - * ** / %`
pub fn arithmetic_operator(p: &Punctuators) -> Runner<String> {
    operator(alt(vec![
        matched(p.get(Punctuator::Plus)),
        matched(p.get(Punctuator::Minus)),
        matched(seq2(
            p.get(Punctuator::Asterisk),
            opt(nw(p.get(Punctuator::Asterisk))),
        )),
        matched(p.get(Punctuator::Slash)),
        matched(p.get(Punctuator::Percent)),
    ]))
}

/// `=` with an optional compound prefix, e.g. `>>>=` or `??=`
pub fn assignment_operator(p: &Punctuators) -> Runner<String> {
    let doubled = |punctuator: Punctuator| {
        matched(seq2(p.get(punctuator), opt(nw(p.get(punctuator)))))
    };
    let tripled = |punctuator: Punctuator| {
        matched(seq3(
            p.get(punctuator),
            nw(p.get(punctuator)),
            opt(nw(p.get(punctuator))),
        ))
    };

    let prefix = alt(vec![
        doubled(Punctuator::Asterisk),
        doubled(Punctuator::Ampersand),
        doubled(Punctuator::Bar),
        matched(seq2(
            p.get(Punctuator::Question),
            nw(p.get(Punctuator::Question)),
        )),
        tripled(Punctuator::Lt),
        tripled(Punctuator::Gt),
        matched(p.get(Punctuator::Caret)),
        matched(p.get(Punctuator::Slash)),
        matched(p.get(Punctuator::Minus)),
        matched(p.get(Punctuator::Percent)),
        matched(p.get(Punctuator::Plus)),
    ]);

    let equal = p.get(Punctuator::Equal);
    operator(combine(opt(prefix), move |prefix, _| match prefix {
        Some(prefix) => matched(seq2(succ(prefix), nw(equal.clone()))),
        None => matched(equal.clone()),
    }))
}

/// `| ^ &`
pub fn bitwise_binary_operator(p: &Punctuators) -> Runner<String> {
    operator(alt(vec![
        p.get(Punctuator::Bar),
        p.get(Punctuator::Caret),
        p.get(Punctuator::Ampersand),
    ]))
}

/// `<< >> >>>`
pub fn bitwise_shift_operator(p: &Punctuators) -> Runner<String> {
    let lt = p.get(Punctuator::Lt);
    let gt = p.get(Punctuator::Gt);
    let anchor = alt(vec![lt.clone(), gt.clone()]);

    operator(combine(anchor, move |anchor: Token, _| {
        let rest = condition(
            anchor.text() == "<",
            matched(nw(lt.clone())),
            matched(seq2(nw(gt.clone()), opt(nw(gt.clone())))),
        );
        seq2(succ(anchor), rest)
    }))
}

/// `== === != !==`
pub fn equality_operator(p: &Punctuators) -> Runner<String> {
    let equal = || p.get(Punctuator::Equal);
    operator(seq3(
        alt(vec![p.get(Punctuator::Exclamation), equal()]),
        nw(equal()),
        opt(nw(equal())),
    ))
}

/// `assert` or `with`
pub fn import_assertion_operator() -> Runner<String> {
    operator(alt(vec![keyword(Keyword::Assert), keyword(Keyword::With)]))
}

/// `?? || &&`
pub fn logical_operator(p: &Punctuators) -> Runner<String> {
    let pair = |punctuator: Punctuator| seq2(p.get(punctuator), nw(p.get(punctuator)));
    operator(alt(vec![
        pair(Punctuator::Question),
        pair(Punctuator::Bar),
        pair(Punctuator::Ampersand),
    ]))
}

/// `?.`, returned as its two tokens
pub fn optional_chaining_operator(p: &Punctuators) -> Runner<(Token, Token)> {
    seq2(p.get(Punctuator::Question), nw(p.get(Punctuator::Dot)))
}

/// `< > <= >= in instanceof`
pub fn relational_operator(p: &Punctuators) -> Runner<String> {
    operator(alt(vec![
        matched(seq2(
            alt(vec![p.get(Punctuator::Lt), p.get(Punctuator::Gt)]),
            opt(nw(p.get(Punctuator::Equal))),
        )),
        matched(keyword(Keyword::In)),
        matched(keyword(Keyword::Instanceof)),
    ]))
}

/// `delete typeof void ! - + ~`
pub fn unary_operator(p: &Punctuators) -> Runner<String> {
    operator(alt(vec![
        keyword(Keyword::Delete),
        keyword(Keyword::Typeof),
        keyword(Keyword::Void),
        p.get(Punctuator::Exclamation),
        p.get(Punctuator::Minus),
        p.get(Punctuator::Plus),
        p.get(Punctuator::Tilde),
    ]))
}

/// `keyof readonly typeof unique`
pub fn unary_type_operator() -> Runner<String> {
    operator(alt(vec![
        keyword(Keyword::Keyof),
        keyword(Keyword::Readonly),
        keyword(Keyword::Typeof),
        keyword(Keyword::Unique),
    ]))
}

/// `--` or `++`, with the span of both tokens
pub fn update_operator(p: &Punctuators) -> Runner<UpdateOperator> {
    let minus = p.get(Punctuator::Minus);
    let plus = p.get(Punctuator::Plus);
    let anchor = alt(vec![minus.clone(), plus.clone()]);

    let pair = combine(anchor, move |anchor: Token, _| {
        let second = condition(anchor.text() == "-", minus.clone(), plus.clone());
        seq2(succ(anchor), nw(second))
    });

    apply(pair, |(first, second)| {
        let (start, end) = (first.start, second.end);
        UpdateOperator {
            operator: apply_operator(&Matched::from((first, second))),
            start,
            end,
        }
    })
}

/// Any binary operator, tagged with the expression kind it builds
///
/// Categories are tried as logical, bitwise, equality, relational, shift,
/// then arithmetic, so a lone `>` is relational.
pub fn binary_operator(p: &Punctuators) -> Runner<(String, ExpressionKind)> {
    let tagged = |parser: Runner<String>, kind: ExpressionKind| {
        parser.map(move |operator| (operator, kind))
    };

    alt(vec![
        tagged(logical_operator(p), ExpressionKind::Logical),
        tagged(bitwise_binary_operator(p), ExpressionKind::Bitwise),
        tagged(equality_operator(p), ExpressionKind::Equality),
        tagged(relational_operator(p), ExpressionKind::Relational),
        tagged(bitwise_shift_operator(p), ExpressionKind::Bitwise),
        tagged(arithmetic_operator(p), ExpressionKind::Arithmetic),
    ])
}
