//! Parser combinators over a token list.
//!
//! A [`Runner`] is a parser that starts at a token id and either returns a
//! [`Candidate`] (the result plus where to continue) or a [`ParseError`].
//! Parsers never mutate the list, so any runner can be retried from any
//! position; that is all backtracking needs.
//!
//! A position of `None` is the end of the list, past `eof`.

use crate::error::{ParseError, ParseResult};
use esfc_lex::{Keyword, Token, TokenId, TokenList, TokenType};
use log::trace;
use std::fmt;
use std::rc::Rc;

/// A successful parse
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate<T> {
    /// Parsed value
    pub result: T,
    /// First token consumed, `None` if nothing was consumed
    pub head: Option<TokenId>,
    /// Token to continue from
    pub next: Option<TokenId>,
}

impl<T> Candidate<T> {
    /// Replace the result, keeping the range
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Candidate<U> {
        Candidate {
            result: f(self.result),
            head: self.head,
            next: self.next,
        }
    }
}

/// What every parser returns
pub type Output<T> = ParseResult<Candidate<T>>;

type ParseFn<T> = dyn Fn(&TokenList, Option<TokenId>) -> Output<T>;

/// A shareable parser producing `T`
pub struct Runner<T> {
    run: Rc<ParseFn<T>>,
}

impl<T> Clone for Runner<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Runner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Runner")
    }
}

impl<T: 'static> Runner<T> {
    /// Wrap a parse function
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&TokenList, Option<TokenId>) -> Output<T> + 'static,
    {
        Self { run: Rc::new(run) }
    }

    /// Run the parser at `at`
    pub fn parse(&self, tokens: &TokenList, at: Option<TokenId>) -> Output<T> {
        (self.run)(tokens, at)
    }

    /// Transform the result of a successful parse
    pub fn map<U, F>(self, f: F) -> Runner<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        Runner::new(move |tokens, at| self.parse(tokens, at).map(|c| c.map(&f)))
    }
}

// ==================== TOKEN MATCHERS ====================

/// Match one token accepted by `predicate`
///
/// `expected` describes the token for error messages.
pub fn satisfy<P>(expected: impl Into<String>, predicate: P) -> Runner<Token>
where
    P: Fn(&Token) -> bool + 'static,
{
    let expected = expected.into();
    Runner::new(move |tokens, at| {
        let Some((id, token)) = at.and_then(|id| tokens.get(id).map(|token| (id, token))) else {
            return Err(ParseError::UnexpectedEnd {
                expected: expected.clone(),
            });
        };

        if predicate(token) {
            return Ok(Candidate {
                result: token.clone(),
                head: Some(id),
                next: token.next,
            });
        }

        trace!("expected {}, found {} at {}", expected, token, token.start);
        Err(ParseError::Unexpected {
            expected: expected.clone(),
            found: token.to_string(),
            place: token.start,
            token: id,
        })
    })
}

/// Match one token of type `ty`
pub fn tok(ty: TokenType) -> Runner<Token> {
    satisfy(ty.as_str(), move |token| token.ty == ty)
}

/// Match one token whose raw value is `value`, whatever its type
pub fn val(value: impl Into<String>) -> Runner<Token> {
    let value = value.into();
    satisfy(format!("{:?}", value), move |token| {
        token.value.as_deref() == Some(value.as_str())
    })
}

/// Match one `keyid` token spelling `keyword`
pub fn keyword(keyword: Keyword) -> Runner<Token> {
    satisfy(format!("{:?}", keyword.as_str()), move |token| {
        token.ty == TokenType::Keyid && token.text() == keyword.as_str()
    })
}

// ==================== PRIMITIVES ====================

/// Succeed with `value` without consuming anything
pub fn succ<T: Clone + 'static>(value: T) -> Runner<T> {
    Runner::new(move |_, at| {
        Ok(Candidate {
            result: value.clone(),
            head: None,
            next: at,
        })
    })
}

/// Fail without consuming anything
pub fn fail<T: 'static>(reason: impl Into<String>) -> Runner<T> {
    let reason = reason.into();
    Runner::new(move |_, at| {
        Err(ParseError::Failed {
            reason: reason.clone(),
            token: at,
        })
    })
}

/// Ordered choice: the first alternative that matches wins
///
/// Every alternative starts from the same position. If none match, the
/// failure that got furthest into the list is returned.
pub fn alt<T: 'static>(alternatives: Vec<Runner<T>>) -> Runner<T> {
    Runner::new(move |tokens, at| {
        let mut furthest: Option<ParseError> = None;

        for alternative in &alternatives {
            match alternative.parse(tokens, at) {
                Ok(candidate) => return Ok(candidate),
                Err(error) => {
                    let further = furthest
                        .as_ref()
                        .map_or(true, |best| error.reach(tokens) > best.reach(tokens));
                    if further {
                        furthest = Some(error);
                    }
                },
            }
        }

        Err(furthest.unwrap_or_else(|| ParseError::Failed {
            reason: "no alternatives".into(),
            token: at,
        }))
    })
}

/// Run every parser in order, collecting the results
pub fn seq<T: 'static>(parsers: Vec<Runner<T>>) -> Runner<Vec<T>> {
    Runner::new(move |tokens, at| {
        let mut results = Vec::with_capacity(parsers.len());
        let mut head = None;
        let mut next = at;

        for parser in &parsers {
            let candidate = parser.parse(tokens, next)?;
            head = head.or(candidate.head);
            next = candidate.next;
            results.push(candidate.result);
        }

        Ok(Candidate {
            result: results,
            head,
            next,
        })
    })
}

/// Run two parsers in order
pub fn seq2<A: 'static, B: 'static>(a: Runner<A>, b: Runner<B>) -> Runner<(A, B)> {
    Runner::new(move |tokens, at| {
        let first = a.parse(tokens, at)?;
        let second = b.parse(tokens, first.next)?;
        Ok(Candidate {
            result: (first.result, second.result),
            head: first.head.or(second.head),
            next: second.next,
        })
    })
}

/// Run three parsers in order
pub fn seq3<A: 'static, B: 'static, C: 'static>(
    a: Runner<A>,
    b: Runner<B>,
    c: Runner<C>,
) -> Runner<(A, B, C)> {
    seq2(seq2(a, b), c).map(|((a, b), c)| (a, b, c))
}

/// Run `parser`, succeeding with `None` if it fails
pub fn opt<T: 'static>(parser: Runner<T>) -> Runner<Option<T>> {
    Runner::new(move |tokens, at| match parser.parse(tokens, at) {
        Ok(candidate) => Ok(candidate.map(Some)),
        Err(_) => Ok(Candidate {
            result: None,
            head: None,
            next: at,
        }),
    })
}

/// Transform the result of `parser`
pub fn apply<T, U, F>(parser: Runner<T>, f: F) -> Runner<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    parser.map(f)
}

/// Run `parser`, then the parser `f` builds from its result
///
/// `f` also receives the first token `parser` consumed, if any.
pub fn combine<T, U, F>(parser: Runner<T>, f: F) -> Runner<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T, Option<&Token>) -> Runner<U> + 'static,
{
    Runner::new(move |tokens, at| {
        let first = parser.parse(tokens, at)?;
        let head = first.head.and_then(|id| tokens.get(id));
        let second = f(first.result, head).parse(tokens, first.next)?;
        Ok(Candidate {
            result: second.result,
            head: first.head.or(second.head),
            next: second.next,
        })
    })
}

/// Pick `then` if `cond` holds, `otherwise` if not
pub fn condition<T>(cond: bool, then: Runner<T>, otherwise: Runner<T>) -> Runner<T> {
    if cond {
        then
    } else {
        otherwise
    }
}

/// Run three parsers in order, keeping the middle result
pub fn kmid<A: 'static, B: 'static, C: 'static>(
    left: Runner<A>,
    middle: Runner<B>,
    right: Runner<C>,
) -> Runner<B> {
    seq3(left, middle, right).map(|(_, middle, _)| middle)
}
