//! Tokenizer driver.
//!
//! [`TokenizeContext`] owns everything that changes while a file is being
//! tokenized: the cursor, the token arena, the event log and the currently
//! open token. Constructs see it twice per attempt: read-only in
//! [`Construct::test`], and mutably in every [`Tokenize::step`] where they
//! call the enter/consume/exit effects.

use crate::construct::{Construct, Event, EventKind, Punctuator, Step, Tokenize, CONSTRUCTS};
use crate::cursor::{Code, Cursor};
use crate::token::{Token, TokenFields, TokenId, TokenList, TokenType};
use crate::unicode;
use esfc_util::{Handler, IndexVec, Message, Place, Point, RaiseOptions};
use log::{debug, trace, warn};

/// Driver state exposed to constructs
pub struct TokenizeContext<'h> {
    /// Character cursor.
    cursor: Cursor,

    /// Every token produced so far, linked or not.
    arena: IndexVec<TokenId, Token>,

    /// Enter and exit events, in order.
    events: Vec<Event>,

    /// Sink for diagnostics.
    handler: &'h Handler,

    /// Last token linked into the list.
    last: TokenId,

    /// Token entered but not yet exited.
    open: Option<TokenId>,

    /// Tokens entered during the current attempt.
    entered: Vec<TokenId>,
}

impl<'h> TokenizeContext<'h> {
    /// Create a context whose list holds only the `sof` token.
    fn new(source: &str, from: Point, handler: &'h Handler) -> Self {
        let mut arena = IndexVec::with_capacity(source.len() / 2 + 2);
        let sof = arena.push(Token::new(TokenType::Sof, from, TokenFields::default()));

        Self {
            cursor: Cursor::new(source, from),
            arena,
            events: Vec::new(),
            handler,
            last: sof,
            open: None,
            entered: Vec::new(),
        }
    }

    // ==================== QUERIES ====================

    /// The current character, `None` at end of file
    #[inline]
    pub fn code(&self) -> Code {
        self.cursor.code()
    }

    /// The character after the current one
    #[inline]
    pub fn next(&self) -> Code {
        self.cursor.peek(1)
    }

    /// The character before the current one
    #[inline]
    pub fn previous(&self) -> Code {
        self.cursor.previous()
    }

    /// The character `k` places after the current one (0 = current)
    #[inline]
    pub fn peek(&self, k: usize) -> Code {
        self.cursor.peek(k)
    }

    /// Point of the current character
    #[inline]
    pub fn now(&self) -> Point {
        self.cursor.now()
    }

    /// Line ending predicate shared with [`Lexer::is_line_ending`](crate::Lexer::is_line_ending)
    #[inline]
    pub fn is_line_ending(&self, code: Code) -> bool {
        unicode::is_line_ending(code)
    }

    /// Record a diagnostic; tokenization always continues
    pub fn raise(
        &self,
        reason: impl Into<String>,
        place: impl Into<Place>,
        options: RaiseOptions,
    ) -> Message {
        let message = self.handler.raise(reason, place, options);
        debug!("raised: {}", message);
        message
    }

    // ==================== EFFECTS ====================

    /// Open a token of type `ty` at the current point and link it
    pub fn enter(&mut self, ty: TokenType, fields: TokenFields) -> TokenId {
        debug_assert!(self.open.is_none(), "enter({}) while a token is open", ty);

        let mut token = Token::new(ty, self.cursor.now(), fields);
        token.previous = Some(self.last);

        let id = self.arena.push(token);
        self.arena[self.last].next = Some(id);
        self.last = id;
        self.open = Some(id);
        self.entered.push(id);
        self.events.push(Event {
            kind: EventKind::Enter,
            token: id,
            ty,
        });

        trace!("enter {} at {}", ty, self.cursor.now());
        id
    }

    /// Add the current character to the open token
    pub fn consume(&mut self, code: Code) {
        debug_assert_eq!(code, self.cursor.code(), "consumed code is not the current code");
        debug_assert!(self.open.is_some(), "consume({:?}) outside a token", code);
        self.cursor.advance();
    }

    /// Close the open token; its value is everything consumed since `enter`
    pub fn exit(&mut self, ty: TokenType) {
        debug_assert!(self.open.is_some(), "exit({}) without an open token", ty);
        let Some(id) = self.open.take() else {
            return;
        };
        debug_assert_eq!(self.arena[id].ty, ty, "exit type differs from enter type");

        let end = self.cursor.now();
        let token = &mut self.arena[id];
        token.end = end;
        token.value = Some(self.cursor.slice(token.start, end));

        self.events.push(Event {
            kind: EventKind::Exit,
            token: id,
            ty,
        });

        trace!("exit {} at {}", ty, end);
    }

    // ==================== DRIVER ====================

    /// Run one recognition attempt at the current character.
    fn attempt(&mut self) {
        let before = self.cursor.now().offset;
        let previous = self.cursor.previous();

        let mut started = None;
        for construct in CONSTRUCTS.iter() {
            if !construct.previous(previous) {
                continue;
            }
            if let Some(machine) = construct.test(self) {
                started = Some((*construct, machine));
                break;
            }
        }

        let (construct, machine) = match started {
            Some(started) => started,
            None => {
                warn!(
                    "no construct accepts {:?} at {}, emitting a punctuator",
                    self.code(),
                    self.now()
                );
                (&Punctuator as &dyn Construct, Punctuator::machine())
            },
        };

        self.run(machine);

        if self.cursor.now().offset == before {
            warn!(
                "{} construct made no progress at {}, emitting a punctuator",
                construct.name(),
                self.now()
            );
            self.resolve_entered(construct);
            self.run(Punctuator::machine());
            self.resolve_entered(&Punctuator);
            return;
        }

        self.resolve_entered(construct);
    }

    /// Feed codes to `machine` until it resumes.
    fn run(&mut self, mut machine: Box<dyn Tokenize>) {
        loop {
            let code = self.cursor.code();
            if machine.step(self, code) == Step::Resume {
                break;
            }
        }

        debug_assert!(self.open.is_none(), "token left open after resume");
        if let Some(ty) = self.open.map(|id| self.arena[id].ty) {
            self.exit(ty);
        }
    }

    /// Let `construct` finish the tokens it entered this attempt.
    fn resolve_entered(&mut self, construct: &dyn Construct) {
        for id in self.entered.drain(..) {
            construct.resolve(&mut self.arena[id]);
        }
    }

    /// Append `eof`, run every `resolve_all` pass and hand over the list.
    fn finish(mut self) -> TokenList {
        let head = TokenId(0);
        let mut eof = Token::new(TokenType::Eof, self.cursor.now(), TokenFields::default());
        eof.previous = Some(self.last);
        let tail = self.arena.push(eof);
        self.arena[self.last].next = Some(tail);

        for construct in CONSTRUCTS.iter() {
            construct.resolve_all(&self.events, &mut self.arena);
        }

        TokenList::new(self.arena, head, tail)
    }
}

/// Tokenize `source` eagerly, recording diagnostics in `handler`.
pub(crate) fn tokenize(source: &str, from: Point, handler: &Handler) -> TokenList {
    let mut ctx = TokenizeContext::new(source, from, handler);

    while !ctx.cursor.is_at_end() {
        ctx.attempt();
    }

    let events = ctx.events.len();
    let list = ctx.finish();

    debug!(
        "tokenized {} characters: {} events, {} tokens, {} messages",
        source.chars().count(),
        events,
        list.len(),
        handler.len()
    );
    list
}
