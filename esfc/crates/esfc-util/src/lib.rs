//! esfc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by every phase of the esfc front end:
//!
//! - [`span`]: [`Point`] and [`Position`], the unist-style source locations
//!   every token and diagnostic carries.
//! - [`diagnostic`]: [`Message`], [`RaiseOptions`] and the [`Handler`] that
//!   collects recoverable lexing problems in discovery order.
//! - [`index_vec`]: [`IndexVec`], the typed arena behind the token list.
//! - [`error`]: `thiserror` error types for invalid input to these utilities.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. POSITIONS ARE CHARACTER BASED
//!    `offset` counts Unicode scalar values from the start of the document,
//!    `line` and `column` are 1-based.
//!
//! 2. DIAGNOSTICS NEVER ABORT
//!    A [`Handler`] only records. Deciding whether a message is fatal is left
//!    to whoever reads it.
//!
//! 3. TYPED INDICES
//!    Arena links are newtype indices, never references, so a linked list of
//!    tokens needs no `Rc`, no `RefCell` and no lifetimes.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;

pub use diagnostic::{Handler, Level, Message, RaiseOptions};
pub use error::{SpanError, SpanResult};
pub use index_vec::{Idx, IndexVec};
pub use span::{Place, Point, Position};
