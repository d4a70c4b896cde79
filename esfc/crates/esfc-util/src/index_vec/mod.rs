//! IndexVec - A vector with typed indices
//!
//! ============================================================================
//! TYPED INDEX PATTERN
//! ============================================================================
//!
//! The token list is an arena: tokens live in one vector and refer to their
//! neighbours by index. Using raw `usize` for those links would let any
//! integer index any vector, so each arena gets its own newtype index and
//! [`IndexVec`] only accepts that type.
//!
//! Zero-cost: the newtype compiles to the same code as the integer.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Trait for types that can be used as indices
///
/// Implementations must ensure `from_usize(index).index() == index` for all
/// valid indices.
pub trait Idx: Copy + Eq + PartialEq {
    /// Convert from usize to index type
    ///
    /// # Panics
    ///
    /// May panic if `idx` exceeds the maximum value representable by `Self`
    fn from_usize(idx: usize) -> Self;

    /// Convert index to usize for array indexing
    fn index(self) -> usize;
}

/// Define a `u32` newtype implementing [`Idx`]
///
/// # Example
///
/// ```
/// use esfc_util::{define_idx, Idx, IndexVec};
///
/// define_idx!(NodeId);
///
/// let mut nodes: IndexVec<NodeId, &str> = IndexVec::new();
/// let id = nodes.push("root");
/// assert_eq!(id, NodeId(0));
/// assert_eq!(nodes[id], "root");
/// ```
#[macro_export]
macro_rules! define_idx {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $crate::Idx for $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize);
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

/// A vector indexed by a specific type
///
/// # Type Parameters
///
/// - `I`: The index type (must implement [`Idx`])
/// - `T`: The element type
#[derive(Clone, PartialEq, Eq)]
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    _marker: PhantomData<fn(&I)>,
}

impl<I, T> IndexVec<I, T> {
    /// Create empty IndexVec
    pub fn new() -> Self {
        Self {
            raw: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Create with capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: Vec::with_capacity(capacity),
            _marker: PhantomData,
        }
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    /// Push element and return typed index
    pub fn push(&mut self, value: T) -> I {
        let index = self.raw.len();
        self.raw.push(value);
        I::from_usize(index)
    }

    /// Get element by index
    pub fn get(&self, index: I) -> Option<&T> {
        self.raw.get(index.index())
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    fn index(&self, index: I) -> &T {
        &self.raw[index.index()]
    }
}

impl<I: Idx, T> IndexMut<I> for IndexVec<I, T> {
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.raw[index.index()]
    }
}

impl<I, T> Default for IndexVec<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T: fmt::Debug> fmt::Debug for IndexVec<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}

#[cfg(test)]
mod tests;
