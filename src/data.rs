//! Some helper datatypes

use crate::vec_map::NumericId;
use std::fmt::{self, Debug, Formatter};
use std::ops::Not;

/// The marker for a formula known to be contradictory
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Unsat;

/// The index of a clause in a formula or in the resolution working set
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClauseId(pub u32);

impl ClauseId {
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl NumericId for ClauseId {
    #[inline]
    fn to_index(self) -> usize {
        self.0 as usize
    }
}

/// An interned symbol name
///
/// All symbol ids are less than 2^31
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    #[inline]
    pub fn new(id: u32) -> Self {
        assert!(id < 1 << 31);
        Self(id)
    }
}

impl NumericId for SymbolId {
    #[inline]
    fn to_index(self) -> usize {
        self.0 as usize
    }
}

/// A literal is either a symbol or the negation of a symbol
///
/// They are encoded in 32 bits using a 31-bit symbol id, plus a flag for
/// whether they're negated
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Literal {
    inner: u32,
}

impl Debug for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            write!(f, "Literal(neg {:?})", self.symbol())
        } else {
            write!(f, "Literal({:?})", self.symbol())
        }
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            inner: self.inner ^ 1,
        }
    }
}

/// Only there so clauses can sit in a `TinyVec`; it's the literal `0`
impl Default for Literal {
    fn default() -> Self {
        Self { inner: 0 }
    }
}

impl Literal {
    /// The literal `id`, or `!id` when `negated`
    #[inline]
    pub fn new(id: SymbolId, negated: bool) -> Self {
        Self {
            inner: (id.0 << 1) | negated as u32,
        }
    }

    #[inline]
    pub fn symbol(self) -> SymbolId {
        SymbolId(self.inner >> 1)
    }

    #[inline]
    pub fn is_negated(self) -> bool {
        self.inner & 1 != 0
    }
}

/// The answer to "is this formula satisfiable?"
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verdict {
    Sat,
    Unsat,
}
