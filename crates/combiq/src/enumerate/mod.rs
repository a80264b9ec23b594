//! Enumeration of a query's Cartesian product.
//!
//! Two orders over the same universe of combinations: canonical
//! lexicographic (odometer) order, and a uniformly random permutation that
//! never materializes the index space. Both are lazy, pull-based iterators;
//! restarting means constructing a fresh enumerator from the same query.

pub(crate) mod lex;
pub(crate) mod rng;
pub(crate) mod shuffle;

#[cfg(test)]
mod tests;

pub use lex::LexEnumerator;
pub use shuffle::ShuffledEnumerator;

use crate::query::{Combination, Query};

///
/// Order
///
/// Enumeration order for one query. A shuffled order carries its seed so
/// that a restarted enumerator reproduces the same permutation, which is
/// what lets a session page backward through shuffled results.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    Lexicographic,
    Shuffled { seed: [u8; 32] },
}

impl Order {
    /// Shuffled order seeded from a single word. Convenient for tests and
    /// for callers that track a session seed as one number.
    #[must_use]
    pub fn shuffled_with(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());

        Self::Shuffled { seed: bytes }
    }
}

///
/// Enumerator
///
/// A lazy sequence over every combination of one query, in the requested
/// order. Finite: yields exactly `cardinality` items and then `None`.
///

pub enum Enumerator<'a, T: Clone> {
    Lexicographic(LexEnumerator<'a, T>),
    Shuffled(ShuffledEnumerator<'a, T>),
}

impl<T: Clone> Enumerator<'_, T> {
    /// Pull at most `n` combinations, reporting whether the sequence ran
    /// dry while doing so.
    ///
    /// This is the bounded-work entry point for callers that must cap the
    /// amount of enumeration done per UI tick. A full batch reports
    /// `false` even when the next pull would exhaust the sequence.
    pub fn take_up_to(&mut self, n: usize) -> (Vec<Combination<T>>, bool) {
        let mut items = Vec::new();
        for _ in 0..n {
            match self.next() {
                Some(combination) => items.push(combination),
                None => return (items, true),
            }
        }

        (items, false)
    }
}

impl<T: Clone> Iterator for Enumerator<'_, T> {
    type Item = Combination<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Lexicographic(inner) => inner.next(),
            Self::Shuffled(inner) => inner.next(),
        }
    }
}

/// Enumerate `query`'s combinations in the given order.
pub fn enumerate<T: Clone>(query: &Query<T>, order: Order) -> Enumerator<'_, T> {
    match order {
        Order::Lexicographic => Enumerator::Lexicographic(LexEnumerator::new(query)),
        Order::Shuffled { seed } => Enumerator::Shuffled(ShuffledEnumerator::new(query, seed)),
    }
}
