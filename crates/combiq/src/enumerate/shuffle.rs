use crate::{
    codec::decode_in_bounds,
    enumerate::rng::uniform_below,
    query::{Combination, Query},
};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};
use std::collections::HashMap;

///
/// ShuffledEnumerator
///
/// Uniformly random permutation of the query's combinations, drawn
/// without replacement: each combination is emitted exactly once across
/// `cardinality` pulls.
///
/// This is a virtual Fisher–Yates over the index space `[0, total)`. Each
/// pull draws a uniform slot `j` below the shrinking `remaining` count,
/// emits the index currently living in that slot, then swaps the index at
/// slot `remaining - 1` into `j`. Only displaced slots are stored, so
/// memory grows with the number of pulls, never with the product size —
/// the index space itself is addressed through the codec and never
/// materialized.
///

pub struct ShuffledEnumerator<'a, T> {
    query: &'a Query<T>,
    rng: ChaCha20Rng,
    remaining: BigUint,
    displaced: HashMap<BigUint, BigUint>,
}

impl<'a, T> ShuffledEnumerator<'a, T> {
    /// Start a shuffled pass over `query`.
    ///
    /// The permutation is a pure function of the seed, so rebuilding with
    /// the same seed replays the same order.
    #[must_use]
    pub fn new(query: &'a Query<T>, seed: [u8; 32]) -> Self {
        Self {
            query,
            rng: ChaCha20Rng::from_seed(seed),
            remaining: query.cardinality(),
            displaced: HashMap::new(),
        }
    }

    /// Combinations not yet emitted in this pass.
    #[must_use]
    pub const fn remaining(&self) -> &BigUint {
        &self.remaining
    }
}

impl<T: Clone> Iterator for ShuffledEnumerator<'_, T> {
    type Item = Combination<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_zero() {
            return None;
        }

        let slot = uniform_below(&mut self.rng, &self.remaining);
        let chosen = self
            .displaced
            .remove(&slot)
            .unwrap_or_else(|| slot.clone());

        // Swap the tail slot's index into the hole so the live slots stay
        // the contiguous range [0, remaining - 1).
        let tail = &self.remaining - BigUint::one();
        if slot != tail {
            let tail_index = self.displaced.remove(&tail).unwrap_or_else(|| tail.clone());
            self.displaced.insert(slot, tail_index);
        }
        self.remaining = tail;

        Some(decode_in_bounds(self.query, &chosen))
    }
}

///
/// TESTS
///
