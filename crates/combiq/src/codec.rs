//! Index ↔ combination codec.
//!
//! A combination index is a number in a mixed-radix system whose digit
//! weights are the candidate-set sizes, least-significant digit at the last
//! position. Decoding divmods from the last position backward; encoding is
//! the matching Horner walk from the first. This is what makes the
//! enumeration order invertible: `decode(i)` is exactly the `i`-th
//! combination of the lexicographic order.

use crate::{
    error::EngineError,
    query::{Combination, Query},
};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Decode `index` into the combination at that lexicographic position.
///
/// Fails with [`EngineError::IndexOutOfRange`] when `index` is not below
/// the query's cardinality.
pub fn decode<T: Clone>(query: &Query<T>, index: &BigUint) -> Result<Combination<T>, EngineError> {
    let total = query.cardinality();
    if index >= &total {
        return Err(EngineError::IndexOutOfRange {
            index: index.clone(),
            total,
        });
    }

    Ok(decode_in_bounds(query, index))
}

/// Decode without the range check.
///
/// Callers guarantee `index < cardinality`, which also implies no position
/// is empty. Each remainder is below its set size, so the per-position
/// lookups are total.
pub(crate) fn decode_in_bounds<T: Clone>(query: &Query<T>, index: &BigUint) -> Combination<T> {
    let mut idx = index.clone();
    let mut picked = Vec::with_capacity(query.positions());

    for set in query.sets().iter().rev() {
        let size = BigUint::from(set.len());
        // The remainder is < set.len(), so it always fits usize.
        let digit = (&idx % &size).to_usize().unwrap_or(usize::MAX);
        idx /= &size;
        picked.push(set[digit].clone());
    }
    picked.reverse();

    Combination::from_vec(picked)
}

/// Encode per-position entry indices back into a combination index.
///
/// `digits[p]` selects the entry at position `p`; the result is the unique
/// index for which [`decode`] picks those same entries.
pub fn encode<T>(query: &Query<T>, digits: &[usize]) -> Result<BigUint, EngineError> {
    if digits.len() != query.positions() {
        return Err(EngineError::ArityMismatch {
            expected: query.positions(),
            found: digits.len(),
        });
    }

    let mut index = BigUint::zero();
    for (position, (set, &digit)) in query.sets().iter().zip(digits).enumerate() {
        if digit >= set.len() {
            return Err(EngineError::EntryOutOfRange {
                position,
                index: digit,
                len: set.len(),
            });
        }
        index = index * BigUint::from(set.len()) + BigUint::from(digit);
    }

    Ok(index)
}

///
/// TESTS
///
