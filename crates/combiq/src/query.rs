use derive_more::Deref;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

///
/// CandidateSet
///
/// Ordered candidates available at one tuple position. Immutable once the
/// query is built; entry payloads are opaque to the engine. Serializes
/// identically to `Vec<T>`.
///
/// Mutation is deliberately absent: a changed candidate list means a new
/// query, not an edited one.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet<T>(Vec<T>);

impl<T> CandidateSet<T> {
    /// Build a candidate set from an existing vector.
    #[must_use]
    pub const fn from_vec(entries: Vec<T>) -> Self {
        Self(entries)
    }

    /// Return the number of candidates at this position.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this position has no candidates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the candidate at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Return an iterator over the candidates.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> From<Vec<T>> for CandidateSet<T> {
    fn from(entries: Vec<T>) -> Self {
        Self(entries)
    }
}

impl<'a, T> IntoIterator for &'a CandidateSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

///
/// Combination
///
/// One fully realized tuple, one entry per query position. Produced on
/// demand; the consumer clones whatever it needs to keep before pulling
/// the next one.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Combination<T>(Vec<T>);

impl<T> Combination<T> {
    /// Build a combination from the entries picked at each position.
    #[must_use]
    pub const fn from_vec(entries: Vec<T>) -> Self {
        Self(entries)
    }

    /// Return the number of positions in the tuple.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the tuple has no positions.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over the entries, in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> From<Vec<T>> for Combination<T> {
    fn from(entries: Vec<T>) -> Self {
        Self(entries)
    }
}

impl<T> From<Combination<T>> for Vec<T> {
    fn from(combination: Combination<T>) -> Self {
        combination.0
    }
}

impl<T> IntoIterator for Combination<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Combination<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

///
/// Query
///
/// Ordered candidate sets, one per output tuple position. Built once per
/// search and discarded when the search or the candidate data changes.
///
/// Every enumerable combination corresponds to exactly one index in
/// `[0, cardinality)`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Query<T> {
    sets: Vec<CandidateSet<T>>,
}

impl<T> Query<T> {
    /// Build a query from one candidate set per position.
    #[must_use]
    pub const fn new(sets: Vec<CandidateSet<T>>) -> Self {
        Self { sets }
    }

    /// Return the number of tuple positions.
    #[must_use]
    pub const fn positions(&self) -> usize {
        self.sets.len()
    }

    /// Return the candidate sets in position order.
    #[must_use]
    pub fn sets(&self) -> &[CandidateSet<T>] {
        &self.sets
    }

    /// Returns `true` if any position has zero candidates, which makes the
    /// whole product empty.
    #[must_use]
    pub fn has_empty_position(&self) -> bool {
        self.sets.iter().any(CandidateSet::is_empty)
    }

    /// Total number of distinct combinations: the product of the candidate
    /// counts at every position.
    ///
    /// Candidate counts in the tens of thousands over several positions
    /// overflow any fixed-width integer, so the count is arbitrary
    /// precision throughout. A query with zero positions has cardinality
    /// one: the empty tuple.
    #[must_use]
    pub fn cardinality(&self) -> BigUint {
        let mut total = BigUint::one();
        for set in &self.sets {
            if set.is_empty() {
                return BigUint::zero();
            }
            total *= BigUint::from(set.len());
        }

        total
    }
}

impl<T> From<Vec<Vec<T>>> for Query<T> {
    fn from(sets: Vec<Vec<T>>) -> Self {
        Self::new(sets.into_iter().map(CandidateSet::from_vec).collect())
    }
}

///
/// TESTS
///
