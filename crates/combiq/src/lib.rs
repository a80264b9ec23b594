//! Core engine for Combiq: candidate sets, the index ↔ combination codec,
//! lexicographic and shuffled enumerators, and the pagination session that
//! display layers drive.
//!
//! The engine is pull-based and stateless apart from each enumerator's own
//! cursor. It never reads files or talks to the network; callers build the
//! candidate sets and consume the combinations.
#![warn(unreachable_pub)]

pub mod codec;
pub mod enumerate;
pub mod error;
pub mod page;
pub mod query;
pub mod session;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, iterators, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        enumerate::Order,
        page::Page,
        query::{CandidateSet, Combination, Query},
        session::SessionState,
    };
}
