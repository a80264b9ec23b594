use crate::query::Combination;
use serde::{Deserialize, Serialize};

///
/// Page
///
/// One pagination window of combinations. `exhausted` is set when the
/// underlying sequence ran dry before the window filled, so a shorter
/// final page (or an empty one past the end) is an expected shape, not an
/// error.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Page<T> {
    pub number: u32,
    pub items: Vec<Combination<T>>,
    pub exhausted: bool,
}

impl<T> Page<T> {
    /// Return the number of combinations in this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the page holds no combinations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Collect page `number` (1-indexed) of `size` combinations from a live
/// sequence.
///
/// Drains and discards the `(number - 1) * size` items before the window,
/// then collects up to `size` more. Forward-only: the drained prefix is
/// gone, so re-serving an earlier page means restarting the enumerator and
/// draining again — the session layer owns that contract. Page 0 is
/// treated as page 1.
pub fn paginate<T, I>(source: &mut I, number: u32, size: usize) -> Page<T>
where
    I: Iterator<Item = Combination<T>>,
{
    let number = number.max(1);
    let skip = usize::try_from(number - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(size);

    let mut exhausted = false;
    for _ in 0..skip {
        if source.next().is_none() {
            exhausted = true;
            break;
        }
    }

    let mut items = Vec::new();
    while !exhausted && items.len() < size {
        match source.next() {
            Some(combination) => items.push(combination),
            None => exhausted = true,
        }
    }

    Page {
        number,
        items,
        exhausted,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        enumerate::{Order, enumerate},
        query::Query,
    };

    fn five_items() -> Query<usize> {
        Query::from(vec![(0..5).collect::<Vec<_>>()])
    }

    #[test]
    fn pages_of_two_over_five_items() {
        let q = five_items();
        let mut iter = enumerate(&q, Order::Lexicographic);

        let first = paginate(&mut iter, 1, 2);
        assert_eq!(first.items.len(), 2);
        assert!(!first.exhausted);

        let second = paginate(&mut iter, 1, 2);
        assert_eq!(second.items.len(), 2);
        assert!(!second.exhausted);

        let third = paginate(&mut iter, 1, 2);
        assert_eq!(third.items.len(), 1);
        assert!(third.exhausted);

        let fourth = paginate(&mut iter, 1, 2);
        assert!(fourth.is_empty());
        assert!(fourth.exhausted);
    }

    #[test]
    fn skipping_ahead_discards_the_prefix() {
        let q = five_items();
        let mut iter = enumerate(&q, Order::Lexicographic);

        let page = paginate(&mut iter, 2, 2);
        assert_eq!(page.number, 2);
        let values: Vec<usize> = page
            .items
            .iter()
            .map(|combo| *combo.iter().next().expect("one position"))
            .collect();
        assert_eq!(values, vec![2, 3]);
    }

    #[test]
    fn page_beyond_the_end_is_empty_and_exhausted() {
        let q = five_items();
        let mut iter = enumerate(&q, Order::Lexicographic);

        let page = paginate(&mut iter, 4, 2);
        assert!(page.is_empty());
        assert!(page.exhausted);
    }

    #[test]
    fn page_zero_is_served_as_page_one() {
        let q = five_items();
        let mut iter = enumerate(&q, Order::Lexicographic);

        let page = paginate(&mut iter, 0, 2);
        assert_eq!(page.number, 1);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn zero_size_pages_are_empty_but_not_exhausted() {
        let q = five_items();
        let mut iter = enumerate(&q, Order::Lexicographic);

        let page = paginate(&mut iter, 3, 0);
        assert!(page.is_empty());
        assert!(!page.exhausted);
    }
}
