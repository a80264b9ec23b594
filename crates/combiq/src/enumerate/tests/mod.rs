
use crate::{
    enumerate::{Enumerator, Order, enumerate},
    query::Query,
};

/// Query whose entries identify themselves as `(position, entry_index)`,
/// which lets tests recover the mixed-radix digits from any emitted
/// combination.
pub(crate) fn indexed_query(sizes: &[usize]) -> Query<(usize, usize)> {
    Query::from(
        sizes
            .iter()
            .enumerate()
            .map(|(position, &size)| (0..size).map(|entry| (position, entry)).collect())
            .collect::<Vec<_>>(),
    )
}

#[test]
fn take_up_to_bounds_work_per_call() {
    let q = indexed_query(&[3, 2]);
    let mut iter = enumerate(&q, Order::Lexicographic);

    let (batch, exhausted) = iter.take_up_to(4);
    assert_eq!(batch.len(), 4);
    assert!(!exhausted);

    let (batch, exhausted) = iter.take_up_to(4);
    assert_eq!(batch.len(), 2);
    assert!(exhausted);

    let (batch, exhausted) = iter.take_up_to(4);
    assert!(batch.is_empty());
    assert!(exhausted);
}

#[test]
fn full_batch_does_not_probe_ahead() {
    let q = indexed_query(&[2, 2]);
    let mut iter = enumerate(&q, Order::Lexicographic);

    let (batch, exhausted) = iter.take_up_to(4);
    assert_eq!(batch.len(), 4);
    assert!(!exhausted);
}

#[test]
fn both_orders_cover_the_same_universe() {
    let q = indexed_query(&[2, 3, 2]);

    let mut lex: Vec<_> = enumerate(&q, Order::Lexicographic).map(Vec::from).collect();
    let mut shuffled: Vec<_> = enumerate(&q, Order::shuffled_with(3))
        .map(Vec::from)
        .collect();

    lex.sort();
    shuffled.sort();
    assert_eq!(lex, shuffled);
}

#[test]
fn empty_product_is_empty_in_both_orders() {
    let q = indexed_query(&[2, 0]);

    assert!(enumerate(&q, Order::Lexicographic).next().is_none());
    assert!(enumerate(&q, Order::shuffled_with(0)).next().is_none());
}

#[test]
fn enumerator_reports_exhaustion_without_error() {
    let q = indexed_query(&[1]);
    let mut iter: Enumerator<'_, (usize, usize)> = enumerate(&q, Order::Lexicographic);

    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    // Pulling past the end stays quiet.
    assert!(iter.next().is_none());
}
