use crate::query::{Combination, Query};

///
/// LexEnumerator
///
/// Odometer over the per-position entry indices: position 0 varies
/// slowest, the last position fastest. Yields every combination exactly
/// once in strict lexicographic order, then terminates.
///
/// A query with an empty position is exhausted immediately; a query with
/// zero positions yields the single empty tuple.
///

pub struct LexEnumerator<'a, T> {
    query: &'a Query<T>,
    digits: Vec<usize>,
    done: bool,
}

impl<'a, T> LexEnumerator<'a, T> {
    #[must_use]
    pub fn new(query: &'a Query<T>) -> Self {
        Self {
            query,
            digits: vec![0; query.positions()],
            done: query.has_empty_position(),
        }
    }
}

impl<T: Clone> Iterator for LexEnumerator<'_, T> {
    type Item = Combination<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let picked = self
            .digits
            .iter()
            .zip(self.query.sets())
            .map(|(&digit, set)| set[digit].clone())
            .collect();

        // Advance the odometer from the fastest (last) position, carrying
        // toward position 0. Carrying past position 0 exhausts the
        // sequence.
        let mut position = self.query.positions();
        loop {
            if position == 0 {
                self.done = true;
                break;
            }
            position -= 1;

            self.digits[position] += 1;
            if self.digits[position] < self.query.sets()[position].len() {
                break;
            }
            self.digits[position] = 0;
        }

        Some(Combination::from_vec(picked))
    }
}

///
/// TESTS
///
