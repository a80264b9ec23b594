use crate::{
    enumerate::{Enumerator, Order, enumerate},
    page::Page,
    query::Query,
};

///
/// SessionStats
///
/// Counter snapshot for one pagination session. Restarts count the times
/// the live enumerator had to be rebuilt to serve a page behind the
/// current position.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SessionStats {
    pub pages_served: u64,
    pub items_drained: u64,
    pub restarts: u64,
}

///
/// SessionState
///
/// Caller-owned pagination state over one query: the live enumerator, the
/// order it was started with, and how far it has been drained. The engine
/// itself stays stateless; discarding the session abandons the query with
/// no teardown.
///
/// Forward page requests drain the live enumerator. A request behind the
/// current position rebuilds the enumerator and re-drains from the start;
/// in shuffled order the stored seed replays the same permutation, so an
/// earlier page shows the same combinations it did the first time.
///

pub struct SessionState<'a, T: Clone> {
    query: &'a Query<T>,
    order: Order,
    live: Enumerator<'a, T>,
    drained: u64,
    current_page: u32,
    stats: SessionStats,
}

impl<'a, T: Clone> SessionState<'a, T> {
    #[must_use]
    pub fn new(query: &'a Query<T>, order: Order) -> Self {
        Self {
            query,
            order,
            live: enumerate(query, order),
            drained: 0,
            current_page: 0,
            stats: SessionStats::default(),
        }
    }

    /// The order this session enumerates in, including the shuffle seed.
    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    /// The page most recently served, or 0 before the first request.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Serve page `number` (1-indexed; 0 is treated as 1) of `size`
    /// combinations.
    ///
    /// The size is taken per call rather than fixed at construction: the
    /// display layer resizes its page to the viewport and re-serves the
    /// current page under the new size.
    pub fn page(&mut self, number: u32, size: usize) -> Page<T> {
        let number = number.max(1);
        let start = u64::from(number - 1).saturating_mul(u64::try_from(size).unwrap_or(u64::MAX));

        // The sequence is not seekable backward; anything at or before the
        // drained prefix needs a fresh pass.
        if start < self.drained {
            self.restart();
        }

        let mut exhausted = false;
        while self.drained < start {
            if self.pull().is_none() {
                exhausted = true;
                break;
            }
        }

        let mut items = Vec::new();
        while !exhausted && items.len() < size {
            match self.pull() {
                Some(combination) => items.push(combination),
                None => exhausted = true,
            }
        }

        self.current_page = number;
        self.stats.pages_served += 1;

        Page {
            number,
            items,
            exhausted,
        }
    }

    /// Serve the page after the current one.
    pub fn next_page(&mut self, size: usize) -> Page<T> {
        self.page(self.current_page.saturating_add(1), size)
    }

    /// Serve the page before the current one, clamped at page 1.
    pub fn prev_page(&mut self, size: usize) -> Page<T> {
        self.page(self.current_page.saturating_sub(1).max(1), size)
    }

    fn pull(&mut self) -> Option<crate::query::Combination<T>> {
        let item = self.live.next();
        if item.is_some() {
            self.drained += 1;
            self.stats.items_drained += 1;
        }

        item
    }

    fn restart(&mut self) {
        self.live = enumerate(self.query, self.order);
        self.drained = 0;
        self.stats.restarts += 1;
    }
}

///
/// TESTS
///
