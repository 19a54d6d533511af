//! Page position of the order history table.
//!
//! `total_pages` is only ever taken from a committed fetch. Zero pages
//! means "no results": the index stays at 0 and no page buttons exist.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Next,
    Prev,
    Goto(u32),
    /// A new filter invalidates the old position
    FilterChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: u32,
    total_pages: u32,
}

impl Default for Pagination {
    /// Optimistic single page until the first fetch lands
    fn default() -> Self {
        Self {
            page_index: 0,
            total_pages: 1,
        }
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    fn last_index(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }

    /// Apply a navigation event; returns whether a fetch is needed.
    pub fn apply(&mut self, event: PageEvent) -> bool {
        let before = self.page_index;
        self.page_index = match event {
            PageEvent::Next => self.page_index.saturating_add(1).min(self.last_index()),
            PageEvent::Prev => self.page_index.saturating_sub(1),
            PageEvent::Goto(n) => n.min(self.last_index()),
            PageEvent::FilterChanged => {
                self.page_index = 0;
                return true;
            }
        };
        self.page_index != before
    }

    /// Take `total_pages` from a committed fetch.
    ///
    /// Returns `true` when the current index fell off the end (the data
    /// shrank) and was clamped, meaning the clamped page must be fetched.
    pub fn settle(&mut self, total_pages: u32) -> bool {
        self.total_pages = total_pages;
        if total_pages == 0 {
            self.page_index = 0;
            return false;
        }
        if self.page_index >= total_pages {
            self.page_index = total_pages - 1;
            return true;
        }
        false
    }

    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Indices of the page buttons to render
    pub fn page_buttons(&self) -> Range<u32> {
        0..self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(page_index: u32, total_pages: u32) -> Pagination {
        Pagination {
            page_index,
            total_pages,
        }
    }

    #[test]
    fn test_initial_state() {
        let p = Pagination::new();
        assert_eq!(p.page_index(), 0);
        assert_eq!(p.total_pages(), 1);
        assert!(!p.has_prev());
        assert!(!p.has_next());
    }

    #[test]
    fn test_next_and_prev_are_clamped() {
        let mut p = at(0, 3);
        assert!(!p.apply(PageEvent::Prev));
        assert!(p.apply(PageEvent::Next));
        assert!(p.apply(PageEvent::Next));
        assert_eq!(p.page_index(), 2);
        assert!(!p.apply(PageEvent::Next));
        assert_eq!(p.page_index(), 2);
        assert!(p.apply(PageEvent::Prev));
        assert_eq!(p.page_index(), 1);
    }

    #[test]
    fn test_goto_is_clamped() {
        let mut p = at(0, 5);
        assert!(p.apply(PageEvent::Goto(99)));
        assert_eq!(p.page_index(), 4);
        assert!(!p.apply(PageEvent::Goto(4)));
        assert!(p.apply(PageEvent::Goto(0)));
    }

    #[test]
    fn test_filter_change_always_dirty() {
        let mut p = at(0, 5);
        assert!(p.apply(PageEvent::FilterChanged));
        let mut p = at(3, 5);
        assert!(p.apply(PageEvent::FilterChanged));
        assert_eq!(p.page_index(), 0);
    }

    #[test]
    fn test_zero_pages_is_empty_state() {
        let mut p = at(0, 1);
        assert!(!p.settle(0));
        assert!(p.is_empty());
        assert_eq!(p.page_index(), 0);
        assert_eq!(p.page_buttons().count(), 0);
        assert!(!p.has_next());

        // Navigation on an empty result set never leaves page 0.
        assert!(!p.apply(PageEvent::Next));
        assert!(!p.apply(PageEvent::Goto(3)));
        assert_eq!(p.page_index(), 0);
    }

    #[test]
    fn test_shrunken_data_clamps_and_refetches() {
        let mut p = at(7, 8);
        assert!(p.settle(3));
        assert_eq!(p.page_index(), 2);
        assert!(!p.settle(3));
    }

    #[test]
    fn test_any_navigation_sequence_settles_in_range() {
        let events = [
            PageEvent::Next,
            PageEvent::Prev,
            PageEvent::Goto(0),
            PageEvent::Goto(2),
            PageEvent::Goto(40),
            PageEvent::FilterChanged,
        ];
        for total in 1..=4u32 {
            for a in events {
                for b in events {
                    for c in events {
                        let mut p = at(0, total);
                        for event in [a, b, c] {
                            p.apply(event);
                            assert!(p.page_index() < p.total_pages());
                        }
                        // A later fetch may report fewer pages.
                        for fetched in 0..=total {
                            let mut q = p;
                            q.settle(fetched);
                            if fetched == 0 {
                                assert_eq!(q.page_index(), 0);
                            } else {
                                assert!(q.page_index() < q.total_pages());
                            }
                        }
                    }
                }
            }
        }
    }
}
