// src/pagination.rs

//! Standalone pagination helper.
//!
//! Pure arithmetic over page bounds, with no network awareness. Used where a
//! backend does not already return pagination metadata in its envelope.

/// Page-bounds state machine.
///
/// `set_page` clamps to `[1, total_pages]`; navigation delegates to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: u32,
    page_size: u32,
    total_pages: u32,
    initial_page: u32,
}

impl Pager {
    /// Default page size for catalog listings.
    pub const DEFAULT_PAGE_SIZE: u32 = 8;

    /// Create a pager over `total_pages` pages starting at page 1.
    pub fn new(total_pages: u32) -> Self {
        Self::with_options(total_pages, 1, Self::DEFAULT_PAGE_SIZE)
    }

    /// Create a pager with an explicit initial page and page size.
    ///
    /// The initial page itself is clamped to the valid range.
    pub fn with_options(total_pages: u32, initial_page: u32, page_size: u32) -> Self {
        let total_pages = total_pages.max(1);
        let initial_page = initial_page.clamp(1, total_pages);
        Self {
            current_page: initial_page,
            page_size,
            total_pages,
            initial_page,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Jump to a page, clamped to `[1, total_pages]`.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.total_pages);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Restore the initial page.
    pub fn reset(&mut self) {
        self.current_page = self.initial_page;
    }

    /// Update the page count, keeping the current page in bounds.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_page_clamps_low_and_high() {
        let mut pager = Pager::new(5);
        pager.set_page(0);
        assert_eq!(pager.current_page(), 1);
        pager.set_page(99);
        assert_eq!(pager.current_page(), 5);
    }

    #[test]
    fn can_go_next_false_exactly_on_last_page() {
        let mut pager = Pager::new(3);
        assert!(pager.can_go_next());
        pager.set_page(2);
        assert!(pager.can_go_next());
        pager.set_page(3);
        assert!(!pager.can_go_next());
    }

    #[test]
    fn can_go_prev_false_only_on_first_page() {
        let mut pager = Pager::new(3);
        assert!(!pager.can_go_prev());
        pager.next_page();
        assert!(pager.can_go_prev());
    }

    #[test]
    fn navigation_delegates_to_clamp() {
        let mut pager = Pager::new(2);
        pager.prev_page();
        assert_eq!(pager.current_page(), 1);
        pager.next_page();
        pager.next_page();
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn reset_restores_initial_page() {
        let mut pager = Pager::with_options(10, 4, 8);
        pager.set_page(9);
        pager.reset();
        assert_eq!(pager.current_page(), 4);
    }

    #[test]
    fn page_size_defaults_and_overrides() {
        assert_eq!(Pager::new(3).page_size(), Pager::DEFAULT_PAGE_SIZE);
        assert_eq!(Pager::with_options(3, 1, 20).page_size(), 20);
    }

    #[test]
    fn shrinking_total_pages_pulls_current_back() {
        let mut pager = Pager::new(10);
        pager.set_page(8);
        pager.set_total_pages(5);
        assert_eq!(pager.current_page(), 5);
    }

    #[test]
    fn zero_total_pages_is_treated_as_one() {
        let pager = Pager::new(0);
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.can_go_next());
    }
}
