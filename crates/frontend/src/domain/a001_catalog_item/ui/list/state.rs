use contracts::domain::a001_catalog_item::{Item, ItemCollection};
use leptos::prelude::*;

use crate::shared::api::ApiError;

/// Items per page when the collection is large enough
pub const TARGET_PAGE_SIZE: usize = 6;

pub const FETCH_FAILED_FALLBACK: &str = "An error occurred while fetching items";

/// Page size for a collection of `total` items: 6, or `total` when smaller
pub fn page_size(total: usize) -> usize {
    total.min(TARGET_PAGE_SIZE)
}

/// Number of pages; 0 for an empty collection
pub fn page_count(total: usize) -> usize {
    match page_size(total) {
        0 => 0,
        size => total.div_ceil(size),
    }
}

/// Items of 1-based `page`, in server order
pub fn page_window(items: &[Item], page: usize) -> &[Item] {
    let size = page_size(items.len());
    if page == 0 || size == 0 {
        return &[];
    }
    let start = ((page - 1) * size).min(items.len());
    let end = (start + size).min(items.len());
    &items[start..end]
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogPhase {
    /// Not fetched yet
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Mutually exclusive render states of the catalog screen
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogView {
    Loading,
    Error(String),
    /// Fetched and empty: offer auto-populate instead of a grid
    Empty,
    Grid,
}

#[derive(Clone, Debug)]
pub struct CatalogState {
    pub phase: CatalogPhase,
    pub items: ItemCollection,
    /// 1-based
    pub page: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            phase: CatalogPhase::Idle,
            items: Vec::new(),
            page: 1,
        }
    }
}

impl CatalogState {
    pub fn begin_fetch(&mut self) {
        self.phase = CatalogPhase::Loading;
    }

    /// Replace the collection, or move to the error state
    ///
    /// The current page survives a re-fetch but is clamped to the new page
    /// count.
    pub fn finish_fetch(&mut self, result: Result<ItemCollection, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.page = self.page.clamp(1, self.page_count().max(1));
                self.phase = CatalogPhase::Ready;
            }
            Err(e) => {
                let message = e.to_string();
                self.phase = CatalogPhase::Error(if message.is_empty() {
                    FETCH_FAILED_FALLBACK.to_string()
                } else {
                    message
                });
            }
        }
    }

    pub fn view(&self) -> CatalogView {
        match &self.phase {
            CatalogPhase::Idle | CatalogPhase::Loading => CatalogView::Loading,
            CatalogPhase::Error(message) => CatalogView::Error(message.clone()),
            CatalogPhase::Ready if self.items.is_empty() => CatalogView::Empty,
            CatalogPhase::Ready => CatalogView::Grid,
        }
    }

    pub fn page_count(&self) -> usize {
        page_count(self.items.len())
    }

    pub fn current_items(&self) -> &[Item] {
        page_window(&self.items, self.page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Pagination controls are only worth showing with more than one page
    pub fn shows_pagination(&self) -> bool {
        self.page_count() > 1
    }

    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }
}

pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::sample_items;

    fn ready(n: usize) -> CatalogState {
        let mut state = CatalogState::default();
        state.begin_fetch();
        state.finish_fetch(Ok(sample_items(n)));
        state
    }

    #[test]
    fn test_page_size_and_count() {
        assert_eq!((page_size(0), page_count(0)), (0, 0));
        assert_eq!((page_size(1), page_count(1)), (1, 1));
        assert_eq!((page_size(5), page_count(5)), (5, 1));
        assert_eq!((page_size(6), page_count(6)), (6, 1));
        assert_eq!((page_size(7), page_count(7)), (6, 2));
        assert_eq!((page_size(12), page_count(12)), (6, 2));
        assert_eq!((page_size(13), page_count(13)), (6, 3));
    }

    #[test]
    fn test_windows_reconstruct_collection() {
        for n in 0..=40 {
            let items = sample_items(n);
            let size = page_size(n);
            let mut joined: Vec<Item> = Vec::new();
            for page in 1..=page_count(n) {
                let window = page_window(&items, page);
                assert!(window.len() <= size);
                assert!(!window.is_empty());
                joined.extend_from_slice(window);
            }
            assert_eq!(joined, items, "collection of {} items", n);
        }
    }

    #[test]
    fn test_window_out_of_range_is_empty() {
        let items = sample_items(8);
        assert!(page_window(&items, 0).is_empty());
        assert!(page_window(&items, 3).is_empty());
        assert_eq!(page_window(&items, 2).len(), 2);
    }

    #[test]
    fn test_previous_next_bounds() {
        let mut state = ready(14);
        assert_eq!(state.page_count(), 3);
        assert!(!state.has_previous());
        assert!(state.has_next());

        state.previous_page();
        assert_eq!(state.page, 1);

        state.next_page();
        state.next_page();
        assert_eq!(state.page, 3);
        assert!(state.has_previous());
        assert!(!state.has_next());

        state.next_page();
        assert_eq!(state.page, 3);
        assert_eq!(state.current_items().len(), 2);
        assert_eq!(state.current_items()[0].id, "12");
    }

    #[test]
    fn test_single_page_hides_pagination() {
        let state = ready(4);
        assert_eq!(state.current_items().len(), 4);
        assert!(!state.shows_pagination());
        assert!(!state.has_previous());
        assert!(!state.has_next());
        assert_eq!(state.view(), CatalogView::Grid);
    }

    #[test]
    fn test_render_states() {
        let mut state = CatalogState::default();
        assert_eq!(state.view(), CatalogView::Loading);
        state.begin_fetch();
        assert_eq!(state.view(), CatalogView::Loading);
        state.finish_fetch(Ok(Vec::new()));
        assert_eq!(state.view(), CatalogView::Empty);
        state.finish_fetch(Err(ApiError::Network("connection refused".into())));
        assert_eq!(
            state.view(),
            CatalogView::Error("network error: connection refused".into())
        );
    }

    #[test]
    fn test_refetch_clamps_page() {
        let mut state = ready(20);
        state.next_page();
        state.next_page();
        state.next_page();
        assert_eq!(state.page, 4);

        state.finish_fetch(Ok(sample_items(8)));
        assert_eq!(state.page, 2);

        state.finish_fetch(Ok(Vec::new()));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_order_and_rate_preserved() {
        let mut items = sample_items(3);
        items.reverse();
        items[0].rate = 19.999;
        let mut state = CatalogState::default();
        state.finish_fetch(Ok(items.clone()));
        assert_eq!(state.current_items(), items.as_slice());
        assert_eq!(state.current_items()[0].rate, 19.999);
    }
}
