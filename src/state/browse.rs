/// Filter and page state for the icon grid
use super::data::{IndexItem, StyleFilter};
use super::index::IndexStore;
use super::pager::{self, GAP, ITEM_WIDTH};

/// What the grid is currently showing.
///
/// Search and style changes always send the user back to page 1.
/// Width changes only alter how many icons fit on a page.
#[derive(Debug, Clone)]
pub struct Browse {
    search_term: String,
    style_filter: StyleFilter,
    current_page: usize,
    container_width: f32,
    /// Cached result of the filter for the current term and style
    filtered: Vec<IndexItem>,
}

impl Browse {
    pub fn new(index: &IndexStore, container_width: f32) -> Self {
        let mut browse = Self {
            search_term: String::new(),
            style_filter: StyleFilter::default(),
            current_page: 1,
            container_width,
            filtered: Vec::new(),
        };
        browse.refilter(index);
        browse
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn style_filter(&self) -> StyleFilter {
        self.style_filter
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filtered(&self) -> &[IndexItem] {
        &self.filtered
    }

    pub fn set_search_term(&mut self, index: &IndexStore, term: String) {
        self.search_term = term;
        self.refilter(index);
    }

    pub fn set_style_filter(&mut self, index: &IndexStore, style: StyleFilter) {
        self.style_filter = style;
        self.refilter(index);
    }

    /// Re-run the filter, e.g. after the index finished loading
    pub fn refilter(&mut self, index: &IndexStore) {
        self.filtered = index
            .filter(self.style_filter, &self.search_term)
            .into_iter()
            .cloned()
            .collect();
        self.current_page = 1;
    }

    /// Record a new container width. The current page is kept.
    pub fn resize(&mut self, container_width: f32) {
        self.container_width = container_width;
    }

    pub fn columns(&self) -> usize {
        pager::compute_columns(self.container_width, ITEM_WIDTH, GAP)
    }

    pub fn page_size(&self) -> usize {
        pager::page_size(self.columns())
    }

    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.filtered.len(), self.page_size())
    }

    pub fn current_items(&self) -> &[IndexItem] {
        pager::paginate(&self.filtered, self.current_page, self.page_size())
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Advance one page. Returns false at the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Go back one page. Returns false on page 1.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }
}
