use atlas_model::prelude::{
    COUNTRIES_PER_PAGE, Country, FilterOptions, SortOrder, apply_filters,
    page_count, visible_slice,
};

/// The whole application state.
///
/// `filtered` is derived data: it is rebuilt from `countries` plus the
/// current filter configuration on every relevant transition, never narrowed
/// incrementally, so the displayed list cannot drift from the flags.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Full fetched record list, in source order. Empty until the fetch
    /// completes (and indefinitely on fetch failure).
    pub countries: Vec<Country>,
    /// The filtered (and possibly sorted) list the table shows,
    /// pre-pagination.
    pub filtered: Vec<Country>,
    pub filters: FilterOptions,
    /// Direction the next sort action will use.
    pub sort_order: SortOrder,
    /// Zero-based page index. Deliberately not reset when filters change;
    /// an out-of-range index shows an empty page.
    pub current_page: usize,
    pub loading: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the derived list from the full fetched list and the current
    /// filter configuration. Single source of truth for what is displayed.
    pub fn recompute_filtered(&mut self) {
        self.filtered = apply_filters(&self.countries, &self.filters);
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len(), COUNTRIES_PER_PAGE)
    }

    /// The slice of the filtered list shown on the current page.
    pub fn visible_countries(&self) -> &[Country] {
        visible_slice(&self.filtered, self.current_page, COUNTRIES_PER_PAGE)
    }
}
