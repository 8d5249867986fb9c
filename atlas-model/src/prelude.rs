//! Browser-facing snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in atlas-browser or other presentation layers.

pub use super::country::Country;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::filter::{CountryFilter, FilterOptions, apply_filters};
pub use super::page::{
    COUNTRIES_PER_PAGE, page_count, page_index_from_selector, visible_slice,
};
pub use super::sort::{SortOrder, sort_by_name};
