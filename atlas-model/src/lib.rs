//! Core data model definitions shared across Atlas crates.
//!
//! The browser keeps its state management thin; everything that can be
//! expressed as a pure function over country records lives here instead:
//! the record type itself, the filter predicates, the name sort, and the
//! pagination arithmetic.

pub mod country;
pub mod error;
pub mod filter;
pub mod page;
pub mod prelude;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use country::Country;
pub use error::{ModelError, Result as ModelResult};
pub use filter::{CountryFilter, FilterOptions, apply_filters};
pub use page::{
    COUNTRIES_PER_PAGE, page_count, page_index_from_selector, visible_slice,
};
pub use sort::{SortOrder, sort_by_name};
