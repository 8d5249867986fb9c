//! One handler per message family, dispatched from [`crate::update`].

pub mod countries_fetched;
pub mod select_page;
pub mod sort_countries;
pub mod toggle_filter;
