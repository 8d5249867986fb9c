use atlas_model::prelude::{Country, CountryFilter};

/// Every discrete event the update loop reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    /// Outcome of the single startup fetch. Errors arrive stringified at the
    /// task boundary so the message stays `Clone`.
    CountriesFetched(Result<Vec<Country>, String>),
    /// One filter predicate was toggled.
    FilterToggled(CountryFilter),
    /// Sort the displayed list by name in the current direction.
    SortRequested,
    /// 1-based page number emitted by the page selector.
    PageSelected(usize),
}
