//! Shared helpers for reducer-level integration tests.
//!
//! Tests drive [`atlas_browser::update::update`] directly with messages, the
//! same way the iced runtime does, without touching the network.

// Not every test binary uses every helper.
#![allow(dead_code)]

use atlas_browser::message::Message;
use atlas_browser::state::State;
use atlas_browser::update::update;
use atlas_model::prelude::Country;

/// Create a test country, panicking on invalid input.
pub fn create_test_country(name: &str, region: &str, area: f64) -> Country {
    Country::new(name, region, area).unwrap()
}

/// The three-record set used across the filter scenarios.
pub fn reference_countries() -> Vec<Country> {
    vec![
        create_test_country("Lithuania", "Europe", 65300.0),
        create_test_country("Fiji", "Oceania", 18272.0),
        create_test_country("Germany", "Europe", 357022.0),
    ]
}

/// State as it looks right after a successful fetch.
pub fn loaded_state(countries: Vec<Country>) -> State {
    let mut state = State::new();
    state.loading = true;
    let _ = update(&mut state, Message::CountriesFetched(Ok(countries)));
    state
}

/// Names of the filtered list, in display order.
pub fn filtered_names(state: &State) -> Vec<&str> {
    state
        .filtered
        .iter()
        .map(|country| country.name.as_str())
        .collect()
}
