use atlas_model::prelude::Country;
use iced::Task;

use crate::{message::Message, state::State};

/// Outcome of the single best-effort fetch.
///
/// Failures are logged and the list stays empty; there is no retry and no
/// user-visible error surface. An empty table is a valid state, not a fault.
pub fn handle_countries_fetched(
    state: &mut State,
    result: Result<Vec<Country>, String>,
) -> Task<Message> {
    state.loading = false;

    match result {
        Ok(countries) => {
            log::info!("Loaded {} countries", countries.len());
            state.countries = countries;
            state.recompute_filtered();
        }
        Err(error) => {
            log::error!("Error fetching countries: {error}");
        }
    }

    Task::none()
}
