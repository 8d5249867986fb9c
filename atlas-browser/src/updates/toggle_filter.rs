use atlas_model::prelude::CountryFilter;
use iced::Task;

use crate::{message::Message, state::State};

pub fn handle_filter_toggled(
    state: &mut State,
    filter: CountryFilter,
) -> Task<Message> {
    state.filters.toggle(filter);
    log::debug!(
        "Filter '{filter}' now {}",
        if state.filters.is_active(filter) {
            "active"
        } else {
            "inactive"
        }
    );

    // The page index is left alone on purpose; a page that falls out of
    // range after narrowing shows an empty slice.
    state.recompute_filtered();

    Task::none()
}
