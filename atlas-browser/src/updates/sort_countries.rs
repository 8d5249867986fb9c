use atlas_model::prelude::sort_by_name;
use iced::Task;

use crate::{message::Message, state::State};

/// Sort the displayed list by name and flip the direction for the next
/// invocation. The sort applies to the filtered list only; re-filtering
/// rebuilds from the fetched order.
pub fn handle_sort_requested(state: &mut State) -> Task<Message> {
    log::debug!(
        "Sorting {} countries ({})",
        state.filtered.len(),
        state.sort_order
    );

    sort_by_name(&mut state.filtered, state.sort_order);
    state.sort_order = state.sort_order.flipped();

    Task::none()
}
