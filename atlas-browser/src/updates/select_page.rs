use atlas_model::prelude::page_index_from_selector;
use iced::Task;

use crate::{message::Message, state::State};

/// The page selector emits 1-based page numbers; the state keeps a zero-based
/// index.
pub fn handle_page_selected(state: &mut State, page: usize) -> Task<Message> {
    state.current_page = page_index_from_selector(page);
    log::debug!("Page {page} selected (index {})", state.current_page);

    Task::none()
}
