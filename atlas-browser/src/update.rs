//! Root update dispatch.
//!
//! Every state transition runs to completion here; the only asynchronous
//! operation in the application is the startup fetch issued at boot.

use iced::Task;

use crate::message::Message;
use crate::state::State;
use crate::updates;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::CountriesFetched(result) => {
            updates::countries_fetched::handle_countries_fetched(state, result)
        }
        Message::FilterToggled(filter) => {
            updates::toggle_filter::handle_filter_toggled(state, filter)
        }
        Message::SortRequested => {
            updates::sort_countries::handle_sort_requested(state)
        }
        Message::PageSelected(page) => {
            updates::select_page::handle_page_selected(state, page)
        }
    }
}
