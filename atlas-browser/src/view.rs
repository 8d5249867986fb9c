//! Root-level view composition.
//!
//! The view is a pure function of [`State`]: a controls row, the table of
//! the current page's records, and the page selector. All interaction is
//! expressed as [`Message`] values; nothing here mutates state.

use atlas_model::prelude::{CountryFilter, page_index_from_selector};
use iced::widget::{button, column, horizontal_rule, row, scrollable, text};
use iced::{Element, Length, Theme};

use crate::message::Message;
use crate::state::State;

type ButtonStyleFn = fn(&Theme, button::Status) -> button::Style;

pub fn view(state: &State) -> Element<'_, Message> {
    column![
        text("Countries of the world").size(24),
        view_controls(state),
        view_table(state),
        view_pagination(state),
        view_status(state),
    ]
    .spacing(12)
    .padding(16)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_controls(state: &State) -> Element<'_, Message> {
    let sort_button = button(text(format!(
        "Sort by name ({})",
        state.sort_order.label()
    )))
    .on_press(Message::SortRequested)
    .style(button::primary);

    let mut controls = row![sort_button].spacing(8);
    for filter in CountryFilter::all() {
        let style: ButtonStyleFn = if state.filters.is_active(*filter) {
            button::primary
        } else {
            button::secondary
        };
        controls = controls.push(
            button(text(filter.label()))
                .on_press(Message::FilterToggled(*filter))
                .style(style),
        );
    }

    controls.into()
}

fn view_table(state: &State) -> Element<'_, Message> {
    let header = row![
        text("Name").width(Length::FillPortion(2)),
        text("Region").width(Length::FillPortion(1)),
        text("Area").width(Length::FillPortion(1)),
    ]
    .spacing(12);

    let mut rows = column![header, horizontal_rule(1)].spacing(6);
    for country in state.visible_countries() {
        rows = rows.push(
            row![
                text(country.name.as_str()).width(Length::FillPortion(2)),
                text(country.region.as_str()).width(Length::FillPortion(1)),
                text(format_area(country.area)).width(Length::FillPortion(1)),
            ]
            .spacing(12),
        );
    }

    scrollable(rows).height(Length::Fill).into()
}

fn view_pagination(state: &State) -> Element<'_, Message> {
    let mut pages = row![].spacing(6);
    for page in 1..=state.page_count() {
        let style: ButtonStyleFn =
            if page_index_from_selector(page) == state.current_page {
                button::primary
            } else {
                button::text
            };
        pages = pages.push(
            button(text(page.to_string()))
                .on_press(Message::PageSelected(page))
                .style(style),
        );
    }

    pages.into()
}

fn view_status(state: &State) -> Element<'_, Message> {
    let status = if state.loading {
        "Loading countries...".to_string()
    } else {
        format!(
            "{} of {} countries match",
            state.filtered.len(),
            state.countries.len()
        )
    };

    text(status).size(14).into()
}

/// Whole-number areas dominate the dataset; keep those free of a trailing
/// `.0` while preserving fractional values.
fn format_area(area: f64) -> String {
    if area.fract() == 0.0 {
        format!("{}", area as u64)
    } else {
        format!("{area}")
    }
}
