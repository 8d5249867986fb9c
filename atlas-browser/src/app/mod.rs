use std::sync::Arc;

use iced::{Settings, Theme};

use crate::state::State;
use crate::{update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Run the Atlas application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application("Atlas", update::update, view::view)
        .settings(default_settings())
        .theme(app_theme)
        .window_size((960.0, 720.0))
        .run_with(move || bootstrap::boot(&boot_config))
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("atlas-browser".to_string());
    settings.antialiasing = true;
    settings
}

fn app_theme(_: &State) -> Theme {
    Theme::TokyoNight
}
