use std::sync::Arc;

use iced::Task;

use crate::api_client::ApiClient;
use crate::message::Message;
use crate::state::State;

/// Runtime configuration sourced from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub endpoint_url: Arc<str>,
}

impl AppConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: Arc::from(endpoint_url.into()),
        }
    }

    pub fn from_environment() -> Self {
        let endpoint_url = std::env::var("ATLAS_ENDPOINT_URL")
            .unwrap_or_else(|_| "https://restcountries.com".to_string());

        Self {
            endpoint_url: Arc::from(endpoint_url),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

/// Boot logic used by the runtime application: initial state plus the one
/// outbound fetch. The fetch cannot be cancelled; a result arriving after
/// teardown is discarded by the runtime.
pub fn boot(config: &AppConfig) -> (State, Task<Message>) {
    let client = ApiClient::new(config.endpoint_url());

    let mut state = State::new();
    state.loading = true;

    let fetch = Task::perform(
        async move {
            client
                .fetch_countries()
                .await
                .map_err(|err| err.to_string())
        },
        Message::CountriesFetched,
    );

    (state, fetch)
}
