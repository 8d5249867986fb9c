use std::time::Duration;

use anyhow::Result;
use atlas_model::prelude::Country;
use reqwest::{Client, StatusCode};

/// Path of the dataset request, asking only for the fields the model keeps.
const COUNTRIES_PATH: &str = "/v2/all?fields=name,region,area";

/// Thin client for the country-data endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        log::info!("[ApiClient] Creating new API client with base URL: {base_url}");

        Self { client, base_url }
    }

    /// Full URL of the dataset request.
    pub fn countries_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), COUNTRIES_PATH)
    }

    /// Fetch the full country list in one call.
    ///
    /// A single best-effort attempt: no retry, no backoff. The source side
    /// has no pagination; the whole dataset arrives at once.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>> {
        let url = self.countries_url();
        log::debug!("[ApiClient] GET request to: {url}");

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow::anyhow!(
                    "Request failed with status {status}: {error_text}"
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiClient;

    #[test]
    fn countries_url_requests_only_the_model_fields() {
        let client = ApiClient::new("https://restcountries.com/");
        assert_eq!(
            client.countries_url(),
            "https://restcountries.com/v2/all?fields=name,region,area"
        );
    }
}
