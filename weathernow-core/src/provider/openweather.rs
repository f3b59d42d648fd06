use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{CurrentPayload, error::TransportError};

use super::WeatherProvider;

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Current-weather client for the OpenWeather `/weather` endpoint, metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

#[derive(Debug, Clone)]
pub struct OpenWeatherProviderBuilder {
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl OpenWeatherProviderBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<OpenWeatherProvider, TransportError> {
        let http = Client::builder().timeout(self.timeout).build()?;
        Ok(OpenWeatherProvider {
            api_key: self.api_key,
            endpoint: self.endpoint,
            http,
        })
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self, TransportError> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: String) -> OpenWeatherProviderBuilder {
        OpenWeatherProviderBuilder {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, city: &str) -> Result<CurrentPayload, TransportError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        // Failures arrive as JSON with `cod`/`message` under a 4xx status,
        // so the body is decoded regardless of the HTTP status.
        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(%status, bytes = body.len(), "OpenWeather responded");

        CurrentPayload::from_json(&body).inspect_err(|_| {
            tracing::debug!(body = %truncate_body(&body), "undecodable OpenWeather body");
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
