use crate::{Config, CurrentPayload, error::TransportError, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current-weather payloads for a city.
///
/// Implementations return the decoded payload whatever its embedded status;
/// interpreting `cod` is the controller's job.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, city: &str) -> Result<CurrentPayload, TransportError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.resolve_api_key()?;

    let provider = OpenWeatherProvider::builder(api_key)
        .endpoint(config.endpoint())
        .timeout(config.timeout())
        .build()?;

    Ok(provider)
}
