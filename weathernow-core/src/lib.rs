//! Core library for WeatherNow, a single-city current-weather lookup.
//!
//! This crate defines:
//! - The lookup state machine ([`WeatherLookupController`])
//! - A pure projection of its state into display strings ([`view::render`])
//! - The OpenWeather client behind the [`WeatherProvider`] seam
//! - Configuration & credentials handling
//!
//! It is used by `weathernow-cli`, but holds no terminal code so other front ends can reuse it.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;
pub mod view;

pub use config::Config;
pub use controller::{Effect, Event, LookupTicket, Phase, QueryState, WeatherLookupController};
pub use error::{LookupError, TransportError};
pub use model::{CurrentPayload, WeatherResult};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use view::{View, WeatherView, render};
