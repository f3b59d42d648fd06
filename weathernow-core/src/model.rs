use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LookupError, TransportError};

/// Payload status code meaning "usable weather data".
pub const SUCCESS_COD: f64 = 200.0;

/// Flattened projection of a successful current-weather payload.
///
/// Values are stored exactly as received; rounding happens at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city_name: String,
    pub condition_main: String,
    pub condition_description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
    pub pressure_hpa: f64,
}

/// True when the embedded status code is the number 200.
///
/// OpenWeather sends `200` as a number on success and e.g. `"404"` as a
/// string on failure; anything else (`"200"`, `404.0`, `false`) is a failure.
pub fn is_success_cod(cod: &Value) -> bool {
    cod.as_f64() == Some(SUCCESS_COD)
}

/// Raw `/data/2.5/weather` response. Every field is optional here;
/// [`CurrentPayload::interpret`] decides which absences are fatal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentPayload {
    /// Kept untyped so an unexpected type is an upstream failure, not a decode error.
    pub cod: Option<Value>,
    pub message: Option<Value>,
    pub name: Option<String>,
    /// `null` and absent both mean "no conditions".
    pub weather: Option<Vec<PayloadCondition>>,
    pub main: Option<PayloadMain>,
    pub wind: Option<PayloadWind>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadCondition {
    pub main: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadMain {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadWind {
    pub speed: Option<f64>,
}

/// Result of reading a decoded payload.
#[derive(Debug)]
pub enum Interpretation {
    Weather(WeatherResult),
    Upstream(LookupError),
}

impl CurrentPayload {
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Map the payload onto a stored result or an upstream failure.
    ///
    /// A success code with a required field missing is a malformed payload,
    /// which the controller treats like any other transport failure.
    pub fn interpret(self) -> Result<Interpretation, TransportError> {
        let success = self.cod.as_ref().is_some_and(is_success_cod);
        if !success {
            let message = self.message.as_ref().and_then(Value::as_str);
            return Ok(Interpretation::Upstream(LookupError::upstream(message)));
        }

        let city_name = self.name.ok_or(TransportError::MalformedPayload("name"))?;
        let main = self.main.ok_or(TransportError::MalformedPayload("main"))?;
        let wind = self.wind.ok_or(TransportError::MalformedPayload("wind"))?;

        // `weather` may legitimately be empty; the icon then falls back.
        let condition = self
            .weather
            .and_then(|list| list.into_iter().next())
            .unwrap_or_default();

        Ok(Interpretation::Weather(WeatherResult {
            city_name,
            condition_main: condition.main.unwrap_or_default(),
            condition_description: condition.description.unwrap_or_default(),
            temperature_c: main.temp.ok_or(TransportError::MalformedPayload("main.temp"))?,
            feels_like_c: main
                .feels_like
                .ok_or(TransportError::MalformedPayload("main.feels_like"))?,
            humidity_pct: main
                .humidity
                .ok_or(TransportError::MalformedPayload("main.humidity"))?,
            wind_speed_ms: wind.speed.ok_or(TransportError::MalformedPayload("wind.speed"))?,
            pressure_hpa: main
                .pressure
                .ok_or(TransportError::MalformedPayload("main.pressure"))?,
        }))
    }
}
