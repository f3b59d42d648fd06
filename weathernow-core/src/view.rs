//! Pure projection of [`QueryState`] into display strings.

use serde::Serialize;

use crate::{controller::QueryState, model::WeatherResult};

pub const PLACEHOLDER_ICON: &str = "⛅";
pub const UNKNOWN_CONDITION_ICON: &str = "🌍";

/// Keyword table in match priority order; first hit wins.
const CONDITION_ICONS: &[(&[&str], &str)] = &[
    (&["cloud"], "☁️"),
    (&["rain"], "🌧️"),
    (&["thunder"], "⛈️"),
    (&["drizzle"], "🌦️"),
    (&["snow"], "❄️"),
    (&["clear"], "☀️"),
    (&["mist", "fog"], "🌫️"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub error: Option<String>,
    /// Nothing looked up yet, nothing in flight.
    pub placeholder: bool,
    pub weather: Option<WeatherView>,
    pub search: SearchButton,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchButton {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherView {
    pub icon: &'static str,
    pub city: String,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
}

pub fn render(state: &QueryState) -> View {
    View {
        error: state.error_message(),
        placeholder: state.result.is_none() && state.error.is_none() && !state.is_loading,
        weather: state.result.as_ref().map(weather_view),
        search: SearchButton {
            label: if state.is_loading { "Searching..." } else { "Search" },
            enabled: !state.is_loading,
        },
    }
}

pub fn weather_view(result: &WeatherResult) -> WeatherView {
    WeatherView {
        icon: weather_icon(Some(result)),
        city: result.city_name.clone(),
        description: title_case(&result.condition_description),
        temperature: format!("{}°C", round_half_up(result.temperature_c)),
        feels_like: format!("Feels like {}°C", round_half_up(result.feels_like_c)),
        humidity: format!("{}%", result.humidity_pct),
        wind: format!("{} m/s", result.wind_speed_ms),
        pressure: format!("{} hPa", result.pressure_hpa),
    }
}

/// Icon for the primary condition keyword, matched case-insensitively.
pub fn weather_icon(result: Option<&WeatherResult>) -> &'static str {
    let Some(result) = result else {
        return PLACEHOLDER_ICON;
    };
    let main = result.condition_main.to_lowercase();

    CONDITION_ICONS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| main.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or(UNKNOWN_CONDITION_ICON)
}

/// Uppercase the first character of every word.
///
/// Word characters are ASCII alphanumerics and `_`; anything else separates words.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }
    out
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;

    fn result(main: &str) -> WeatherResult {
        WeatherResult {
            city_name: "London".into(),
            condition_main: main.into(),
            condition_description: "light rain".into(),
            temperature_c: 15.4,
            feels_like_c: 14.9,
            humidity_pct: 80.0,
            wind_speed_ms: 3.1,
            pressure_hpa: 1012.0,
        }
    }

    #[test]
    fn london_example_renders_expected_strings() {
        let view = weather_view(&result("Rain"));
        assert_eq!(
            view,
            WeatherView {
                icon: "🌧️",
                city: "London".into(),
                description: "Light Rain".into(),
                temperature: "15°C".into(),
                feels_like: "Feels like 15°C".into(),
                humidity: "80%".into(),
                wind: "3.1 m/s".into(),
                pressure: "1012 hPa".into(),
            }
        );
    }

    #[test]
    fn icon_priority_prefers_cloud_over_rain() {
        assert_eq!(weather_icon(Some(&result("Rainy Clouds"))), "☁️");
    }

    #[test]
    fn icon_table() {
        let cases = [
            ("Clouds", "☁️"),
            ("RAIN", "🌧️"),
            ("Thunderstorm", "⛈️"),
            ("Drizzle", "🌦️"),
            ("Snow", "❄️"),
            ("Clear", "☀️"),
            ("Mist", "🌫️"),
            ("Fog", "🌫️"),
            ("Haze", UNKNOWN_CONDITION_ICON),
            ("", UNKNOWN_CONDITION_ICON),
        ];
        for (main, icon) in cases {
            assert_eq!(weather_icon(Some(&result(main))), icon, "condition {main:?}");
        }
        assert_eq!(weather_icon(None), PLACEHOLDER_ICON);
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("overcast clouds"), "Overcast Clouds");
        assert_eq!(title_case("thunderstorm with heavy-rain"), "Thunderstorm With Heavy-Rain");
        assert_eq!(title_case("ALREADY Upper"), "ALREADY Upper");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_half_up(15.4), 15);
        assert_eq!(round_half_up(14.9), 15);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-0.4), 0);
    }

    #[test]
    fn whole_numbers_print_without_fraction() {
        let mut r = result("Clear");
        r.wind_speed_ms = 3.0;
        assert_eq!(weather_view(&r).wind, "3 m/s");
    }

    #[test]
    fn placeholder_only_when_nothing_to_show() {
        let idle = QueryState::default();
        let view = render(&idle);
        assert!(view.placeholder);
        assert_eq!(view.search, SearchButton { label: "Search", enabled: true });

        let loading = QueryState { is_loading: true, ..Default::default() };
        let view = render(&loading);
        assert!(!view.placeholder);
        assert_eq!(view.search, SearchButton { label: "Searching...", enabled: false });

        let failed = QueryState { error: Some(LookupError::Transport), ..Default::default() };
        let view = render(&failed);
        assert!(!view.placeholder);
        assert_eq!(view.error.as_deref(), Some("Something went wrong. Please try again."));
        assert!(view.weather.is_none());
    }
}
