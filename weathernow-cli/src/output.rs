use chrono::{DateTime, Local, Utc};
use weathernow_core::View;

const PLACEHOLDER_TEXT: &str = "Type a city name and hit Enter to view weather details.";
const FOOTER_TEXT: &str = "Data by OpenWeatherMap";

pub fn print_header() {
    println!("🌤️  WeatherNow");
    println!("Get live weather of any city instantly.\n");
}

pub fn print_view(view: &View, updated_at: Option<DateTime<Utc>>) {
    print!("{}", format_view(view, updated_at));
}

/// Terminal rendering of a [`View`].
pub fn format_view(view: &View, updated_at: Option<DateTime<Utc>>) -> String {
    let mut out = String::new();

    if !view.search.enabled {
        out.push_str(&format!("{}\n", view.search.label));
    }

    if let Some(error) = &view.error {
        out.push_str(&format!("✖ {error}\n\n"));
    }

    if view.placeholder {
        out.push_str(&format!("{PLACEHOLDER_TEXT}\n\n"));
    }

    if let Some(w) = &view.weather {
        out.push_str(&format!("{}  {}\n", w.icon, w.city));
        out.push_str(&format!("    {}\n", w.description));
        out.push_str(&format!("    {}  ({})\n", w.temperature, w.feels_like));
        out.push_str(&format!(
            "    Humidity {}   Wind {}   Pressure {}\n",
            w.humidity, w.wind, w.pressure
        ));
    }

    // The update time only means something next to a result.
    match updated_at.filter(|_| view.weather.is_some()) {
        Some(at) => out.push_str(&format!(
            "{FOOTER_TEXT} • updated {}\n\n",
            at.with_timezone(&Local).format("%H:%M")
        )),
        None => out.push_str(&format!("{FOOTER_TEXT}\n\n")),
    }

    out
}
