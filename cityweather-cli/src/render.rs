//! Human-friendly rendering of the weather detail view.

use chrono::Local;
use cityweather_core::{icons, WeatherView};

/// Renders the detail view as a block of text. A view that is still loading
/// (including after a failed fetch) renders its loader line.
pub fn render(view: &WeatherView) -> String {
    let Some(snapshot) = view.snapshot() else {
        return "Loading...".to_string();
    };

    let unit = view.unit();
    let mut out = String::new();

    out.push_str(&format!("{}\n", snapshot.location_name));
    out.push_str(&format!("{}\n\n", Local::now().format("%A, %-d %B %Y %H:%M")));

    match icons::glyph(&snapshot.icon) {
        Some(glyph) => out.push_str(&format!("{glyph}  {}\n", capitalize(&snapshot.description))),
        None => out.push_str(&format!("{}\n", capitalize(&snapshot.description))),
    }

    // A held snapshot backs every derived value at this point.
    let temp = view.temperature().unwrap_or_default();
    let (max, min) = view.temperature_range().unwrap_or_default();
    let feels_like = view.feels_like().unwrap_or_default();

    out.push_str(&format!("{temp}{}\n", unit.symbol()));
    out.push_str(&format!("{max}°/{min}°, feels like {feels_like}°\n\n"));
    out.push_str(&format!("Humidity: {}%\n", snapshot.humidity_pct));
    out.push_str(&format!("Wind: {} m/s\n", snapshot.wind_speed));

    if let (Some(sunrise), Some(sunset)) = (snapshot.sunrise, snapshot.sunset) {
        out.push_str(&format!(
            "Sunrise: {}  Sunset: {}\n",
            sunrise.with_timezone(&Local).format("%H:%M"),
            sunset.with_timezone(&Local).format("%H:%M"),
        ));
    }

    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
