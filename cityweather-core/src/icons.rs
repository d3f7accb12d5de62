//! Fixed condition-code-to-glyph table, keyed by OpenWeather icon codes.

/// Returns the display glyph for an OpenWeather condition code such as
/// `"01d"` or `"10n"`. Unknown codes get no icon rather than an error.
pub fn glyph(code: &str) -> Option<&'static str> {
    let glyph = match code {
        "01d" => "☀",
        "01n" => "🌙",
        "02d" => "⛅",
        "02n" | "03d" | "03n" | "04d" | "04n" => "☁",
        "09d" | "09n" | "10n" => "🌧",
        "10d" => "🌦",
        "11d" | "11n" => "⛈",
        "13d" | "13n" => "❄",
        "50d" | "50n" => "🌫",
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_and_night_clear_differ() {
        assert_eq!(glyph("01d"), Some("☀"));
        assert_eq!(glyph("01n"), Some("🌙"));
    }

    #[test]
    fn all_documented_codes_have_a_glyph() {
        for code in [
            "01d", "01n", "02d", "02n", "03d", "03n", "04d", "04n", "09d", "09n", "10d", "10n",
            "11d", "11n", "13d", "13n", "50d", "50n",
        ] {
            assert!(glyph(code).is_some(), "missing glyph for {code}");
        }
    }

    #[test]
    fn unknown_code_has_no_icon() {
        assert_eq!(glyph("99x"), None);
        assert_eq!(glyph(""), None);
    }
}
