use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic point, as reported by the catalog or the platform location service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Builds the `"<lat>-<lon>"` token used in city links.
    ///
    /// The plain hyphen separator collides with the minus sign of negative
    /// coordinates; see [`crate::route::parse_city_token`] for how tokens are
    /// read back.
    pub fn to_token(self) -> String {
        format!("{}-{}", self.lat, self.lon)
    }
}

/// One city row from the GeoNames catalog. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRecord {
    pub geoname_id: String,
    pub name: String,
    pub ascii_name: String,
    #[serde(rename = "cou_name_en")]
    pub country: String,
    pub timezone: String,
    pub coordinates: Coordinates,
}

/// One bounded batch of catalog records.
///
/// `total_count` is reported by the API but never drives termination: an
/// exhausted dataset just starts returning empty pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityPage {
    pub total_count: u64,
    pub results: Vec<CityRecord>,
}

/// A point-in-time weather reading for one coordinate.
///
/// Temperatures are kept in Kelvin as the API reports them; conversion to a
/// display unit happens at render time via [`TemperatureUnit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub icon: String,
    pub description: String,
    pub temp_k: f64,
    pub temp_min_k: f64,
    pub temp_max_k: f64,
    pub feels_like_k: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub wind_deg: Option<f64>,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
}

/// Display unit for temperatures. Transient UI state, defaults to Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts a Kelvin reading into this unit, rounded to a whole degree.
    pub fn from_kelvin(self, kelvin: f64) -> i64 {
        match self {
            TemperatureUnit::Celsius => kelvin_to_celsius(kelvin),
            TemperatureUnit::Fahrenheit => kelvin_to_fahrenheit(kelvin),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

pub fn kelvin_to_celsius(kelvin: f64) -> i64 {
    (kelvin - 273.15).round() as i64
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> i64 {
    ((kelvin - 273.15) * 9.0 / 5.0 + 32.0).round() as i64
}
