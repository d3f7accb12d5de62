use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result, truncate_body};
use crate::model::{Coordinates, WeatherSnapshot};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_PATH: &str = "/data/2.5/weather";

/// Current-weather client for OpenWeather.
///
/// No `units` query parameter is sent, so the API reports temperatures in
/// Kelvin; conversion to a display unit is the view's job.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, coords: Coordinates) -> Result<WeatherSnapshot> {
        let url = format!("{}{CURRENT_PATH}", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.lat.to_string()),
                ("lon", coords.lon.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        let (icon, description) = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| (w.icon, w.description))
            .unwrap_or_else(|| (String::new(), "unknown".to_string()));

        let sys = parsed.sys.unwrap_or_default();

        Ok(WeatherSnapshot {
            location_name: parsed.name,
            icon,
            description,
            temp_k: parsed.main.temp,
            temp_min_k: parsed.main.temp_min,
            temp_max_k: parsed.main.temp_max,
            feels_like_k: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            wind_deg: parsed.wind.deg,
            sunrise: sys.sunrise.and_then(unix_to_utc),
            sunset: sys.sunset.and_then(unix_to_utc),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    sunrise: Option<i64>,
    #[serde(default)]
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    #[serde(default)]
    sys: Option<OwSys>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, coords: Coordinates) -> Result<WeatherSnapshot> {
        self.fetch_current(coords).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_to_utc_converts_known_timestamp() {
        let dt = unix_to_utc(1_700_000_000).expect("timestamp must convert");
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }

    #[test]
    fn response_without_sys_block_parses() {
        let json = r#"{
            "name": "Paris",
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
            "main": { "temp": 300.15, "temp_min": 298.0, "temp_max": 302.0, "feels_like": 301.0, "humidity": 40 },
            "wind": { "speed": 3.5 }
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(json).expect("response must parse");
        assert_eq!(parsed.name, "Paris");
        assert_eq!(parsed.weather[0].icon, "01d");
        assert!(parsed.sys.is_none());
        assert!(parsed.wind.deg.is_none());
    }
}
