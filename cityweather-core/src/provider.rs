use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::Result;
use crate::model::{Coordinates, WeatherSnapshot};
use crate::provider::openweather::OpenWeatherProvider;
use crate::Config;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, coords: Coordinates) -> Result<WeatherSnapshot>;
}

/// Construct the weather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}
