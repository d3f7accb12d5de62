//! Core library for the `cityweather` app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Paged access to the city catalog and the incremental list state
//! - Weather lookup, unit conversion, routing and icon helpers
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod icons;
pub mod list;
pub mod location;
pub mod model;
pub mod provider;
pub mod retry;
pub mod route;

pub use catalog::{CityCatalog, CitySource};
pub use config::Config;
pub use detail::WeatherView;
pub use error::{Error, Result};
pub use list::{CityList, FetchOutcome, FetchState};
pub use location::{LocationError, LocationProvider};
pub use model::{CityPage, CityRecord, Coordinates, TemperatureUnit, WeatherSnapshot};
pub use provider::WeatherProvider;
pub use retry::RetryPolicy;
pub use route::Route;
