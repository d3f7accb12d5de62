use clap::{Parser, Subcommand, ValueEnum};
use inquire::{InquireError, Select, Text};
use std::time::Duration;

use cityweather_core::provider::provider_from_config;
use cityweather_core::route::{self, Route};
use cityweather_core::{
    CityCatalog, CityList, Config, Coordinates, LocationProvider, RetryPolicy, TemperatureUnit,
    WeatherView,
};

use crate::location::PromptLocation;
use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City list & weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnitArg {
    #[default]
    Celsius,
    Fahrenheit,
}

impl std::fmt::Display for UnitArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            UnitArg::Celsius => "celsius",
            UnitArg::Fahrenheit => "fahrenheit",
        })
    }
}

impl From<UnitArg> for TemperatureUnit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::Celsius => TemperatureUnit::Celsius,
            UnitArg::Fahrenheit => TemperatureUnit::Fahrenheit,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Browse the city list; more pages load at the bottom of the list.
    Cities {
        /// Temperature unit for the detail view.
        #[arg(long, value_enum, default_value_t)]
        unit: UnitArg,
    },

    /// Show current weather for a "<lat>-<lon>" city token.
    Show {
        /// City token as it appears in a city link, e.g. "48.85-2.35".
        token: String,

        /// Temperature unit for the detail view.
        #[arg(long, value_enum, default_value_t)]
        unit: UnitArg,
    },

    /// Show current weather for the device's location.
    Here {
        /// Temperature unit for the detail view.
        #[arg(long, value_enum, default_value_t)]
        unit: UnitArg,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Cities { unit } => browse_cities(unit.into()).await,
            Command::Show { token, unit } => show_route(&token, unit.into()).await,
            Command::Here { unit } => show_here(unit.into()).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

const LOAD_MORE: &str = "... load more cities";

async fn browse_cities(unit: TemperatureUnit) -> anyhow::Result<()> {
    let config = Config::load()?;
    let retry = RetryPolicy::fixed(Duration::from_secs(config.retry_delay_secs));
    let mut list = CityList::with_page_size(Box::new(CityCatalog::new()), config.page_size)
        .with_retry_policy(retry);

    list.mount().await?;

    loop {
        let mut options: Vec<String> = list
            .cities()
            .iter()
            .map(|c| format!("{}, {} ({})", c.ascii_name, c.country, c.timezone))
            .collect();
        options.push(LOAD_MORE.to_string());

        let picked = match Select::new("City:", options).raw_prompt() {
            Ok(option) => option,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        if picked.index == list.len() {
            // Bottom of the list: the scroll trigger.
            list.on_scroll(true).await?;
            continue;
        }

        let coords = list.cities()[picked.index].coordinates;
        tracing::debug!(token = %coords.to_token(), "navigating to detail view");
        show_weather(coords, unit).await?;
    }

    Ok(())
}

const FALLBACK_TEXT: &str = "Something went wrong";

/// What a path resolves to, decided before any config, provider or network
/// object is built.
#[derive(Debug, Clone, PartialEq)]
enum RouteAction {
    BrowseCities,
    ShowCity(Coordinates),
    Fallback,
}

fn resolve_route(path_or_token: &str) -> RouteAction {
    match Route::parse(path_or_token) {
        Route::Cities => RouteAction::BrowseCities,
        Route::City(token) => match route::parse_city_token(&token) {
            Ok(coords) => RouteAction::ShowCity(coords),
            Err(err) => {
                tracing::warn!(error = %err, "bad city token");
                RouteAction::Fallback
            }
        },
    }
}

async fn show_route(path_or_token: &str, unit: TemperatureUnit) -> anyhow::Result<()> {
    match resolve_route(path_or_token) {
        RouteAction::BrowseCities => browse_cities(unit).await,
        RouteAction::ShowCity(coords) => show_weather(coords, unit).await,
        RouteAction::Fallback => {
            println!("{FALLBACK_TEXT}");
            Ok(())
        }
    }
}

async fn show_weather(coords: Coordinates, unit: TemperatureUnit) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let mut view = WeatherView::new(provider, coords);
    view.set_unit(unit);
    view.load().await;

    print!("{}", render::render(&view));
    Ok(())
}

async fn show_here(unit: TemperatureUnit) -> anyhow::Result<()> {
    match PromptLocation.request_location().await {
        Ok(coords) => {
            tracing::debug!(token = %coords.to_token(), "navigating to detail view");
            show_weather(coords, unit).await
        }
        Err(err) => {
            tracing::warn!(error = %err, "location request failed");
            println!("Unable to retrieve your location.");
            Ok(())
        }
    }
}
