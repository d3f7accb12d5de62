//! Detail view state: one weather snapshot for one coordinate.

use crate::list::FetchState;
use crate::model::{Coordinates, TemperatureUnit, WeatherSnapshot};
use crate::provider::WeatherProvider;

/// Holds the most recently fetched snapshot for a coordinate, plus the
/// transient unit selection.
///
/// A failed fetch is logged and leaves the view in its loading state with no
/// retry scheduled. That asymmetry with the list view is deliberate and
/// mirrors the app this models: the detail screen shows its loader until a
/// fresh mount.
pub struct WeatherView {
    provider: Box<dyn WeatherProvider>,
    coords: Coordinates,
    unit: TemperatureUnit,
    snapshot: Option<WeatherSnapshot>,
    state: FetchState,
}

impl WeatherView {
    pub fn new(provider: Box<dyn WeatherProvider>, coords: Coordinates) -> Self {
        Self {
            provider,
            coords,
            unit: TemperatureUnit::default(),
            snapshot: None,
            state: FetchState::Idle,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coords
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Purely local UI state; no network effect.
    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.unit = unit;
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_none()
    }

    /// Fetches the snapshot for the current coordinates.
    ///
    /// A no-op when a fetch is in flight or a snapshot is already held, so
    /// re-rendering an unchanged view never issues another request.
    pub async fn load(&mut self) {
        if self.state == FetchState::Fetching || self.snapshot.is_some() {
            return;
        }

        self.state = FetchState::Fetching;
        match self.provider.current_weather(self.coords).await {
            Ok(snapshot) => {
                tracing::debug!(name = %snapshot.location_name, "weather snapshot replaced");
                self.snapshot = Some(snapshot);
            }
            Err(err) => {
                // The view stays "still loading"; no retry is scheduled.
                tracing::error!(
                    lat = self.coords.lat,
                    lon = self.coords.lon,
                    error = %err,
                    "weather fetch failed"
                );
            }
        }
        self.state = FetchState::Idle;
    }

    /// Changing coordinates drops the held snapshot so the next `load`
    /// fetches fresh data. Setting the same coordinates changes nothing.
    pub fn set_coordinates(&mut self, coords: Coordinates) {
        if coords != self.coords {
            self.coords = coords;
            self.snapshot = None;
        }
    }

    /// Current temperature in the active unit, rounded.
    pub fn temperature(&self) -> Option<i64> {
        self.snapshot.as_ref().map(|s| self.unit.from_kelvin(s.temp_k))
    }

    /// (max, min) temperatures in the active unit, rounded.
    pub fn temperature_range(&self) -> Option<(i64, i64)> {
        self.snapshot
            .as_ref()
            .map(|s| (self.unit.from_kelvin(s.temp_max_k), self.unit.from_kelvin(s.temp_min_k)))
    }

    pub fn feels_like(&self) -> Option<i64> {
        self.snapshot
            .as_ref()
            .map(|s| self.unit.from_kelvin(s.feels_like_k))
    }
}

impl std::fmt::Debug for WeatherView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherView")
            .field("coords", &self.coords)
            .field("unit", &self.unit)
            .field("loaded", &self.snapshot.is_some())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn snapshot(temp_k: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "Paris".to_string(),
            icon: "01d".to_string(),
            description: "clear sky".to_string(),
            temp_k,
            temp_min_k: temp_k - 2.0,
            temp_max_k: temp_k + 2.0,
            feels_like_k: temp_k + 1.0,
            humidity_pct: 40,
            wind_speed: 3.5,
            wind_deg: Some(180.0),
            sunrise: None,
            sunset: None,
        }
    }

    #[derive(Debug)]
    struct FakeProvider {
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current_weather(&self, _coords: Coordinates) -> Result<WeatherSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(Error::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: String::new(),
                })
            } else {
                Ok(snapshot(300.15))
            }
        }
    }

    fn view(fail: bool) -> (WeatherView, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FakeProvider {
            fail,
            calls: calls.clone(),
        };
        let coords = Coordinates { lat: 48.85, lon: 2.35 };
        (WeatherView::new(Box::new(provider), coords), calls)
    }

    #[tokio::test]
    async fn load_replaces_snapshot_wholesale() {
        let (mut view, calls) = view(false);
        assert!(view.is_loading());

        view.load().await;

        assert!(!view.is_loading());
        assert_eq!(view.temperature(), Some(27));
        assert_eq!(view.temperature_range(), Some((29, 25)));
        assert_eq!(view.feels_like(), Some(28));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reload_with_held_snapshot_fetches_nothing() {
        let (mut view, calls) = view(false);
        view.load().await;
        view.load().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_leaves_view_loading_with_no_retry() {
        let (mut view, calls) = view(true);
        view.load().await;

        assert!(view.is_loading());
        assert_eq!(view.temperature(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn changing_coordinates_drops_snapshot_and_refetches() {
        let (mut view, calls) = view(false);
        view.load().await;

        view.set_coordinates(Coordinates { lat: 51.5, lon: -0.12 });
        assert!(view.is_loading());

        view.load().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn same_coordinates_keep_snapshot() {
        let (mut view, calls) = view(false);
        view.load().await;

        view.set_coordinates(Coordinates { lat: 48.85, lon: 2.35 });
        assert!(!view.is_loading());

        view.load().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unit_switch_is_local_state_only() {
        let (mut view, calls) = view(false);
        view.load().await;

        view.set_unit(TemperatureUnit::Fahrenheit);
        assert_eq!(view.temperature(), Some(81));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
