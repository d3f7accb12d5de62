//! Host location capability, modeled as an injected trait so the rest of the
//! app stays testable without a real device.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Coordinates;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location service unavailable")]
    Unavailable,

    #[error("location error: {0}")]
    Other(String),
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Asks the host for the device's current coordinates. Denial and
    /// failure are both surfaced to the user, never retried silently.
    async fn request_location(&self) -> Result<Coordinates, LocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedLocation(Coordinates);

    #[async_trait]
    impl LocationProvider for FixedLocation {
        async fn request_location(&self) -> Result<Coordinates, LocationError> {
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn location_feeds_the_token_shape() {
        let provider = FixedLocation(Coordinates { lat: 51.5, lon: -0.12 });
        let coords = provider.request_location().await.unwrap();
        assert_eq!(coords.to_token(), "51.5--0.12");

        let parsed = crate::route::parse_city_token(&coords.to_token()).unwrap();
        assert_eq!(parsed, coords);
    }

    #[test]
    fn denial_has_a_user_facing_message() {
        assert_eq!(
            LocationError::PermissionDenied.to_string(),
            "location permission denied"
        );
    }
}
