use async_trait::async_trait;
use cityweather_core::{Coordinates, LocationError, LocationProvider};
use inquire::{CustomType, InquireError};

/// Stand-in for the platform geolocation dialog: asks the user for
/// coordinates. A cancelled prompt counts as a denied permission.
#[derive(Debug, Default)]
pub struct PromptLocation;

#[async_trait]
impl LocationProvider for PromptLocation {
    async fn request_location(&self) -> Result<Coordinates, LocationError> {
        let lat = CustomType::<f64>::new("Latitude:")
            .with_help_message("e.g. 48.85")
            .prompt()
            .map_err(prompt_error)?;
        let lon = CustomType::<f64>::new("Longitude:")
            .with_help_message("e.g. 2.35")
            .prompt()
            .map_err(prompt_error)?;

        Ok(Coordinates { lat, lon })
    }
}

fn prompt_error(err: InquireError) -> LocationError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            LocationError::PermissionDenied
        }
        other => LocationError::Other(other.to_string()),
    }
}
