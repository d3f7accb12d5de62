//! Path routing: `/` shows the city list, `/<lat>-<lon>` shows the detail
//! view for that coordinate.

use crate::error::{Error, Result};
use crate::model::Coordinates;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — the city list.
    Cities,
    /// `/<token>` — the detail view; the token still has to survive
    /// [`parse_city_token`].
    City(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let token = path.trim_start_matches('/');
        if token.is_empty() {
            Route::Cities
        } else {
            Route::City(token.to_string())
        }
    }
}

/// Parses a `"<lat>-<lon>"` token into coordinates.
///
/// The split happens at the first `-` after the latitude's numeric prefix, so
/// a leading minus on the latitude is skipped and `"12.34--56.78"` yields
/// lat 12.34, lon -56.78. The hyphen separator is inherently ambiguous for
/// negative latitudes (`"-12.3-45.6"` reads as lat -12.3, never as lat 12.3
/// of a malformed token); the ambiguity is a known defect of the token shape
/// itself, carried as-is.
pub fn parse_city_token(token: &str) -> Result<Coordinates> {
    let invalid = || Error::InvalidToken(token.to_string());

    let start = usize::from(token.starts_with('-'));
    let sep = token[start..].find('-').map(|i| i + start).ok_or_else(invalid)?;

    let (lat_s, lon_s) = (&token[..sep], &token[sep + 1..]);
    if lat_s.is_empty() || lon_s.is_empty() {
        return Err(invalid());
    }

    let lat = lat_s.parse::<f64>().map_err(|_| invalid())?;
    let lon = lon_s.parse::<f64>().map_err(|_| invalid())?;

    Ok(Coordinates { lat, lon })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_routes_to_cities() {
        assert_eq!(Route::parse("/"), Route::Cities);
        assert_eq!(Route::parse(""), Route::Cities);
    }

    #[test]
    fn single_segment_routes_to_city() {
        assert_eq!(
            Route::parse("/12.34-56.78"),
            Route::City("12.34-56.78".to_string())
        );
    }

    #[test]
    fn parses_plain_token() {
        let coords = parse_city_token("12.34-56.78").unwrap();
        assert_eq!(coords.lat, 12.34);
        assert_eq!(coords.lon, 56.78);
    }

    #[test]
    fn parses_negative_longitude() {
        let coords = parse_city_token("12.34--56.78").unwrap();
        assert_eq!(coords.lat, 12.34);
        assert_eq!(coords.lon, -56.78);
    }

    #[test]
    fn parses_negative_latitude() {
        let coords = parse_city_token("-12.3-45.6").unwrap();
        assert_eq!(coords.lat, -12.3);
        assert_eq!(coords.lon, 45.6);
    }

    #[test]
    fn parses_both_negative() {
        let coords = parse_city_token("-12.3--45.6").unwrap();
        assert_eq!(coords.lat, -12.3);
        assert_eq!(coords.lon, -45.6);
    }

    #[test]
    fn token_without_separator_is_invalid() {
        assert!(matches!(
            parse_city_token("invalid"),
            Err(Error::InvalidToken(_))
        ));
    }

    #[test]
    fn non_numeric_components_are_invalid() {
        assert!(parse_city_token("north-south").is_err());
        assert!(parse_city_token("12.34-").is_err());
    }

    #[test]
    fn token_round_trips_through_coordinates() {
        let coords = Coordinates { lat: 48.85, lon: 2.35 };
        let parsed = parse_city_token(&coords.to_token()).unwrap();
        assert_eq!(parsed, coords);
    }
}
