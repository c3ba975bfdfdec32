//! Geographic position as delivered by browser geolocation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A latitude/longitude pair.
///
/// The order form carries the position through a hidden input as
/// `"lat,lng"`; [`FromStr`] and [`fmt::Display`] implement that format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Create a position from coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Error parsing a `"lat,lng"` string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePositionError {
    #[error("expected \"lat,lng\", got {0:?}")]
    MissingSeparator(String),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| ParsePositionError::MissingSeparator(s.to_string()))?;
        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| ParsePositionError::InvalidCoordinate(lat.trim().to_string()))?;
        let longitude = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| ParsePositionError::InvalidCoordinate(lng.trim().to_string()))?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let pos: Position = "41.31,69.24".parse().unwrap();
        assert!((pos.latitude - 41.31).abs() < f64::EPSILON);
        assert!((pos.longitude - 69.24).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        let pos: Position = " 41.31 , 69.24 ".parse().unwrap();
        assert!((pos.longitude - 69.24).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert!("".parse::<Position>().is_err());
        assert!("41.31".parse::<Position>().is_err());
        assert!("north,south".parse::<Position>().is_err());
    }

    #[test]
    fn test_display_matches_hidden_input_format() {
        let pos = Position::new(41.31, 69.24);
        assert_eq!(pos.to_string(), "41.31,69.24");
    }
}
