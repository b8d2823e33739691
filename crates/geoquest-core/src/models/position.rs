//! The player's most recent known location.

use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};

use crate::error::{QuestError, Result};

/// A single location fix from the position source. Replaced wholesale on every
/// update; no history is kept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees (WGS 84)
    pub latitude: f64,

    /// Longitude in degrees (WGS 84)
    pub longitude: f64,

    /// Reported accuracy radius in meters
    pub accuracy_m: f64,

    /// When the fix was observed
    pub observed_at: DateTime<Utc>,
}

impl Position {
    /// Build a position from raw values, rejecting non-finite or out-of-range
    /// input. The browser geolocation API guarantees well-formed fixes, but
    /// any other caller is an untrusted boundary.
    pub fn try_new(latitude: f64, longitude: f64, accuracy_m: f64) -> Result<Self> {
        let coords_valid = latitude.is_finite()
            && longitude.is_finite()
            && latitude.abs() <= 90.0
            && longitude.abs() <= 180.0;
        let accuracy_valid = accuracy_m.is_finite() && accuracy_m >= 0.0;

        if !coords_valid || !accuracy_valid {
            return Err(QuestError::InvalidPosition {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
            accuracy_m,
            observed_at: Utc::now(),
        })
    }

    /// The fix as a point (x = longitude, y = latitude)
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
