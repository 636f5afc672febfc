// src/domain/distance.rs

use crate::errors::AppError;
use serde::Serialize;

/// Mean earth radius (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Validated constructor: latitude in [-90, 90], longitude in [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, AppError> {
        let coords = Self { lat, lng };
        coords.validate()?;
        Ok(coords)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(AppError::Validation(format!(
                "latitude {} is outside [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(AppError::Validation(format!(
                "longitude {} is outside [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Great-circle distance in kilometres (haversine).
pub fn haversine_km(a: Coordinates, b: Coordinates) -> Result<f64, AppError> {
    a.validate()?;
    b.validate()?;

    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    // Rounding can push h a hair past 1 for antipodal points.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    Ok(EARTH_RADIUS_KM * c)
}

/// Google Maps public transport directions between two points.
pub fn gmaps_directions_url(from: Coordinates, to: Coordinates) -> String {
    format!(
        "https://www.google.com/maps/dir/{},{}/{},{}/data=!4m2!4m1!3e3",
        from.lat, from.lng, to.lat, to.lng
    )
}
