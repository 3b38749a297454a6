// src/map/viewport.rs

use crate::domain::property::Coordinate;
use serde::Serialize;

pub const DEFAULT_CENTER: Coordinate = Coordinate::new(39.5, -98.35);
pub const DEFAULT_ZOOM: u8 = 4;
/// Zoom used when a marker or list entry is picked.
pub const FOCUSED_ZOOM: u8 = 8;
/// Zoom used right after login.
pub const LOGIN_ZOOM: u8 = 6;
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 18;

/// Web Mercator is undefined at the poles.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Builds a viewport the map can actually show: zoom clamped,
    /// latitude clamped, longitude wrapped into [-180, 180).
    pub fn clamped(center: Coordinate, zoom: i64) -> Self {
        let zoom = zoom.clamp(MIN_ZOOM as i64, MAX_ZOOM as i64) as u8;
        let lat = if center.lat.is_finite() {
            center.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
        } else {
            DEFAULT_CENTER.lat
        };
        let lng = if center.lng.is_finite() {
            (center.lng + 180.0).rem_euclid(360.0) - 180.0
        } else {
            DEFAULT_CENTER.lng
        };

        Self {
            center: Coordinate::new(lat, lng),
            zoom,
        }
    }

    pub fn focused_on(center: Coordinate, zoom: u8) -> Self {
        Self::clamped(center, zoom as i64)
    }

    pub fn zoomed_by(&self, step: i64) -> Self {
        Self::clamped(self.center, self.zoom as i64 + step)
    }
}
