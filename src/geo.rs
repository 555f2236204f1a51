//! Geographic primitives shared across the route engine.
//!
//! Coordinates are plain lat/lng degree pairs. Fit bounds are a derived
//! view over a path's coordinates, computed once per build and handed to
//! the map surface as a read-only value.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
///
/// Valid latitudes are in [-90, 90], longitudes in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are within valid degree ranges.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Pixel padding applied around fit bounds when framing the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgePadding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl EdgePadding {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }
}

impl Default for EdgePadding {
    fn default() -> Self {
        Self::uniform(48)
    }
}

/// The minimal bounding rectangle framing a set of coordinates, plus the
/// padding the camera should apply around it.
///
/// A single-point input yields a zero-span box; expanding that to a
/// minimum zoom is the map view's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub padding: EdgePadding,
}

impl FitBounds {
    /// Computes bounds around a coordinate sequence. Returns `None` for an
    /// empty sequence.
    pub fn around(coordinates: &[Coordinate], padding: EdgePadding) -> Option<Self> {
        let first = coordinates.first()?;
        let mut bounds = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
            padding,
        };

        for coordinate in &coordinates[1..] {
            bounds.min_lat = bounds.min_lat.min(coordinate.latitude);
            bounds.max_lat = bounds.max_lat.max(coordinate.latitude);
            bounds.min_lon = bounds.min_lon.min(coordinate.longitude);
            bounds.max_lon = bounds.max_lon.max(coordinate.longitude);
        }

        Some(bounds)
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.latitude >= self.min_lat
            && coordinate.latitude <= self.max_lat
            && coordinate.longitude >= self.min_lon
            && coordinate.longitude <= self.max_lon
    }
}
