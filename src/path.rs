//! Route path values produced by a build.
//!
//! A path is one concrete type with a provenance discriminant: the map
//! layer draws provider paths as road geometry and fallback paths as
//! straight segments (optionally flagged as approximate).

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Where a route path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    /// Road-snapped geometry from the directions provider.
    Provider,
    /// Straight segments between the assembled waypoints.
    Fallback,
}

/// A drivable (or approximated) path as an ordered coordinate sequence.
///
/// Created fresh on every build and never mutated in place; a rebuild
/// produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    coordinates: Vec<Coordinate>,
    source: RouteSource,
}

impl RoutePath {
    pub fn new(coordinates: Vec<Coordinate>, source: RouteSource) -> Self {
        Self {
            coordinates,
            source,
        }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn source(&self) -> RouteSource {
        self.source
    }

    pub fn into_coordinates(self) -> Vec<Coordinate> {
        self.coordinates
    }
}
