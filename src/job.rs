//! Transporter job domain model.
//!
//! A job is an ordered sequence of pickup/drop stops. The order is the
//! required visiting order (the assignment workflow guarantees pickups
//! precede their drops); the route engine never reorders it.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Whether a stop is a produce pickup or a delivery drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Pickup,
    Drop,
}

/// One stop on a delivery job.
///
/// `collected` is owned by the fulfillment workflow; the route engine
/// only reads stop coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    pub kind: StopKind,
    pub address: String,
    pub coords: Coordinate,
    #[serde(default)]
    pub collected: bool,
}

/// A delivery job assigned to a transporter.
///
/// Immutable once loaded into the engine for a given build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub stops: Vec<Stop>,
}

impl Job {
    /// Stop coordinates in visiting order.
    pub fn stop_coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.stops.iter().map(|stop| stop.coords)
    }
}
