//! delivery-router core
//!
//! Route-planning engine for the transporter workflow: assembles the
//! waypoints for a job's ordered pickup/drop stops (plus the device
//! position when available), requests a drivable path from a directions
//! provider, decodes its compact geometry, falls back to straight
//! segments on any provider failure, and computes the fit bounds the map
//! needs to frame the result.

pub mod builder;
pub mod directions;
pub mod fallback;
pub mod geo;
pub mod job;
pub mod path;
pub mod polyline;
pub mod position;
pub mod traits;
