//! One-shot device position acquisition, gated by a permission check.

use std::cell::Cell;

use thiserror::Error;

use crate::geo::Coordinate;
use crate::traits::LocationBackend;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    /// The user declined the permission prompt. Not retried automatically.
    #[error("location permission denied")]
    PermissionDenied,
    /// Permission was granted but the read produced nothing.
    #[error("position unavailable")]
    Unavailable,
}

/// Permission-gated one-shot position reads, plus the most recent sample.
///
/// The sample is the only state shared across route builds: written here
/// on each successful read, read (never written) by the route builder.
#[derive(Debug)]
pub struct GeoPositionProvider<B> {
    backend: B,
    last_known: Cell<Option<Coordinate>>,
}

impl<B: LocationBackend> GeoPositionProvider<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            last_known: Cell::new(None),
        }
    }

    /// Acquires the current position.
    ///
    /// If permission is missing it is requested once; denial surfaces as
    /// [`PositionError::PermissionDenied`]. Each call performs a fresh
    /// one-shot read; there is no continuous tracking.
    pub fn acquire(&self) -> Result<Coordinate, PositionError> {
        if !self.backend.permission_granted() && !self.backend.request_permission() {
            return Err(PositionError::PermissionDenied);
        }

        let coordinate = self
            .backend
            .read_position()
            .ok_or(PositionError::Unavailable)?;
        self.last_known.set(Some(coordinate));
        Ok(coordinate)
    }

    /// The most recent successfully acquired position, if any.
    pub fn last_known(&self) -> Option<Coordinate> {
        self.last_known.get()
    }
}
