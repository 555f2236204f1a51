//! External seams for the route engine.
//!
//! These are intentionally minimal. Concrete apps implement them against
//! their platform location API and their directions provider; tests
//! exercise the orchestrator with mocks.

use crate::directions::ProviderError;
use crate::geo::Coordinate;
use crate::path::RoutePath;

/// Platform location access: a permission check, a one-time prompt, and
/// a one-shot position read.
pub trait LocationBackend {
    /// Whether foreground location permission is already granted.
    fn permission_granted(&self) -> bool;

    /// Prompts the user for permission; returns the resulting grant state.
    fn request_permission(&self) -> bool;

    /// Performs a single position read. `None` when the hardware is
    /// unavailable or the read timed out.
    fn read_position(&self) -> Option<Coordinate>;
}

/// A directions service that routes an ordered waypoint list.
///
/// Implementations must preserve waypoint order; the caller's stop
/// sequence encodes pickup/drop precedence and is never reoptimized.
pub trait RouteProvider {
    fn fetch_route(&self, waypoints: &[Coordinate]) -> Result<RoutePath, ProviderError>;
}

impl<T: RouteProvider + ?Sized> RouteProvider for &T {
    fn fetch_route(&self, waypoints: &[Coordinate]) -> Result<RoutePath, ProviderError> {
        (**self).fetch_route(waypoints)
    }
}
