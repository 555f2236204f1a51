//! Straight-line path builder (fallback when provider routing fails).
//!
//! No road snapping; consecutive waypoints become straight segments.
//! Total and deterministic, so the orchestrator always has a path it can
//! fall back to.

use crate::geo::Coordinate;
use crate::path::{RoutePath, RouteSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackPathBuilder;

impl FallbackPathBuilder {
    /// Returns the waypoint sequence unchanged as a fallback-sourced path.
    pub fn build(waypoints: &[Coordinate]) -> RoutePath {
        RoutePath::new(waypoints.to_vec(), RouteSource::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_length_and_order() {
        let waypoints = vec![
            Coordinate::new(6.90, 79.85),
            Coordinate::new(6.92, 79.87),
            Coordinate::new(6.95, 79.90),
        ];
        let path = FallbackPathBuilder::build(&waypoints);
        assert_eq!(path.coordinates(), &waypoints[..]);
        assert_eq!(path.source(), RouteSource::Fallback);
    }

    #[test]
    fn test_single_waypoint() {
        let waypoints = vec![Coordinate::new(6.90, 79.85)];
        let path = FallbackPathBuilder::build(&waypoints);
        assert_eq!(path.coordinates().len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_path() {
        let path = FallbackPathBuilder::build(&[]);
        assert!(path.coordinates().is_empty());
        assert_eq!(path.source(), RouteSource::Fallback);
    }
}
