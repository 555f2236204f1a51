//! Test fixtures for delivery-router.
//!
//! Provides realistic test data (Colombo-area pickup/drop jobs) and a
//! scripted route provider for exercising the orchestrator without a
//! live directions service.

pub mod colombo;

pub use colombo::*;

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::PoisonError;

use delivery_router::directions::ProviderError;
use delivery_router::geo::Coordinate;
use delivery_router::path::RoutePath;
use delivery_router::traits::RouteProvider;

/// A route provider that replays a scripted sequence of responses and
/// records the waypoint lists it was asked to route.
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<RoutePath, ProviderError>>>,
    requests: Mutex<Vec<Vec<Coordinate>>>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Result<RoutePath, ProviderError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with the given path.
    pub fn returning(path: RoutePath) -> Self {
        Self::new(vec![Ok(path)])
    }

    /// Always fails with an empty-result error.
    pub fn failing() -> Self {
        Self::new(vec![Err(ProviderError::EmptyResult)])
    }

    /// Waypoint lists received so far, in call order.
    pub fn requests(&self) -> Vec<Vec<Coordinate>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RouteProvider for ScriptedProvider {
    fn fetch_route(&self, waypoints: &[Coordinate]) -> Result<RoutePath, ProviderError> {
        if waypoints.len() < 2 {
            return Err(ProviderError::InsufficientWaypoints(waypoints.len()));
        }
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(waypoints.to_vec());
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .expect("scripted provider ran out of responses")
    }
}
