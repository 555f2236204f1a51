//! Directions provider HTTP adapter.
//!
//! Issues a single GET per fetch with origin, destination, and ordered
//! via-waypoints; the first returned route's overview polyline becomes
//! the path. Retry policy belongs to the caller, not here.

use serde::Deserialize;
use thiserror::Error;

use crate::geo::Coordinate;
use crate::path::{RoutePath, RouteSource};
use crate::polyline::{self, PolylineError};
use crate::traits::RouteProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// No directions provider configured; only the orchestrator emits this.
    #[error("no directions provider configured")]
    Unconfigured,
    /// Routing needs at least an origin and a destination.
    #[error("cannot route {0} waypoint(s), need at least 2")]
    InsufficientWaypoints(usize),
    /// Transport, HTTP status, or body parse failure.
    #[error("directions request failed")]
    Request(#[source] reqwest::Error),
    /// The provider answered with zero routes or empty geometry.
    #[error("provider returned no usable route")]
    EmptyResult,
    /// The provider's encoded path did not decode.
    #[error("provider returned undecodable geometry")]
    Geometry(#[from] PolylineError),
}

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    pub base_url: String,
    pub api_key: String,
    pub mode: String,
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api/directions/json".to_string(),
            api_key: String::new(),
            mode: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    config: DirectionsConfig,
    client: reqwest::blocking::Client,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Request URL for a waypoint list: first point is the origin, last is
    /// the destination, interior points are pipe-separated vias in the
    /// order given.
    fn request_url(&self, waypoints: &[Coordinate]) -> String {
        let origin = format_coordinate(&waypoints[0]);
        let destination = format_coordinate(&waypoints[waypoints.len() - 1]);

        let mut url = format!(
            "{}?origin={}&destination={}",
            self.config.base_url, origin, destination
        );

        let vias = &waypoints[1..waypoints.len() - 1];
        if !vias.is_empty() {
            let joined = vias
                .iter()
                .map(format_coordinate)
                .collect::<Vec<_>>()
                .join("|");
            url.push_str("&waypoints=");
            url.push_str(&joined);
        }

        url.push_str(&format!(
            "&mode={}&key={}",
            self.config.mode, self.config.api_key
        ));
        url
    }
}

impl RouteProvider for DirectionsClient {
    fn fetch_route(&self, waypoints: &[Coordinate]) -> Result<RoutePath, ProviderError> {
        if waypoints.len() < 2 {
            return Err(ProviderError::InsufficientWaypoints(waypoints.len()));
        }

        let url = self.request_url(waypoints);
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<DirectionsResponse>())
            .map_err(ProviderError::Request)?;

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResult)?;
        let coordinates = polyline::decode(&route.overview_polyline.points)?;
        if coordinates.is_empty() {
            return Err(ProviderError::EmptyResult);
        }

        Ok(RoutePath::new(coordinates, RouteSource::Provider))
    }
}

fn format_coordinate(coordinate: &Coordinate) -> String {
    format!("{:.6},{:.6}", coordinate.latitude, coordinate.longitude)
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<ProviderRoute>,
}

#[derive(Debug, Deserialize)]
struct ProviderRoute {
    overview_polyline: OverviewPolyline,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}
