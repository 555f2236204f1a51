//! Build orchestration: waypoint assembly, provider attempt, fallback,
//! fit bounds, and last-build-wins publication.
//!
//! A build runs to completion in one call; publication is a separate
//! step so that results arriving after a newer build has started are
//! discarded instead of overwriting it.

use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::{debug, warn};

use crate::directions::ProviderError;
use crate::fallback::FallbackPathBuilder;
use crate::geo::{Coordinate, EdgePadding, FitBounds};
use crate::job::Job;
use crate::path::RoutePath;
use crate::traits::RouteProvider;

/// A job with no stops and no position gives the engine nothing to route.
/// This is the only way a build fails outright; no fallback can repair it.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no waypoints to build a route from")]
pub struct EmptyRouteError;

/// The terminal output of one build: the path, its camera framing, and
/// the generation token deciding whether it is still current.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltRoute {
    pub generation: u64,
    pub path: RoutePath,
    pub bounds: FitBounds,
}

/// Route build orchestrator.
///
/// One value per map surface; each job load, position change, or manual
/// refresh starts a new build. Builds are not queued: the newest build's
/// generation invalidates every older in-flight result at publish time.
pub struct RouteBuilder<P> {
    provider: Option<P>,
    padding: EdgePadding,
    generation: AtomicU64,
    current: Mutex<Option<BuiltRoute>>,
}

impl<P: RouteProvider> RouteBuilder<P> {
    pub fn new(provider: Option<P>) -> Self {
        Self::with_padding(provider, EdgePadding::default())
    }

    pub fn with_padding(provider: Option<P>, padding: EdgePadding) -> Self {
        Self {
            provider,
            padding,
            generation: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Waypoints for a build: the current position, if resolved, followed
    /// by the job's stop coordinates in visiting order. An unresolved
    /// position is skipped, never awaited.
    pub fn assemble_waypoints(job: &Job, position: Option<Coordinate>) -> Vec<Coordinate> {
        position.into_iter().chain(job.stop_coords()).collect()
    }

    /// Runs one build to completion.
    ///
    /// Provider failures of every kind (unconfigured, too few waypoints,
    /// transport errors, empty or undecodable results) fall back to the
    /// straight-line path and never fail the build. The returned route
    /// carries the generation token allocated when the build started;
    /// hand it to [`RouteBuilder::publish`] to apply it.
    pub fn build(
        &self,
        job: &Job,
        position: Option<Coordinate>,
    ) -> Result<BuiltRoute, EmptyRouteError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let waypoints = Self::assemble_waypoints(job, position);
        debug!(
            job = %job.id,
            generation,
            waypoint_count = waypoints.len(),
            "starting route build"
        );

        if waypoints.is_empty() {
            return Err(EmptyRouteError);
        }

        let attempt = match &self.provider {
            Some(provider) => provider.fetch_route(&waypoints),
            None => Err(ProviderError::Unconfigured),
        };
        let path = match attempt {
            Ok(path) => path,
            Err(error) => {
                warn!(job = %job.id, %error, "provider routing failed, using straight-line fallback");
                FallbackPathBuilder::build(&waypoints)
            }
        };

        // Both branches yield at least one coordinate for a non-empty
        // waypoint list, so bounds always exist here.
        let bounds =
            FitBounds::around(path.coordinates(), self.padding).ok_or(EmptyRouteError)?;

        Ok(BuiltRoute {
            generation,
            path,
            bounds,
        })
    }

    /// Applies a finished build unless a newer build has started since
    /// (last-build-wins). Returns whether the route was applied.
    pub fn publish(&self, built: BuiltRoute) -> bool {
        if built.generation != self.generation.load(Ordering::SeqCst) {
            debug!(generation = built.generation, "discarding stale build result");
            return false;
        }

        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(built);
        true
    }

    /// Builds and immediately publishes; the manual refresh path.
    ///
    /// Returns `None` when a newer build started while this one was in
    /// flight and its result was discarded.
    pub fn refresh(
        &self,
        job: &Job,
        position: Option<Coordinate>,
    ) -> Result<Option<BuiltRoute>, EmptyRouteError> {
        let built = self.build(job, position)?;
        if self.publish(built.clone()) {
            Ok(Some(built))
        } else {
            Ok(None)
        }
    }

    /// The most recently published route, if any build has completed.
    pub fn current(&self) -> Option<BuiltRoute> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
