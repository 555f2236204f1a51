//! Colombo-area delivery jobs (coordinates from OpenStreetMap).

use delivery_router::geo::Coordinate;
use delivery_router::job::{Job, Stop, StopKind};

/// Transporter position near Colombo Fort.
pub fn transporter_position() -> Coordinate {
    Coordinate::new(6.93548, 79.84868)
}

pub fn stop(id: &str, kind: StopKind, address: &str, lat: f64, lon: f64) -> Stop {
    Stop {
        id: id.to_string(),
        kind,
        address: address.to_string(),
        coords: Coordinate::new(lat, lon),
        collected: false,
    }
}

/// Two farm pickups south of the city and one market drop: the standard
/// three-stop job used across the orchestrator tests.
pub fn vegetable_run() -> Job {
    Job {
        id: "job-veg-001".to_string(),
        title: "Vegetable run to Pettah market".to_string(),
        stops: vec![
            stop(
                "s1",
                StopKind::Pickup,
                "Farm gate, Piliyandala",
                6.80148,
                79.92226,
            ),
            stop(
                "s2",
                StopKind::Pickup,
                "Collection shed, Kesbewa",
                6.79541,
                79.93953,
            ),
            stop(
                "s3",
                StopKind::Drop,
                "Manning market, Pettah",
                6.93715,
                79.85100,
            ),
        ],
    }
}

/// A job with no stops; only valid to build with a known position.
pub fn empty_job() -> Job {
    Job {
        id: "job-empty".to_string(),
        title: "Unassigned".to_string(),
        stops: Vec::new(),
    }
}

/// A single-drop job, too short for provider routing on its own.
pub fn single_drop() -> Job {
    Job {
        id: "job-single".to_string(),
        title: "One drop".to_string(),
        stops: vec![stop(
            "s1",
            StopKind::Drop,
            "Manning market, Pettah",
            6.93715,
            79.85100,
        )],
    }
}
