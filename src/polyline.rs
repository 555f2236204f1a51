//! Encoded-path codec for route geometries.
//!
//! Directions providers return route geometry as a compact ASCII string:
//! per-coordinate deltas at 1e-5 degree precision, zig-zag signed, split
//! into 5-bit groups with 0x20 as the continuation bit and each group
//! offset by 63 into printable ASCII. Latitude and longitude alternate,
//! each with its own running total.

use thiserror::Error;

use crate::geo::Coordinate;

/// Encoded integer units per degree.
const SCALE: f64 = 1e5;

#[derive(Debug, Error, PartialEq)]
pub enum PolylineError {
    /// The string ended mid-group or with a latitude missing its longitude.
    #[error("malformed polyline: truncated coordinate component")]
    Truncated,
    /// A byte below the encoding's printable base of 63.
    #[error("malformed polyline: invalid character 0x{0:02x}")]
    InvalidCharacter(u8),
    /// A coordinate component with more continuation groups than a 64-bit
    /// accumulator can hold.
    #[error("malformed polyline: oversized coordinate component")]
    Oversized,
    /// A decoded pair fell outside valid degree ranges.
    #[error("malformed polyline: coordinate ({0}, {1}) out of range")]
    OutOfRange(f64, f64),
}

/// Decodes an encoded path into its coordinate sequence.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let mut bytes = encoded.bytes();
    let mut coordinates = Vec::new();
    let mut lat_total: i64 = 0;
    let mut lon_total: i64 = 0;

    while let Some(lat_delta) = next_delta(&mut bytes)? {
        let lon_delta = next_delta(&mut bytes)?.ok_or(PolylineError::Truncated)?;
        lat_total += lat_delta;
        lon_total += lon_delta;

        let coordinate = Coordinate::new(lat_total as f64 / SCALE, lon_total as f64 / SCALE);
        if !coordinate.in_range() {
            return Err(PolylineError::OutOfRange(
                coordinate.latitude,
                coordinate.longitude,
            ));
        }
        coordinates.push(coordinate);
    }

    Ok(coordinates)
}

/// Encodes a coordinate sequence; the inverse of [`decode`] up to the
/// codec's fixed precision.
pub fn encode(coordinates: &[Coordinate]) -> String {
    let mut encoded = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for coordinate in coordinates {
        let lat = scale(coordinate.latitude);
        let lon = scale(coordinate.longitude);
        encode_delta(lat - prev_lat, &mut encoded);
        encode_delta(lon - prev_lon, &mut encoded);
        prev_lat = lat;
        prev_lon = lon;
    }

    encoded
}

/// Reads one zig-zag delta. `Ok(None)` marks a clean end of input;
/// ending inside a group is an error.
fn next_delta(bytes: &mut impl Iterator<Item = u8>) -> Result<Option<i64>, PolylineError> {
    let mut value: i64 = 0;
    let mut shift: u32 = 0;
    let mut in_group = false;

    loop {
        let Some(byte) = bytes.next() else {
            return if in_group {
                Err(PolylineError::Truncated)
            } else {
                Ok(None)
            };
        };
        if byte < 63 {
            return Err(PolylineError::InvalidCharacter(byte));
        }
        in_group = true;

        // Hostile input can chain continuation groups indefinitely; past
        // 64 bits the shift itself would overflow.
        if shift >= 64 {
            return Err(PolylineError::Oversized);
        }

        let group = i64::from(byte - 63);
        value |= (group & 0x1f) << shift;
        shift += 5;

        if group & 0x20 == 0 {
            let delta = if value & 1 == 1 {
                !(value >> 1)
            } else {
                value >> 1
            };
            return Ok(Some(delta));
        }
    }
}

fn encode_delta(delta: i64, out: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };

    while value >= 0x20 {
        out.push(((0x20 | (value & 0x1f)) as u8 + 63) as char);
        value >>= 5;
    }
    out.push((value as u8 + 63) as char);
}

fn scale(degrees: f64) -> i64 {
    (degrees * SCALE).round() as i64
}
