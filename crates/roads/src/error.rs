// ---------------------------------------------------------------------------
// RoadError: construction and mesh-building failures for the road model
// ---------------------------------------------------------------------------

use std::fmt;

use geometry::GeometryError;

use crate::road::RoadId;

/// Errors produced while assembling roads or building geometry from them.
///
/// Point queries never return these: a station or offset outside the road
/// is a lookup miss (`None`), not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RoadError {
    /// Road length is negative, NaN, or infinite.
    InvalidLength { road: RoadId, length: f64 },
    /// The reference line ends before the road does.
    RefLineTooShort {
        road: RoadId,
        ref_line_length: f64,
        length: f64,
    },
    /// A lane-section starts outside `[0, length)`.
    LaneSectionOutOfRange { road: RoadId, s0: f64, length: f64 },
    /// Two lane-sections share the same start station.
    DuplicateLaneSection { road: RoadId, s0: f64 },
    /// The first lane-section does not start at station 0.
    MissingStartSection { road: RoadId, first_s0: f64 },
    /// A road with this id is already part of the network.
    DuplicateRoad(RoadId),
    /// No lane-section starts at the requested station.
    UnknownLaneSection { road: RoadId, s0: f64 },
    /// The lane-section has no lane with this id.
    UnknownLane { road: RoadId, s0: f64, lane_id: i32 },
    /// Mesh construction rejected its input.
    Geometry(GeometryError),
}

impl fmt::Display for RoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadError::InvalidLength { road, length } => {
                write!(f, "Road {}: invalid length {length}", road.0)
            }
            RoadError::RefLineTooShort {
                road,
                ref_line_length,
                length,
            } => write!(
                f,
                "Road {}: reference line length {ref_line_length} shorter than road length {length}",
                road.0
            ),
            RoadError::LaneSectionOutOfRange { road, s0, length } => write!(
                f,
                "Road {}: lane-section at s0={s0} outside [0, {length})",
                road.0
            ),
            RoadError::DuplicateLaneSection { road, s0 } => {
                write!(f, "Road {}: duplicate lane-section at s0={s0}", road.0)
            }
            RoadError::MissingStartSection { road, first_s0 } => write!(
                f,
                "Road {}: first lane-section starts at s0={first_s0}, expected 0",
                road.0
            ),
            RoadError::DuplicateRoad(road) => write!(f, "Duplicate road id {}", road.0),
            RoadError::UnknownLaneSection { road, s0 } => {
                write!(f, "Road {}: no lane-section at s0={s0}", road.0)
            }
            RoadError::UnknownLane { road, s0, lane_id } => write!(
                f,
                "Road {}: lane-section s0={s0} has no lane {lane_id}",
                road.0
            ),
            RoadError::Geometry(e) => write!(f, "Geometry error: {e}"),
        }
    }
}

impl std::error::Error for RoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoadError::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryError> for RoadError {
    fn from(e: GeometryError) -> Self {
        RoadError::Geometry(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_error_display_out_of_range() {
        let err = RoadError::LaneSectionOutOfRange {
            road: RoadId(7),
            s0: 120.0,
            length: 100.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("Road 7"), "got: {msg}");
        assert!(msg.contains("s0=120"), "got: {msg}");
    }

    #[test]
    fn test_road_error_display_short_ref_line() {
        let msg = format!(
            "{}",
            RoadError::RefLineTooShort {
                road: RoadId(2),
                ref_line_length: 10.0,
                length: 100.0,
            }
        );
        assert!(msg.contains("reference line length 10"), "got: {msg}");
        assert!(msg.contains("road length 100"), "got: {msg}");
    }

    #[test]
    fn test_road_error_display_duplicate_road() {
        let msg = format!("{}", RoadError::DuplicateRoad(RoadId(3)));
        assert!(msg.contains("Duplicate road id 3"), "got: {msg}");
    }

    #[test]
    fn test_road_error_from_geometry() {
        let err: RoadError = GeometryError::BorderLengthMismatch { inner: 2, outer: 5 }.into();
        assert!(matches!(err, RoadError::Geometry(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_road_error_debug() {
        let err = RoadError::UnknownLane {
            road: RoadId(1),
            s0: 0.0,
            lane_id: -4,
        };
        let debug = format!("{err:?}");
        assert!(debug.contains("UnknownLane"), "got: {debug}");
    }
}
