use serde::{Deserialize, Serialize};

use crate::spline::CubicSpline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LaneType {
    #[default]
    Driving,
    Shoulder,
    Border,
    Sidewalk,
    Biking,
    Parking,
    Median,
    None,
}

/// A single lane of a lane-section.
///
/// `id` is signed: positive ids lie left of the centre lane, negative ids
/// right, and 0 is the zero-width centre lane itself. `width` is evaluated
/// at road stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub id: i32,
    pub lane_type: LaneType,
    pub width: CubicSpline,
}

impl Lane {
    pub fn new(id: i32, lane_type: LaneType, width: CubicSpline) -> Self {
        Self {
            id,
            lane_type,
            width,
        }
    }

    /// Lane of constant `width`.
    pub fn with_constant_width(id: i32, lane_type: LaneType, width: f64) -> Self {
        Self::new(id, lane_type, CubicSpline::constant(width))
    }

    pub fn center(id: i32) -> Self {
        Self::new(id, LaneType::None, CubicSpline::new())
    }

    pub fn is_left(&self) -> bool {
        self.id > 0
    }

    pub fn is_right(&self) -> bool {
        self.id < 0
    }

    /// Width at `s`; negative spline values count as zero.
    pub fn width_at(&self, s: f64) -> f64 {
        self.width.get(s).max(0.0)
    }
}
