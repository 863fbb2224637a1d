use bevy::math::DVec2;
use serde::{Deserialize, Serialize};

use geometry::{get_bbox_for_s_values, Box2D};

use crate::config::{ARC_BBOX_SAMPLES_PER_TURN, MIN_ARC_CURVATURE};
use crate::ref_line::sample_stations;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GeometryKind {
    Line,
    /// Constant curvature; positive turns left.
    Arc { curvature: f64 },
}

/// One plan-view piece of a reference line, starting at station `s0` at
/// `(x0, y0)` with heading `hdg0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadGeometry {
    pub s0: f64,
    pub x0: f64,
    pub y0: f64,
    pub hdg0: f64,
    pub length: f64,
    pub kind: GeometryKind,
}

impl RoadGeometry {
    pub fn line(s0: f64, x0: f64, y0: f64, hdg0: f64, length: f64) -> Self {
        Self {
            s0,
            x0,
            y0,
            hdg0,
            length,
            kind: GeometryKind::Line,
        }
    }

    pub fn arc(s0: f64, x0: f64, y0: f64, hdg0: f64, length: f64, curvature: f64) -> Self {
        Self {
            s0,
            x0,
            y0,
            hdg0,
            length,
            kind: GeometryKind::Arc { curvature },
        }
    }

    pub fn s_end(&self) -> f64 {
        self.s0 + self.length
    }

    /// Position in the geometry's own frame and the heading change at `ds`.
    fn local_pose(&self, ds: f64) -> (DVec2, f64) {
        match self.kind {
            GeometryKind::Arc { curvature } if curvature.abs() > MIN_ARC_CURVATURE => {
                let angle = ds * curvature;
                let local = DVec2::new(angle.sin(), 1.0 - angle.cos()) / curvature;
                (local, angle)
            }
            _ => (DVec2::new(ds, 0.0), 0.0),
        }
    }

    /// Plan-view position at station `s`. Stations outside the geometry
    /// extrapolate along the same curve.
    pub fn get_xy(&self, s: f64) -> DVec2 {
        let (local, _) = self.local_pose(s - self.s0);
        DVec2::new(self.x0, self.y0) + DVec2::from_angle(self.hdg0).rotate(local)
    }

    pub fn get_heading(&self, s: f64) -> f64 {
        let (_, dhdg) = self.local_pose(s - self.s0);
        self.hdg0 + dhdg
    }

    /// Sampled plan-view bounding box.
    pub fn get_bbox(&self) -> Option<Box2D> {
        let turns = match self.kind {
            GeometryKind::Line => 0.0,
            GeometryKind::Arc { curvature } => {
                (curvature * self.length).abs() / std::f64::consts::TAU
            }
        };
        let samples = (turns * ARC_BBOX_SAMPLES_PER_TURN).ceil().max(1.0);
        let step = self.length / samples;
        let s_values = sample_stations(self.s0, self.s_end(), step);
        get_bbox_for_s_values(&s_values, |s| self.get_xy(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_line_follows_heading() {
        let line = RoadGeometry::line(0.0, 1.0, 2.0, FRAC_PI_2, 10.0);
        let p = line.get_xy(4.0);
        assert!((p - DVec2::new(1.0, 6.0)).length() < 1e-12);
        assert_eq!(line.get_heading(4.0), FRAC_PI_2);
    }

    #[test]
    fn test_quarter_arc_endpoint() {
        let radius = 10.0;
        let arc = RoadGeometry::arc(5.0, 0.0, 0.0, 0.0, radius * FRAC_PI_2, 1.0 / radius);
        let end = arc.get_xy(arc.s_end());
        assert!((end - DVec2::new(10.0, 10.0)).length() < 1e-9, "got {end}");
        assert!((arc.get_heading(arc.s_end()) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_right_turning_arc() {
        let radius = 5.0;
        let arc = RoadGeometry::arc(0.0, 0.0, 0.0, 0.0, radius * PI, -1.0 / radius);
        let end = arc.get_xy(arc.s_end());
        assert!((end - DVec2::new(0.0, -10.0)).length() < 1e-9, "got {end}");
    }

    #[test]
    fn test_near_zero_curvature_is_line() {
        let arc = RoadGeometry::arc(0.0, 0.0, 0.0, 0.0, 10.0, 1e-15);
        assert_eq!(arc.get_xy(10.0), DVec2::new(10.0, 0.0));
    }

    #[test]
    fn test_half_circle_bbox() {
        let radius = 10.0;
        let arc = RoadGeometry::arc(0.0, 0.0, 0.0, 0.0, radius * PI, 1.0 / radius);
        let bbox = arc.get_bbox().unwrap();
        // Apex at (10, 10) is sampled exactly at a quarter turn
        assert!((bbox.max().x - 10.0).abs() < 1e-9);
        assert!((bbox.max().y - 20.0).abs() < 1e-9);
        assert!(bbox.min().x.abs() < 1e-9);
        assert!(bbox.min().y.abs() < 1e-9);
    }
}
