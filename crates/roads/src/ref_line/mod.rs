//! Reference lines: the station-parametrized centre curve of a road.
//!
//! [`ReferenceLine`] is the narrow interface the road engine consumes.
//! [`RefLine`] is the plan-view implementation built from line and arc
//! pieces plus an elevation profile.

mod plan_view;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use bevy::log::debug;
use bevy::math::{DVec2, DVec3};
use ordered_float::OrderedFloat;

use geometry::{extract_keys, golden_section_search, rdp, Box2D};

use crate::config::{
    DEFAULT_SAMPLE_STEP, DEFAULT_SIMPLIFY_EPSILON, MAX_SAMPLES, REF_LINE_MATCH_TOLERANCE,
};
use crate::spline::CubicSpline;

pub use plan_view::{GeometryKind, RoadGeometry};

/// Position and heading of a road's centre curve as a function of station.
pub trait ReferenceLine: fmt::Debug + Send + Sync {
    fn length(&self) -> f64;

    /// World position and plan-view heading (radians, CCW from +x) at `s`.
    fn position_and_heading(&self, s: f64) -> (DVec3, f64);
}

/// Stations from `s_start` to `s_end` every `step`, always ending exactly at
/// `s_end`. An empty or inverted interval yields just `s_start`. Steps finer
/// than `span / MAX_SAMPLES` are coarsened to that.
pub fn sample_stations(s_start: f64, s_end: f64, step: f64) -> Vec<f64> {
    if !(s_end > s_start) {
        return vec![s_start];
    }
    let span = s_end - s_start;
    let step = if step > 0.0 { step.min(span) } else { span };
    let step = step.max(span / MAX_SAMPLES as f64);
    let n = (span / step).ceil() as usize;
    let mut stations: Vec<f64> = (0..n).map(|i| s_start + i as f64 * step).collect();
    stations.push(s_end);
    stations
}

#[derive(Debug, Clone, Default)]
pub struct RefLine {
    pub length: f64,
    pub elevation_profile: CubicSpline,
    s0_to_geometry: BTreeMap<OrderedFloat<f64>, RoadGeometry>,
}

impl RefLine {
    pub fn new(length: f64) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    pub fn with_geometry(mut self, geometry: RoadGeometry) -> Self {
        self.add_geometry(geometry);
        self
    }

    pub fn with_elevation(mut self, elevation_profile: CubicSpline) -> Self {
        self.elevation_profile = elevation_profile;
        self
    }

    /// Insert a plan-view piece, replacing any piece with the same `s0`.
    pub fn add_geometry(&mut self, geometry: RoadGeometry) {
        self.s0_to_geometry.insert(OrderedFloat(geometry.s0), geometry);
    }

    pub fn geometries(&self) -> impl Iterator<Item = &RoadGeometry> {
        self.s0_to_geometry.values()
    }

    pub fn geometry_starts(&self) -> BTreeSet<OrderedFloat<f64>> {
        extract_keys(&self.s0_to_geometry)
    }

    /// Piece covering `s`; stations before the first piece use the first.
    pub fn get_geometry(&self, s: f64) -> Option<&RoadGeometry> {
        self.s0_to_geometry
            .range(..=OrderedFloat(s))
            .next_back()
            .or_else(|| self.s0_to_geometry.iter().next())
            .map(|(_, geometry)| geometry)
    }

    pub fn get_xy(&self, s: f64) -> DVec2 {
        self.get_geometry(s).map_or(DVec2::ZERO, |g| g.get_xy(s))
    }

    pub fn get_xyz(&self, s: f64) -> DVec3 {
        self.get_xy(s).extend(self.elevation_profile.get(s))
    }

    pub fn get_heading(&self, s: f64) -> f64 {
        self.get_geometry(s).map_or(0.0, |g| g.get_heading(s))
    }

    /// Station whose plan-view point is closest to `(x, y)`.
    ///
    /// Each piece is searched independently with a golden-section search on
    /// the squared distance and the closest result wins. `None` when the line
    /// has no geometry.
    pub fn match_point(&self, x: f64, y: f64) -> Option<f64> {
        let target = DVec2::new(x, y);
        let best = self
            .geometries()
            .map(|g| {
                let s = golden_section_search(
                    |s| g.get_xy(s).distance_squared(target),
                    g.s0,
                    g.s_end(),
                    REF_LINE_MATCH_TOLERANCE,
                );
                (g.get_xy(s).distance_squared(target), s)
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, s)| s);
        if best.is_none() {
            debug!("Reference line has no geometry; cannot match ({x}, {y})");
        }
        best
    }

    /// Polyline of the line between two stations, sampled every `step` and
    /// simplified to within `epsilon`.
    pub fn get_line(&self, s_start: f64, s_end: f64, step: f64, epsilon: f64) -> Vec<DVec3> {
        let points: Vec<DVec3> = sample_stations(s_start, s_end, step)
            .into_iter()
            .map(|s| self.get_xyz(s))
            .collect();
        rdp(&points, epsilon)
    }

    /// Whole line with the default sampling step and simplification.
    pub fn get_polyline(&self) -> Vec<DVec3> {
        self.get_line(0.0, self.length, DEFAULT_SAMPLE_STEP, DEFAULT_SIMPLIFY_EPSILON)
    }

    /// Union of the plan-view bounding boxes of all pieces.
    pub fn get_bbox(&self) -> Option<Box2D> {
        self.geometries()
            .filter_map(RoadGeometry::get_bbox)
            .reduce(|acc, bbox| acc.union(&bbox))
    }
}

impl ReferenceLine for RefLine {
    fn length(&self) -> f64 {
        self.length
    }

    fn position_and_heading(&self, s: f64) -> (DVec3, f64) {
        (self.get_xyz(s), self.get_heading(s))
    }
}
