//! Road coordinate engine.
//!
//! A [`Road`] maps road coordinates `(s, t, z)` (station along the reference
//! line, lateral offset, height) to world space and answers which
//! lane-section and lane a station/offset pair falls into. Roads are built
//! once through [`RoadBuilder`] and are immutable afterwards, so a shared
//! `Arc<Road>` can be queried from any number of threads.


use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use bevy::log::{debug, warn};
use bevy::math::{DAffine3, DVec3};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use geometry::{extract_keys, generate_mesh_from_borders, get_bbox_for_s_values, Box2D, Line3D, Mesh3D};

use crate::config::REF_LINE_LENGTH_TOLERANCE;
use crate::error::RoadError;
use crate::lane::Lane;
use crate::lane_section::LaneSection;
use crate::ref_line::{sample_stations, ReferenceLine};
use crate::spline::CubicSpline;

/// Stable road identifier, unique within a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RoadId(pub i32);

impl From<i32> for RoadId {
    #[inline]
    fn from(id: i32) -> Self {
        Self(id)
    }
}

#[derive(Debug)]
pub struct Road {
    id: RoadId,
    junction: Option<i32>,
    length: f64,
    lane_offset: CubicSpline,
    superelevation: CubicSpline,
    ref_line: Arc<dyn ReferenceLine>,
    /// Keys are strictly increasing, start at 0 and lie in `[0, length)`.
    s0_to_lanesection: BTreeMap<OrderedFloat<f64>, LaneSection>,
}

/// Collects a road's parts and validates them in [`RoadBuilder::build`].
#[derive(Debug)]
pub struct RoadBuilder {
    id: RoadId,
    length: f64,
    junction: Option<i32>,
    lane_offset: CubicSpline,
    superelevation: CubicSpline,
    ref_line: Arc<dyn ReferenceLine>,
    lanesections: Vec<LaneSection>,
}

impl RoadBuilder {
    /// Junction this road belongs to. Negative ids mean "no junction".
    pub fn junction(mut self, junction: i32) -> Self {
        self.junction = (junction >= 0).then_some(junction);
        self
    }

    pub fn lane_offset(mut self, lane_offset: CubicSpline) -> Self {
        self.lane_offset = lane_offset;
        self
    }

    pub fn superelevation(mut self, superelevation: CubicSpline) -> Self {
        self.superelevation = superelevation;
        self
    }

    pub fn lanesection(mut self, lanesection: LaneSection) -> Self {
        self.lanesections.push(lanesection);
        self
    }

    pub fn build(self) -> Result<Road, RoadError> {
        let id = self.id;
        self.try_build().inspect_err(|err| warn!("Rejecting road {}: {err}", id.0))
    }

    fn try_build(self) -> Result<Road, RoadError> {
        let RoadBuilder {
            id,
            length,
            junction,
            lane_offset,
            superelevation,
            ref_line,
            lanesections,
        } = self;

        if !length.is_finite() || length < 0.0 {
            return Err(RoadError::InvalidLength { road: id, length });
        }

        let ref_line_length = ref_line.length();
        if !(ref_line_length + REF_LINE_LENGTH_TOLERANCE >= length) {
            return Err(RoadError::RefLineTooShort {
                road: id,
                ref_line_length,
                length,
            });
        }

        let mut s0_to_lanesection = BTreeMap::new();
        for mut lanesection in lanesections {
            let s0 = lanesection.s0;
            if !(0.0..length).contains(&s0) {
                return Err(RoadError::LaneSectionOutOfRange { road: id, s0, length });
            }
            lanesection.road = Some(id);
            if s0_to_lanesection.insert(OrderedFloat(s0), lanesection).is_some() {
                return Err(RoadError::DuplicateLaneSection { road: id, s0 });
            }
        }

        if let Some(first) = s0_to_lanesection.keys().next() {
            if first.0 != 0.0 {
                return Err(RoadError::MissingStartSection {
                    road: id,
                    first_s0: first.0,
                });
            }
        }

        Ok(Road {
            id,
            junction,
            length,
            lane_offset,
            superelevation,
            ref_line,
            s0_to_lanesection,
        })
    }
}

impl Road {
    pub fn builder(id: RoadId, length: f64, ref_line: Arc<dyn ReferenceLine>) -> RoadBuilder {
        RoadBuilder {
            id,
            length,
            junction: None,
            lane_offset: CubicSpline::new(),
            superelevation: CubicSpline::new(),
            ref_line,
            lanesections: Vec::new(),
        }
    }

    pub fn id(&self) -> RoadId {
        self.id
    }

    pub fn junction(&self) -> Option<i32> {
        self.junction
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn lane_offset(&self) -> &CubicSpline {
        &self.lane_offset
    }

    pub fn superelevation(&self) -> &CubicSpline {
        &self.superelevation
    }

    pub fn ref_line(&self) -> &Arc<dyn ReferenceLine> {
        &self.ref_line
    }

    // -----------------------------------------------------------------------
    // Lane-section and lane lookup
    // -----------------------------------------------------------------------

    /// Section whose interval `[s0_k, s0_{k+1})` contains `s`.
    ///
    /// Stations outside `[0, length)` (including `length` itself and NaN)
    /// have no section.
    pub fn get_lanesection(&self, s: f64) -> Option<&LaneSection> {
        if !(0.0..self.length).contains(&s) {
            return None;
        }
        self.s0_to_lanesection
            .range(..=OrderedFloat(s))
            .next_back()
            .map(|(_, lanesection)| lanesection)
    }

    pub fn get_lanesection_s0(&self, s: f64) -> Option<f64> {
        self.get_lanesection(s).map(|lanesection| lanesection.s0)
    }

    /// End station of the section starting at `s0`: the next section's start
    /// or the road length.
    pub fn get_lanesection_end(&self, s0: f64) -> f64 {
        use std::ops::Bound::{Excluded, Unbounded};
        self.s0_to_lanesection
            .range((Excluded(OrderedFloat(s0)), Unbounded))
            .next()
            .map_or(self.length, |(next, _)| next.0)
    }

    /// All sections in station order.
    pub fn get_lanesections(&self) -> impl DoubleEndedIterator<Item = &LaneSection> + ExactSizeIterator {
        self.s0_to_lanesection.values()
    }

    pub fn lanesection_starts(&self) -> BTreeSet<OrderedFloat<f64>> {
        extract_keys(&self.s0_to_lanesection)
    }

    /// Lane containing lateral offset `t` at station `s`, with `t` measured
    /// from the lane-offset centre line as in [`Road::get_xyz`].
    pub fn get_lane(&self, s: f64, t: f64) -> Option<&Lane> {
        self.get_lanesection(s)?.lane_at(s, t)
    }

    // -----------------------------------------------------------------------
    // Coordinate transform
    // -----------------------------------------------------------------------

    /// Local-to-world frame at station `s`.
    ///
    /// Local axes are `x` along the heading, `y` lateral (left positive) and
    /// `z` up, with `y`/`z` rolled about `x` by the superelevation angle. The
    /// origin sits on the lane-offset centre line.
    pub fn get_transformation_matrix(&self, s: f64) -> DAffine3 {
        let (p0, hdg) = self.ref_line.position_and_heading(s);
        let (sin_h, cos_h) = hdg.sin_cos();
        let (sin_t, cos_t) = self.superelevation.get(s).sin_cos();

        let e_s = DVec3::new(cos_h, sin_h, 0.0);
        let e_t = DVec3::new(-sin_h * cos_t, cos_h * cos_t, sin_t);
        let e_h = e_s.cross(e_t);
        let origin = p0 + e_t * self.lane_offset.get(s);

        DAffine3::from_cols(e_s, e_t, e_h, origin)
    }

    /// World position of road coordinates `(s, t, z)`.
    pub fn get_xyz(&self, s: f64, t: f64, z: f64) -> DVec3 {
        self.get_transformation_matrix(s)
            .transform_point3(DVec3::new(0.0, t, z))
    }

    // -----------------------------------------------------------------------
    // Derived geometry
    // -----------------------------------------------------------------------

    /// Inner and outer border polylines of a lane across its whole section,
    /// sampled every `step` metres.
    fn lane_border_lines(
        &self,
        s0: f64,
        lane_id: i32,
        step: f64,
    ) -> Result<(Line3D, Line3D), RoadError> {
        let lanesection = self
            .s0_to_lanesection
            .get(&OrderedFloat(s0))
            .ok_or(RoadError::UnknownLaneSection { road: self.id, s0 })?;
        if lanesection.get_lane(lane_id).is_none() {
            debug!("Road {}: lane {lane_id} not in section s0={s0}", self.id.0);
            return Err(RoadError::UnknownLane {
                road: self.id,
                s0,
                lane_id,
            });
        }

        let s_end = self.get_lanesection_end(s0);
        let mut inner = Line3D::new();
        let mut outer = Line3D::new();
        for s in sample_stations(s0, s_end, step) {
            let Some((t_inner, t_outer)) = lanesection.lane_borders(s, lane_id) else {
                continue;
            };
            inner.push(self.get_xyz(s, t_inner, 0.0));
            outer.push(self.get_xyz(s, t_outer, 0.0));
        }
        Ok((inner, outer))
    }

    /// One border of a lane across its section: the outer border when
    /// `outer` is set, the inner border otherwise.
    pub fn get_lane_border_line(
        &self,
        s0: f64,
        lane_id: i32,
        step: f64,
        outer: bool,
    ) -> Result<Line3D, RoadError> {
        let (inner_line, outer_line) = self.lane_border_lines(s0, lane_id, step)?;
        Ok(if outer { outer_line } else { inner_line })
    }

    /// Triangulated surface of a lane across its section.
    pub fn get_lane_mesh(&self, s0: f64, lane_id: i32, step: f64) -> Result<Mesh3D, RoadError> {
        let (inner, outer) = self.lane_border_lines(s0, lane_id, step)?;
        Ok(generate_mesh_from_borders(&inner, &outer)?)
    }

    /// Surfaces of every non-centre lane of a section merged into one mesh.
    pub fn get_lanesection_mesh(&self, s0: f64, step: f64) -> Result<Mesh3D, RoadError> {
        let lanesection = self
            .s0_to_lanesection
            .get(&OrderedFloat(s0))
            .ok_or(RoadError::UnknownLaneSection { road: self.id, s0 })?;
        let mut mesh = Mesh3D::default();
        for lane in lanesection.lanes().filter(|lane| lane.id != 0) {
            mesh.add_mesh(&self.get_lane_mesh(s0, lane.id, step)?);
        }
        Ok(mesh)
    }

    /// Lane surfaces of the whole road.
    pub fn get_road_mesh(&self, step: f64) -> Result<Mesh3D, RoadError> {
        let mut mesh = Mesh3D::default();
        for s0 in self.s0_to_lanesection.keys() {
            mesh.add_mesh(&self.get_lanesection_mesh(s0.0, step)?);
        }
        Ok(mesh)
    }

    /// Plan-view bounding box of the reference line sampled every `step`.
    pub fn get_ref_line_bbox(&self, step: f64) -> Option<Box2D> {
        let s_values = sample_stations(0.0, self.length, step);
        get_bbox_for_s_values(&s_values, |s| {
            self.ref_line.position_and_heading(s).0.truncate()
        })
    }
}
