use std::collections::BTreeMap;
use std::sync::Arc;

use crate::lane::Lane;
use crate::road::{Road, RoadId};
use crate::road_set::RoadSet;

/// A station interval over which the lane layout of a road is fixed.
///
/// The owning road is recorded by id only and resolved through a
/// [`RoadSet`]. It is unset until [`crate::road::RoadBuilder::build`] takes
/// the section into a road.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneSection {
    pub s0: f64,
    pub(crate) road: Option<RoadId>,
    id_to_lane: BTreeMap<i32, Lane>,
}

impl LaneSection {
    pub fn new(s0: f64) -> Self {
        Self {
            s0,
            road: None,
            id_to_lane: BTreeMap::new(),
        }
    }

    pub fn with_lane(mut self, lane: Lane) -> Self {
        self.add_lane(lane);
        self
    }

    /// Insert a lane, replacing any lane with the same id.
    pub fn add_lane(&mut self, lane: Lane) {
        self.id_to_lane.insert(lane.id, lane);
    }

    pub fn road_id(&self) -> Option<RoadId> {
        self.road
    }

    /// Resolve the owning road. A section not yet built into a road has none.
    pub fn parent_road<'a>(&self, roads: &'a RoadSet) -> Option<&'a Arc<Road>> {
        roads.get(self.road?)
    }

    pub fn get_lane(&self, id: i32) -> Option<&Lane> {
        self.id_to_lane.get(&id)
    }

    /// Lanes in ascending id order (rightmost first).
    pub fn lanes(&self) -> impl DoubleEndedIterator<Item = &Lane> {
        self.id_to_lane.values()
    }

    /// Left lanes from the centre outwards.
    fn left_lanes(&self) -> impl Iterator<Item = &Lane> {
        self.id_to_lane.range(1..).map(|(_, lane)| lane)
    }

    /// Right lanes from the centre outwards.
    fn right_lanes(&self) -> impl Iterator<Item = &Lane> {
        self.id_to_lane.range(..0).rev().map(|(_, lane)| lane)
    }

    /// Lateral `(inner, outer)` borders of lane `id` at `s`, measured from the
    /// centre lane. Left lanes have `inner <= outer`, right lanes the reverse.
    pub fn lane_borders(&self, s: f64, id: i32) -> Option<(f64, f64)> {
        if id == 0 {
            return self.id_to_lane.get(&0).map(|_| (0.0, 0.0));
        }
        let (lanes, sign): (Vec<&Lane>, f64) = if id > 0 {
            (self.left_lanes().collect(), 1.0)
        } else {
            (self.right_lanes().collect(), -1.0)
        };
        let mut inner = 0.0;
        for lane in lanes {
            let outer = inner + sign * lane.width_at(s);
            if lane.id == id {
                return Some((inner, outer));
            }
            inner = outer;
        }
        None
    }

    pub fn inner_border(&self, s: f64, id: i32) -> Option<f64> {
        self.lane_borders(s, id).map(|(inner, _)| inner)
    }

    pub fn outer_border(&self, s: f64, id: i32) -> Option<f64> {
        self.lane_borders(s, id).map(|(_, outer)| outer)
    }

    /// Lane containing lateral offset `t` at station `s`.
    ///
    /// Left lanes own `[inner, outer)` and right lanes `(outer, inner]`, so
    /// `t = 0` belongs to lane 1 when there is one and to lane -1 otherwise.
    /// Offsets beyond the outermost border resolve to nothing.
    pub fn lane_at(&self, s: f64, t: f64) -> Option<&Lane> {
        if t.is_nan() {
            return None;
        }
        if t >= 0.0 {
            let mut inner = 0.0;
            for lane in self.left_lanes() {
                let outer = inner + lane.width_at(s);
                if t < outer {
                    return Some(lane);
                }
                inner = outer;
            }
            if t > 0.0 {
                return None;
            }
        }
        let mut inner = 0.0;
        for lane in self.right_lanes() {
            let outer = inner - lane.width_at(s);
            if t > outer {
                return Some(lane);
            }
            inner = outer;
        }
        None
    }
}
