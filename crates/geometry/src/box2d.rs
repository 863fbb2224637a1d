use bevy::math::DVec2;
use serde::Serialize;

/// Axis-aligned 2D bounding box.
///
/// Only constructible from two corners, so `min <= max` holds componentwise
/// and the cached center/extent always agree with the corners. Zero-area
/// boxes (a single point or a segment) are valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Box2D {
    min: DVec2,
    max: DVec2,
    center: DVec2,
    width: f64,
    height: f64,
}

impl Box2D {
    /// Build a box spanning two arbitrary corners.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            min,
            max,
            center: (min + max) * 0.5,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    pub fn min(&self) -> DVec2 {
        self.min
    }

    pub fn max(&self) -> DVec2 {
        self.max
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether `pt` lies inside or on the boundary.
    pub fn contains(&self, pt: DVec2) -> bool {
        pt.cmpge(self.min).all() && pt.cmple(self.max).all()
    }

    /// Distance from `pt` to the box; zero for points inside.
    pub fn get_distance(&self, pt: DVec2) -> f64 {
        let nearest = pt.clamp(self.min, self.max);
        (pt - nearest).length()
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Box2D) -> Box2D {
        Box2D::new(self.min.min(other.min), self.max.max(other.max))
    }
}
