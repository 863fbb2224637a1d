//! Ramer-Douglas-Peucker polyline simplification, generic over dimension.
//!
//! Splits are driven by an explicit work stack. The output is the same as the
//! recursive formulation: both halves of every split share the split point,
//! and ranges within `epsilon` collapse to their endpoints.

use bevy::math::{DVec2, DVec3};

/// A point in a fixed-dimension real vector space.
pub trait PolylinePoint: Copy {
    /// `self - origin`
    fn delta(self, origin: Self) -> Self;
    fn dot(self, rhs: Self) -> f64;
    fn scaled(self, factor: f64) -> Self;

    fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }
}

macro_rules! impl_polyline_point_glam {
    ($($ty:ty),*) => {
        $(
            impl PolylinePoint for $ty {
                #[inline]
                fn delta(self, origin: Self) -> Self {
                    self - origin
                }

                #[inline]
                fn dot(self, rhs: Self) -> f64 {
                    <$ty>::dot(self, rhs)
                }

                #[inline]
                fn scaled(self, factor: f64) -> Self {
                    self * factor
                }
            }
        )*
    };
}

impl_polyline_point_glam!(DVec2, DVec3);

impl<const N: usize> PolylinePoint for [f64; N] {
    #[inline]
    fn delta(self, origin: Self) -> Self {
        std::array::from_fn(|i| self[i] - origin[i])
    }

    #[inline]
    fn dot(self, rhs: Self) -> f64 {
        self.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
    }

    #[inline]
    fn scaled(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }
}

/// Distance from `pt` to the line through `origin` along unit `dir`.
/// A zero `dir` degrades to the distance from `origin`.
fn perpendicular_distance<P: PolylinePoint>(pt: P, origin: P, dir: P) -> f64 {
    let pv = pt.delta(origin);
    let proj = dir.scaled(pv.dot(dir));
    pv.delta(proj).norm()
}

/// Simplify the whole polyline.
pub fn rdp<P: PolylinePoint>(points: &[P], epsilon: f64) -> Vec<P> {
    rdp_strided(points, epsilon, 0, 1, None)
}

/// Simplify the points `start_idx, start_idx + step, ...` below `end_idx`
/// (defaults to `points.len()`).
///
/// The first and last strided points are always kept. A range holding a
/// single point returns it unchanged; an empty range returns nothing.
pub fn rdp_strided<P: PolylinePoint>(
    points: &[P],
    epsilon: f64,
    start_idx: usize,
    step: usize,
    end_idx: Option<usize>,
) -> Vec<P> {
    let step = step.max(1);
    let end_idx = end_idx.map_or(points.len(), |e| e.min(points.len()));
    if start_idx >= end_idx {
        return Vec::new();
    }
    let last_idx = (end_idx - start_idx - 1) / step * step + start_idx;
    if last_idx == start_idx {
        return vec![points[start_idx]];
    }

    let mut keep = vec![false; points.len()];
    keep[start_idx] = true;
    keep[last_idx] = true;

    let mut stack = vec![(start_idx, last_idx)];
    while let Some((lo, hi)) = stack.pop() {
        let mut dir = points[hi].delta(points[lo]);
        let mag = dir.norm();
        if mag > 0.0 {
            dir = dir.scaled(1.0 / mag);
        }

        let mut d_max = 0.0;
        let mut d_max_idx = lo;
        for idx in (lo + step..hi).step_by(step) {
            let d = perpendicular_distance(points[idx], points[lo], dir);
            if d > d_max {
                d_max = d;
                d_max_idx = idx;
            }
        }

        if d_max > epsilon {
            keep[d_max_idx] = true;
            stack.push((d_max_idx, hi));
            stack.push((lo, d_max_idx));
        }
    }

    (start_idx..=last_idx)
        .step_by(step)
        .filter(|&idx| keep[idx])
        .map(|idx| points[idx])
        .collect()
}
