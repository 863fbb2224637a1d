use bevy::math::DVec2;

use crate::box2d::Box2D;

/// Bounding box of `project` evaluated at every sample in `s_values`.
///
/// Only the sampled points are covered, not the continuous curve between
/// them; sample densely around curvature extrema. Returns `None` when there
/// are no samples.
pub fn get_bbox_for_s_values<T, F>(s_values: &[T], project: F) -> Option<Box2D>
where
    T: Copy,
    F: Fn(T) -> DVec2,
{
    let mut points = s_values.iter().map(|&s| project(s));
    let first = points.next()?;
    let (min, max) = points.fold((first, first), |(min, max), pt| (min.min(pt), max.max(pt)));
    Some(Box2D::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_empty_samples() {
        let s: Vec<f64> = vec![];
        assert!(get_bbox_for_s_values(&s, |v| DVec2::new(v, v)).is_none());
    }

    #[test]
    fn test_bbox_of_sampled_circle() {
        let s: Vec<f64> = (0..=64)
            .map(|i| i as f64 / 64.0 * std::f64::consts::TAU)
            .collect();
        let bbox = get_bbox_for_s_values(&s, |a| DVec2::new(a.cos(), a.sin())).unwrap();
        assert!((bbox.min().x + 1.0).abs() < 1e-9);
        assert!((bbox.max().x - 1.0).abs() < 1e-9);
        assert!((bbox.min().y + 1.0).abs() < 1e-9);
        assert!((bbox.max().y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bbox_misses_unsampled_extremum() {
        // Samples at 0 and pi skip the top of the arc at pi/2
        let s = [0.0_f64, std::f64::consts::PI];
        let bbox = get_bbox_for_s_values(&s, |a| DVec2::new(a.cos(), a.sin())).unwrap();
        assert!(bbox.max().y < 1e-9);
    }

    #[test]
    fn test_bbox_integer_parameter() {
        let s = [3_i32, -1, 7];
        let bbox = get_bbox_for_s_values(&s, |v| DVec2::new(v as f64, (v * v) as f64)).unwrap();
        assert_eq!(bbox.min(), DVec2::new(-1.0, 1.0));
        assert_eq!(bbox.max(), DVec2::new(7.0, 49.0));
    }
}
