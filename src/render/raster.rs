//! Line rasterization: turning two grid points into a sequence of cells.
//!
//! The segment is sampled at `n + 1` evenly spaced parameters, where `n` is
//! the rounded euclidean distance between the endpoints. Each sample is
//! linearly interpolated per axis and rounded to the nearest cell with
//! [`f64::round`] (halves round away from zero). Both endpoints are always
//! present exactly; shallow segments may repeat a cell.

use crate::geometry::{Vec2f, Vec2i};

/// Euclidean distance between two grid points.
#[inline]
pub fn distance(a: Vec2i, b: Vec2i) -> f64 {
    let d = (a - b).as_f64();
    d.x.hypot(d.y)
}

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a.mul_add(1.0 - t, b * t)
}

/// Per-axis linear interpolation between two grid points.
#[inline]
pub fn vec_lerp(a: Vec2i, b: Vec2i, t: f64) -> Vec2f {
    let (a, b) = (a.as_f64(), b.as_f64());
    Vec2f::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Round a point to the nearest grid cell.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn vec_round(v: Vec2f) -> Vec2i {
    Vec2i::new(v.x.round() as i32, v.y.round() as i32)
}

/// Cells approximating the segment from `a` to `b`, in order.
///
/// Always returns `round(distance(a, b)) + 1` points, starting at `a` and
/// ending at `b`. Equal endpoints yield `[a]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn points_on_line(a: Vec2i, b: Vec2i) -> Vec<Vec2i> {
    let n = distance(a, b).round() as u32;
    let step = 1.0 / f64::from(n.max(1));

    (0..=n)
        .map(|i| vec_round(vec_lerp(a, b, step * f64::from(i))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Vec2i> {
        raw.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn test_single_point() {
        let a = Vec2i::new(4, 7);
        assert_eq!(points_on_line(a, a), vec![a]);
    }

    #[test]
    fn test_horizontal() {
        let line = points_on_line(Vec2i::new(3, 3), Vec2i::new(9, 3));
        assert_eq!(line, pts(&[(3, 3), (4, 3), (5, 3), (6, 3), (7, 3), (8, 3), (9, 3)]));
    }

    #[test]
    fn test_reversed_vertical() {
        let line = points_on_line(Vec2i::new(0, 4), Vec2i::new(0, 0));
        assert_eq!(line, pts(&[(0, 4), (0, 3), (0, 2), (0, 1), (0, 0)]));
    }

    #[test]
    fn test_diagonal_three_four_five() {
        let line = points_on_line(Vec2i::new(0, 0), Vec2i::new(3, 4));
        assert_eq!(line, pts(&[(0, 0), (1, 1), (1, 2), (2, 2), (2, 3), (3, 4)]));
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // t = 0.5 lands on (1.0, 0.5)
        let line = points_on_line(Vec2i::new(0, 0), Vec2i::new(2, 1));
        assert_eq!(line, pts(&[(0, 0), (1, 1), (2, 1)]));

        // and on (-1.0, -0.5) in the mirrored direction
        let line = points_on_line(Vec2i::new(0, 0), Vec2i::new(-2, -1));
        assert_eq!(line, pts(&[(0, 0), (-1, -1), (-2, -1)]));
    }

    #[test]
    fn test_shallow_segment_may_repeat_cells() {
        // distance 1.41 rounds to 1: just the endpoints
        let line = points_on_line(Vec2i::new(0, 0), Vec2i::new(1, 1));
        assert_eq!(line, pts(&[(0, 0), (1, 1)]));
    }

    #[test]
    fn test_length_and_endpoints_hold_everywhere() {
        for ax in -6..=6 {
            for ay in -6..=6 {
                for (bx, by) in [(0, 0), (5, 1), (-3, 7), (11, -4), (2, 2)] {
                    let (a, b) = (Vec2i::new(ax, ay), Vec2i::new(bx, by));
                    let line = points_on_line(a, b);
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let expected = distance(a, b).round() as usize + 1;
                    assert_eq!(line.len(), expected, "{a:?} -> {b:?}");
                    assert_eq!(line.first(), Some(&a));
                    assert_eq!(line.last(), Some(&b));
                }
            }
        }
    }

    #[test]
    fn test_helpers() {
        assert!((distance(Vec2i::new(0, 0), Vec2i::new(3, 4)) - 5.0).abs() < f64::EPSILON);
        assert!((lerp(2.0, 6.0, 0.25) - 3.0).abs() < f64::EPSILON);
        assert_eq!(vec_round(Vec2f::new(1.5, -1.5)), Vec2i::new(2, -2));
        assert_eq!(vec_round(vec_lerp(Vec2i::new(0, 0), Vec2i::new(10, 4), 0.5)), Vec2i::new(5, 2));
    }
}
