use nalgebra::Rotation2;

use super::{Point2, Point3, Vector2, Vector3, EPSILON};

/// An oriented 2D line in a face's local frame.
///
/// `direction` is unit length; the line passes through `anchor`. The
/// interior side is the one consistent with the owning plane's normal.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub direction: Vector2,
    pub anchor: Point2,
}

impl Line {
    /// Creates a line from a unit direction and an anchor point.
    #[must_use]
    pub fn new(direction: Vector2, anchor: Point2) -> Self {
        Self { direction, anchor }
    }
}

/// Signed parametric distance along `query` at which it crosses `other`.
///
/// Both lines are rotated into a frame where `other`'s direction is the
/// x-axis; `query` then crosses `other` where its rotated y-component
/// cancels the rotated offset. Returns `None` if the lines are parallel
/// within [`EPSILON`]; callers must treat that as "constraint does not
/// apply here", not as an error.
#[must_use]
pub fn line_intersection(query: &Line, other: &Line) -> Option<f64> {
    let angle = other.direction.y.atan2(other.direction.x);
    let rotation = Rotation2::new(-angle);
    let rotated_direction = rotation * query.direction;
    if rotated_direction.y.abs() < EPSILON {
        return None;
    }
    let rotated_delta = rotation * (other.anchor - query.anchor);
    Some(rotated_delta.y / rotated_direction.y)
}

/// Crossing of the edge `p1 -> p2` (z ignored) with `line`.
///
/// Returns `(distance, length, direction)`: the signed distance from `p1`
/// along the edge at which the edge's carrier line meets `line` (`None`
/// when parallel or the edge is degenerate), the edge length, and the
/// normalized edge direction.
#[must_use]
pub fn edge_crossing(p1: &Point3, p2: &Point3, line: &Line) -> (Option<f64>, f64, Vector3) {
    let delta = p2 - p1;
    let length = delta.norm();
    if length < f64::EPSILON {
        return (None, 0.0, Vector3::zeros());
    }
    let direction = delta / length;
    let edge = Line::new(direction.xy(), Point2::new(p1.x, p1.y));
    (line_intersection(&edge, line), length, direction)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_lines_cross() {
        let query = Line::new(Vector2::new(1.0, 0.0), Point2::new(0.0, 0.0));
        let other = Line::new(Vector2::new(0.0, 1.0), Point2::new(2.0, 5.0));
        let d = line_intersection(&query, &other).unwrap();
        assert!((d - 2.0).abs() < EPSILON);
    }

    #[test]
    fn parallel_lines_return_none() {
        let query = Line::new(Vector2::new(1.0, 0.0), Point2::new(0.0, 0.0));
        let other = Line::new(Vector2::new(-1.0, 0.0), Point2::new(0.0, 1.0));
        assert!(line_intersection(&query, &other).is_none());
    }

    #[test]
    fn diagonal_crossing_distance() {
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        let query = Line::new(Vector2::new(inv_sqrt2, inv_sqrt2), Point2::new(0.0, 0.0));
        let other = Line::new(Vector2::new(1.0, 0.0), Point2::new(0.0, 1.0));
        let d = line_intersection(&query, &other).unwrap();
        assert!((d - 2.0_f64.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn edge_crossing_reports_length_and_direction() {
        let line = Line::new(Vector2::new(0.0, 1.0), Point2::new(1.0, 0.0));
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(4.0, 0.0, 0.0);
        let (d, length, direction) = edge_crossing(&a, &b, &line);
        assert!((d.unwrap() - 1.0).abs() < EPSILON);
        assert!((length - 4.0).abs() < EPSILON);
        assert!((direction.x - 1.0).abs() < EPSILON);
    }

    #[test]
    fn degenerate_edge_is_parallel() {
        let line = Line::new(Vector2::new(0.0, 1.0), Point2::new(1.0, 0.0));
        let a = Point3::new(2.0, 3.0, 0.0);
        let (d, length, _) = edge_crossing(&a, &a, &line);
        assert!(d.is_none());
        assert!(length.abs() < EPSILON);
    }
}
