use crate::math::line_2d::{line_intersection, Line};
use crate::math::{Point2, Point3, Vector2, Vector3, EPSILON};

/// An ordered convex loop of points with z = 0 in some face's local
/// frame, wound consistently within one face.
pub type ConvexPolygon = Vec<Point3>;

/// Removes points that coincide with their successor within [`EPSILON`].
#[must_use]
pub fn dedupe_polygon(polygon: &[Point3]) -> ConvexPolygon {
    polygon
        .iter()
        .enumerate()
        .filter(|(i, point)| {
            let next = &polygon[(i + 1) % polygon.len()];
            (*point - next).norm() > EPSILON
        })
        .map(|(_, point)| *point)
        .collect()
}

/// Average of the polygon's vertices, z forced to the local plane.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn polygon_centroid(polygon: &[Point3]) -> Point3 {
    let mut sum = Vector3::zeros();
    for point in polygon {
        sum += point.coords;
    }
    let mut centroid = Point3::from(sum / polygon.len() as f64);
    centroid.z = 0.0;
    centroid
}

/// Signed area of the polygon in the local xy plane (shoelace formula).
///
/// Positive for counter-clockwise winding.
#[must_use]
pub fn signed_area(polygon: &[Point3]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += polygon[i].x * polygon[j].y - polygon[j].x * polygon[i].y;
    }
    sum * 0.5
}

/// Parity test for point-in-polygon in the local xy plane.
///
/// Casts a ray along +y from `point` and counts the polygon edges it
/// crosses; an odd count means the point is inside.
#[must_use]
pub fn polygon_contains_point(polygon: &[Point3], point: &Point3) -> bool {
    let ray = Line::new(Vector2::new(0.0, 1.0), Point2::new(point.x, point.y));
    let mut crossings = 0_u32;
    for (i, p1) in polygon.iter().enumerate() {
        let p2 = &polygon[(i + 1) % polygon.len()];
        let delta = p2 - p1;
        let length = delta.norm();
        if length < f64::EPSILON {
            continue;
        }
        let direction = delta / length;
        let edge = Line::new(direction.xy(), Point2::new(p1.x, p1.y));
        let along_ray = line_intersection(&ray, &edge);
        let along_edge = line_intersection(&edge, &ray);
        if let (Some(ray_distance), Some(edge_distance)) = (along_ray, along_edge) {
            if ray_distance > 0.0 && edge_distance > 0.0 && edge_distance < length {
                crossings += 1;
            }
        }
    }
    crossings % 2 == 1
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn unit_square() -> ConvexPolygon {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn center_is_inside_unit_square() {
        assert!(polygon_contains_point(&unit_square(), &Point3::new(0.5, 0.5, 0.0)));
    }

    #[test]
    fn far_point_is_outside_unit_square() {
        assert!(!polygon_contains_point(&unit_square(), &Point3::new(2.0, 2.0, 0.0)));
    }

    #[test]
    fn centroid_of_square() {
        let centroid = polygon_centroid(&unit_square());
        assert_relative_eq!(centroid.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(centroid.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn dedupe_drops_coincident_points() {
        let mut polygon = unit_square();
        polygon.insert(1, Point3::new(1e-5, 1e-5, 0.0));
        let deduped = dedupe_polygon(&polygon);
        assert_eq!(deduped.len(), 4);
    }

    #[test]
    fn signed_area_of_ccw_square_is_positive() {
        assert_relative_eq!(signed_area(&unit_square()), 1.0, epsilon = 1e-12);
    }
}
