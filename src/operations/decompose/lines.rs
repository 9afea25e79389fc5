use crate::geometry::Plane;
use crate::math::line_2d::Line;
use crate::math::{Matrix4, Point2, Vector3, EPSILON};

/// Projects `planes` into a face's local frame as oriented 2D lines.
///
/// Each plane's intersection with the face plane (local z = 0) becomes a
/// [`Line`]; planes whose rotated normal is within [`EPSILON`] of the
/// local z axis do not bound the face and are skipped.
///
/// `inverse_rotate` and `inverse` are the inverses of the face's
/// rotation-only and full local-to-world transforms.
pub fn project_planes_to_lines(
    planes: &[Plane],
    inverse_rotate: &Matrix4,
    inverse: &Matrix4,
) -> Vec<Line> {
    planes
        .iter()
        .filter_map(|plane| {
            let rotated_normal = inverse_rotate.transform_vector(plane.normal());
            if rotated_normal.z.abs() > 1.0 - EPSILON {
                return None;
            }
            let rotated_anchor = inverse.transform_point(plane.anchor());
            let intersection_direction = rotated_normal.cross(&Vector3::z()).normalize();
            let plane_direction = intersection_direction.cross(&rotated_normal).normalize();
            // slide the rotated anchor along the plane down to z = 0
            let proportion = rotated_anchor.z / plane_direction.z;
            let anchor = rotated_anchor - plane_direction * proportion;
            Some(Line::new(
                intersection_direction.xy(),
                Point2::new(anchor.x, anchor.y),
            ))
        })
        .collect()
}
