use crate::geometry::polygon::signed_area;
use crate::geometry::Face;

/// Total exposed area of a face: the unsigned shoelace area summed over
/// its polygons. Polygons live in the face's local plane, so no
/// tessellation is needed.
#[must_use]
pub fn face_area(face: &Face) -> f64 {
    face.polygons
        .iter()
        .map(|polygon| signed_area(polygon).abs())
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::geometry::Shape;
    use crate::math::Point3;
    use crate::operations::creation::make_cuboid;
    use crate::operations::decompose::decompose;
    use crate::scene::Scene;

    use super::*;

    #[test]
    fn cube_faces_have_expected_area() {
        let cube = make_cuboid(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
            .unwrap();
        let scene = Scene::new(vec![Shape::new(cube)]).unwrap();
        let faces = decompose(&scene).unwrap();
        for face in &faces {
            assert_relative_eq!(face_area(face), 4.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn subdivided_face_area_is_preserved() {
        // a cavity splits the outer faces into many cells whose areas
        // still sum to the full side
        let outer = make_cuboid(Point3::new(-2.0, -2.0, -2.0), Point3::new(2.0, 2.0, 2.0))
            .unwrap();
        let hole = make_cuboid(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
            .unwrap();
        let scene = Scene::new(vec![Shape::with_subtractions(outer, vec![hole])]).unwrap();
        let faces = decompose(&scene).unwrap();
        let outer_area: f64 = faces
            .iter()
            .filter(|face| {
                let anchor = face.to_world.transform_point(&Point3::origin());
                anchor.coords.norm() > 1.5
            })
            .map(face_area)
            .sum();
        assert_relative_eq!(outer_area, 6.0 * 16.0, epsilon = 1e-6);
    }
}
