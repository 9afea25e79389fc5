use crate::error::Result;
use crate::math::{Point3, EPSILON};
use crate::scene::{ConvexShapeId, Scene};

/// Decides whether a leaf cell with world-space centroid `point` is
/// exposed surface.
///
/// `shape_index` is the scene index of the shape being processed and
/// `source` the id of the convex shape (addition or subtraction) whose
/// plane the cell lies on. The cell must pass the test against every
/// shape in the scene:
///
/// - against its own addition, only the shape's own subtractions can
///   hide it;
/// - against its own shape while the cell sits on a subtraction plane,
///   it survives only inside the thin shell between the inset and outset
///   copies of the subtractions (the cavity wall);
/// - against any other shape, it survives if that shape's subtractions
///   re-expose it or the shape's addition does not cover it.
///
/// The containment threshold flips sign on `shape_index > j`: of two
/// shapes sharing a boundary plane, the higher-indexed one tests with
/// the loose (positive) epsilon and loses its face, so exactly one of
/// two coincident faces survives. Downstream rendering depends on this
/// exact tie-break.
pub fn cell_is_visible(
    scene: &Scene,
    shape_index: usize,
    source: ConvexShapeId,
    point: &Point3,
) -> Result<bool> {
    for (j, check) in scene.shapes().iter().enumerate() {
        let threshold = if shape_index > j { EPSILON } else { -EPSILON };

        let mut inset_contains = false;
        for &subtraction in &check.subtractions {
            if scene.convex(subtraction)?.contains_point(point, threshold) {
                inset_contains = true;
                break;
            }
        }

        let visible = if source == check.addition {
            !inset_contains
        } else if j == shape_index {
            let addition_contains = scene
                .convex(check.addition)?
                .contains_point(point, EPSILON);
            let mut outset_contains = false;
            for &subtraction in &check.subtractions {
                if scene.convex(subtraction)?.contains_point(point, EPSILON) {
                    outset_contains = true;
                    break;
                }
            }
            addition_contains && !inset_contains && outset_contains
        } else {
            inset_contains
                || !scene
                    .convex(check.addition)?
                    .contains_point(point, threshold)
        };

        if !visible {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::geometry::Shape;
    use crate::operations::creation::make_cuboid;

    use super::*;

    fn two_cube_scene() -> Scene {
        let left = make_cuboid(Point3::new(-2.0, -1.0, -1.0), Point3::new(0.0, 1.0, 1.0))
            .unwrap();
        let right = make_cuboid(Point3::new(0.0, -1.0, -1.0), Point3::new(2.0, 1.0, 1.0))
            .unwrap();
        Scene::new(vec![Shape::new(left), Shape::new(right)]).unwrap()
    }

    #[test]
    fn exposed_point_is_visible() {
        let scene = two_cube_scene();
        let source = scene.shapes()[0].addition;
        // centroid of the left cube's -x face
        let point = Point3::new(-2.0, 0.0, 0.0);
        assert!(cell_is_visible(&scene, 0, source, &point).unwrap());
    }

    #[test]
    fn point_buried_in_another_shape_is_hidden() {
        let scene = two_cube_scene();
        let source = scene.shapes()[1].addition;
        // a point on the right cube's -x plane, strictly inside the
        // shared boundary region tested with the loose epsilon
        let point = Point3::new(0.0, 0.0, 0.0);
        assert!(!cell_is_visible(&scene, 1, source, &point).unwrap());
    }

    #[test]
    fn coincident_faces_resolve_to_the_lower_index() {
        let scene = two_cube_scene();
        let point = Point3::new(0.0, 0.0, 0.0);
        let left_source = scene.shapes()[0].addition;
        let right_source = scene.shapes()[1].addition;
        assert!(cell_is_visible(&scene, 0, left_source, &point).unwrap());
        assert!(!cell_is_visible(&scene, 1, right_source, &point).unwrap());
    }
}
