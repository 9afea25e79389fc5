use crate::math::{Matrix4, Point3, Vector3};

use super::polygon::ConvexPolygon;

/// The exposed surface found on one supporting plane: the plane's local
/// coordinate frame plus the disjoint convex polygons that survived
/// visibility classification.
///
/// Faces are value types produced fresh by each decomposition; they hold
/// no references back into the input scene.
#[derive(Debug, Clone)]
pub struct Face {
    /// Maps local `(x, y, 0)` polygon coordinates into world space.
    pub to_world: Matrix4,
    /// Rotation-only part of `to_world`, for transforming normals.
    pub rotate_to_world: Matrix4,
    /// Pairwise disjoint polygons, z = 0 in the local frame.
    pub polygons: Vec<ConvexPolygon>,
}

impl Face {
    /// World-space normal of the supporting plane.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.rotate_to_world.transform_vector(&Vector3::z())
    }

    /// A polygon's points mapped into world space.
    #[must_use]
    pub fn world_polygon(&self, polygon: &[Point3]) -> Vec<Point3> {
        polygon
            .iter()
            .map(|point| self.to_world.transform_point(point))
            .collect()
    }
}
