use crate::error::{GeometryError, Result};
use crate::geometry::{ConvexShape, Plane};
use crate::math::{Point3, Vector3, EPSILON};

/// Creates an axis-aligned box from opposite corners.
///
/// Each face plane is anchored at the center of that face, so the face
/// frames produced during decomposition are centered on the solid.
///
/// # Errors
///
/// Returns an error if the box has near-zero extent along any axis.
pub fn make_cuboid(min: Point3, max: Point3) -> Result<ConvexShape> {
    let extent = max - min;
    if extent.x < EPSILON || extent.y < EPSILON || extent.z < EPSILON {
        return Err(GeometryError::Degenerate(format!(
            "cuboid extent ({}, {}, {}) is not positive",
            extent.x, extent.y, extent.z
        ))
        .into());
    }
    let center = Point3::from((min.coords + max.coords) * 0.5);
    Ok(ConvexShape::new(vec![
        Plane::new(Vector3::x(), Point3::new(max.x, center.y, center.z))?,
        Plane::new(-Vector3::x(), Point3::new(min.x, center.y, center.z))?,
        Plane::new(Vector3::y(), Point3::new(center.x, max.y, center.z))?,
        Plane::new(-Vector3::y(), Point3::new(center.x, min.y, center.z))?,
        Plane::new(Vector3::z(), Point3::new(center.x, center.y, max.z))?,
        Plane::new(-Vector3::z(), Point3::new(center.x, center.y, min.z))?,
    ]))
}
