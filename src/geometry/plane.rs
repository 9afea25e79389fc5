use nalgebra::Unit;

use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, Point3, Vector3, EPSILON};

/// An oriented half-space plane.
///
/// The interior is the side the normal points away from: a point is
/// interior when its height along the normal above the anchor is
/// negative. The anchor is any point on the plane and also serves as the
/// origin of the plane's local coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    anchor: Point3,
}

impl Plane {
    /// Creates a plane from a normal and an anchor point on the plane.
    ///
    /// The normal is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn new(normal: Vector3, anchor: Point3) -> Result<Self> {
        let len = normal.norm();
        if len < EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            normal: normal / len,
            anchor,
        })
    }

    /// Creates a plane from a normal direction and a signed distance from
    /// the origin along that direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn from_normal_distance(normal: Vector3, distance: f64) -> Result<Self> {
        let len = normal.norm();
        if len < EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        Ok(Self {
            normal,
            anchor: Point3::from(normal * distance),
        })
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the anchor point.
    #[must_use]
    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    /// The same plane with its interior on the other side.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            anchor: self.anchor,
        }
    }

    /// The plane translated along its own normal by `amount`.
    #[must_use]
    pub fn offset(&self, amount: f64) -> Self {
        Self {
            normal: self.normal,
            anchor: self.anchor + self.normal * amount,
        }
    }

    /// Signed height of `point` above the plane, along the normal.
    ///
    /// Equals the point's local z coordinate after transforming into the
    /// plane's frame; negative means interior.
    #[must_use]
    pub fn height_above(&self, point: &Point3) -> f64 {
        self.normal.dot(&(point - self.anchor))
    }

    /// Translation and rotation matrices, in that order, mapping plane
    /// coordinates `(x, y, 0)` to world coordinates.
    ///
    /// The rotation takes world Z onto the normal about the axis
    /// `Z x normal`; when the normal is (anti)parallel to Z within
    /// [`EPSILON`] the cross product degenerates and world X is used as
    /// the rotation axis instead.
    #[must_use]
    pub fn to_transforms(&self) -> (Matrix4, Matrix4) {
        let cos_angle = Vector3::z().dot(&self.normal);
        let axis = if cos_angle.abs() < 1.0 - EPSILON {
            Unit::new_normalize(Vector3::z().cross(&self.normal))
        } else {
            Vector3::x_axis()
        };
        let rotate = Matrix4::from_axis_angle(&axis, cos_angle.clamp(-1.0, 1.0).acos());
        let translate = Matrix4::new_translation(&self.anchor.coords);
        (translate, rotate)
    }

    /// The combined local-to-world transform, `translate * rotate`.
    #[must_use]
    pub fn to_world(&self) -> Matrix4 {
        let (translate, rotate) = self.to_transforms();
        translate * rotate
    }
}
