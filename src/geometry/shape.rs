use crate::math::{Point3, EPSILON};

use super::plane::Plane;

/// An intersection of half-space planes.
///
/// The geometric region is the intersection of every plane's interior;
/// it may be unbounded if under-constrained.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexShape {
    planes: Vec<Plane>,
}

impl ConvexShape {
    /// Creates a convex shape from an ordered set of planes.
    #[must_use]
    pub fn new(planes: Vec<Plane>) -> Self {
        Self { planes }
    }

    /// Returns the planes in order.
    #[must_use]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Whether `point` is on the interior side of every plane.
    ///
    /// `threshold` is the maximum allowed height above any plane: a small
    /// negative value tests the strict interior, a small positive value
    /// includes the boundary (an outset copy of the shape).
    #[must_use]
    pub fn contains_point(&self, point: &Point3, threshold: f64) -> bool {
        !self
            .planes
            .iter()
            .any(|plane| plane.height_above(point) > threshold)
    }

    /// A copy with every plane translated along its own normal by
    /// `amount`, producing an outset (or inset, when negative) shell.
    #[must_use]
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            planes: self.planes.iter().map(|plane| plane.offset(amount)).collect(),
        }
    }

    /// Number of distinct oriented normal directions among the planes.
    ///
    /// Fewer than 4 cannot bound a finite solid.
    #[must_use]
    pub fn distinct_normal_count(&self) -> usize {
        let mut distinct: Vec<&Plane> = Vec::new();
        for plane in &self.planes {
            if !distinct
                .iter()
                .any(|seen| seen.normal().dot(plane.normal()) > 1.0 - EPSILON)
            {
                distinct.push(plane);
            }
        }
        distinct.len()
    }
}

/// One convex addition region minus a set of convex subtraction regions.
///
/// Subtractions are flat: they do not carry nested subtractions.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub addition: ConvexShape,
    pub subtractions: Vec<ConvexShape>,
}

impl Shape {
    /// A solid shape with no holes.
    #[must_use]
    pub fn new(addition: ConvexShape) -> Self {
        Self {
            addition,
            subtractions: Vec::new(),
        }
    }

    /// A shape with holes carved out of the addition.
    #[must_use]
    pub fn with_subtractions(addition: ConvexShape, subtractions: Vec<ConvexShape>) -> Self {
        Self {
            addition,
            subtractions,
        }
    }

    /// Whether `point` is inside the solid region: strictly inside the
    /// addition and strictly inside no subtraction.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        self.addition.contains_point(point, -EPSILON)
            && !self
                .subtractions
                .iter()
                .any(|subtraction| subtraction.contains_point(point, -EPSILON))
    }
}
