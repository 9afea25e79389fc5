pub mod face;
pub mod plane;
pub mod polygon;
pub mod shape;

pub use face::Face;
pub use plane::Plane;
pub use polygon::ConvexPolygon;
pub use shape::{ConvexShape, Shape};
