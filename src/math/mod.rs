pub mod line_2d;
pub mod point_grid;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance, used uniformly for parallelism and
/// degeneracy decisions throughout the kernel.
pub const EPSILON: f64 = 1e-3;

/// Tolerance for matching world-space points across faces.
///
/// Downstream adjacency indexing quantizes shared edge endpoints with this
/// value; it must stay at exactly ten times [`EPSILON`].
pub const ADJACENCY_EPSILON: f64 = EPSILON * 10.0;
