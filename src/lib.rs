pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;

pub use error::{LithicError, Result};
