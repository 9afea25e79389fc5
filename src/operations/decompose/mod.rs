mod classify;
mod engine;
mod lines;
mod perimeter;
mod subdivide;

pub use engine::decompose;
pub use subdivide::MAX_SUBDIVISION_DEPTH;
