mod adjacency;
mod area;

pub use adjacency::EdgeAdjacency;
pub use area::face_area;
