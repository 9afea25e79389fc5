use std::collections::HashMap;

use crate::geometry::Face;
use crate::math::point_grid::PointGrid;
use crate::math::{Point3, ADJACENCY_EPSILON};

/// Index of directed world-space polygon edges across a face set.
///
/// Polygons within a decomposition are wound consistently, so two faces
/// sharing a world edge traverse it in opposite directions; the face on
/// the other side of an edge is the one registered under the reversed
/// endpoint pair. Endpoints are matched through a quantized point grid
/// with tolerance [`ADJACENCY_EPSILON`].
#[derive(Debug)]
pub struct EdgeAdjacency {
    grid: PointGrid,
    edges: HashMap<(usize, usize), usize>,
}

impl EdgeAdjacency {
    /// Indexes every polygon edge of `faces`.
    #[must_use]
    pub fn build(faces: &[Face]) -> Self {
        let mut grid = PointGrid::new(ADJACENCY_EPSILON);
        let mut edges = HashMap::new();
        for (face_index, face) in faces.iter().enumerate() {
            for polygon in &face.polygons {
                for (i, point) in polygon.iter().enumerate() {
                    let next = &polygon[(i + 1) % polygon.len()];
                    let a = grid.insert(&face.to_world.transform_point(point));
                    let b = grid.insert(&face.to_world.transform_point(next));
                    if a != b {
                        // First registration wins when quantization
                        // collapses two polygons onto one directed edge.
                        edges.entry((a, b)).or_insert(face_index);
                    }
                }
            }
        }
        Self { grid, edges }
    }

    /// Face owning the directed world edge `a -> b`.
    #[must_use]
    pub fn owner(&self, a: &Point3, b: &Point3) -> Option<usize> {
        let start = self.grid.find(a)?;
        let end = self.grid.find(b)?;
        self.edges.get(&(start, end)).copied()
    }

    /// Face on the other side of the directed world edge `a -> b`.
    #[must_use]
    pub fn neighbour(&self, a: &Point3, b: &Point3) -> Option<usize> {
        let start = self.grid.find(a)?;
        let end = self.grid.find(b)?;
        self.edges.get(&(end, start)).copied()
    }
}
