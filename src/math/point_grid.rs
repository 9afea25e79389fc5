use std::collections::HashMap;

use super::Point3;

/// Deterministic point identity via a quantized spatial hash.
///
/// Points within `cell_size` of an already-inserted point resolve to that
/// point's stable index; everything else gets a fresh index. Lookup scans
/// the 3x3x3 neighbourhood of the quantized cell, so two points closer
/// than `cell_size` always land on the same index regardless of which
/// side of a cell boundary they fall on.
#[derive(Debug)]
pub struct PointGrid {
    cell_size: f64,
    points: Vec<Point3>,
    cells: HashMap<(i64, i64, i64), Vec<usize>>,
}

impl PointGrid {
    /// Creates an empty grid with the given merge distance.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            points: Vec::new(),
            cells: HashMap::new(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell_key(&self, p: &Point3) -> (i64, i64, i64) {
        let inv = 1.0 / self.cell_size;
        (
            (p.x * inv).floor() as i64,
            (p.y * inv).floor() as i64,
            (p.z * inv).floor() as i64,
        )
    }

    /// Returns the index of a previously inserted point within range.
    #[must_use]
    pub fn find(&self, point: &Point3) -> Option<usize> {
        let key = self.cell_key(point);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let neighbour = (key.0 + dx, key.1 + dy, key.2 + dz);
                    if let Some(entries) = self.cells.get(&neighbour) {
                        for &index in entries {
                            if (point - self.points[index]).norm() < self.cell_size {
                                return Some(index);
                            }
                        }
                    }
                }
            }
        }
        None
    }

    /// Returns the stable index for `point`, inserting it if no
    /// previously inserted point is within range.
    pub fn insert(&mut self, point: &Point3) -> usize {
        if let Some(index) = self.find(point) {
            return index;
        }
        let index = self.points.len();
        self.points.push(*point);
        self.cells.entry(self.cell_key(point)).or_default().push(index);
        index
    }

    /// The representative point stored at `index`.
    #[must_use]
    pub fn point(&self, index: usize) -> &Point3 {
        &self.points[index]
    }

    /// Number of distinct points in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the grid holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the distinct representative points.
    pub fn iter(&self) -> impl Iterator<Item = &Point3> {
        self.points.iter()
    }
}
