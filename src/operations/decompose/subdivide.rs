use crate::geometry::polygon::{dedupe_polygon, ConvexPolygon};
use crate::math::line_2d::{edge_crossing, Line};
use crate::math::{Point3, EPSILON};

/// Recursion cap for the subdivider.
///
/// In practice the depth is bounded by the number of candidate lines, but
/// floating-point drift can keep producing "still technically bisecting"
/// near-duplicate splits; a cell that reaches the cap is returned unsplit
/// rather than recursing forever.
pub const MAX_SUBDIVISION_DEPTH: usize = 256;

/// Recursively splits `polygon` along every line that bisects it,
/// producing the minimal convex leaf cells of the planar arrangement
/// restricted to the polygon.
pub fn subdivide(polygon: ConvexPolygon, lines: &[Line]) -> Vec<ConvexPolygon> {
    subdivide_to_depth(polygon, lines, MAX_SUBDIVISION_DEPTH)
}

fn subdivide_to_depth(
    polygon: ConvexPolygon,
    lines: &[Line],
    depth: usize,
) -> Vec<ConvexPolygon> {
    if depth == 0 {
        return vec![polygon];
    }
    let Some([(p1, i1), (p2, i2)]) = find_bisection(&polygon, lines) else {
        return vec![polygon];
    };
    let (half1, half2) = split_at(&polygon, p1, i1, p2, i2);
    let mut cells = subdivide_to_depth(dedupe_polygon(&half1), lines, depth - 1);
    cells.extend(subdivide_to_depth(dedupe_polygon(&half2), lines, depth - 1));
    cells
}

/// Finds the first line crossing the polygon boundary at exactly two
/// distinct points, returning both crossings with the index of the vertex
/// starting the crossed edge.
fn find_bisection(polygon: &[Point3], lines: &[Line]) -> Option<[(Point3, usize); 2]> {
    let n = polygon.len();
    for line in lines {
        let mut crossings: Vec<(Point3, usize)> = Vec::new();
        for i in 0..n {
            let p0 = &polygon[i];
            let p1 = &polygon[(i + 1) % n];
            let p2 = &polygon[(i + 2) % n];
            let p3 = &polygon[(i + 3) % n];

            let (previous_distance, _, _) = edge_crossing(p0, p1, line);
            let (current_distance, length, direction) = edge_crossing(p1, p2, line);
            let (next_distance, _, _) = edge_crossing(p2, p3, line);

            let Some(distance) = current_distance else {
                // the edge itself is parallel to the split line
                continue;
            };
            // when a neighbouring edge is parallel to the split line, a
            // crossing at the shared endpoint belongs to that edge
            if previous_distance.is_none() && distance < EPSILON {
                continue;
            }
            if next_distance.is_none() && distance > length - EPSILON {
                continue;
            }
            if distance < -EPSILON || distance > length + EPSILON {
                continue;
            }
            crossings.push((p1 + direction * distance, (i + 1) % n));
        }
        if crossings.len() < 2 {
            continue;
        }
        // drop crossings that collapse onto the next one
        let mut filtered: Vec<(Point3, usize)> = Vec::with_capacity(crossings.len());
        for (i, crossing) in crossings.iter().enumerate() {
            let (next_point, _) = crossings[(i + 1) % crossings.len()];
            if (crossing.0 - next_point).norm() > EPSILON {
                filtered.push(*crossing);
            }
        }
        if filtered.len() == 2 {
            return Some([filtered[0], filtered[1]]);
        }
    }
    None
}

/// Splits the polygon along the chord `p1 -> p2`, where `p1` lies on the
/// edge starting at vertex `i1` and `p2` on the edge starting at `i2`.
fn split_at(
    polygon: &[Point3],
    p1: Point3,
    i1: usize,
    p2: Point3,
    i2: usize,
) -> (ConvexPolygon, ConvexPolygon) {
    let mut half1 = vec![p1];
    if i2 > i1 {
        half1.extend_from_slice(&polygon[i1 + 1..=i2]);
    } else {
        half1.extend_from_slice(&polygon[i1 + 1..]);
        half1.extend_from_slice(&polygon[..=i2]);
    }
    half1.push(p2);

    let mut half2 = vec![p2];
    if i2 > i1 {
        half2.extend_from_slice(&polygon[i2 + 1..]);
        half2.extend_from_slice(&polygon[..=i1]);
    } else {
        half2.extend_from_slice(&polygon[i2 + 1..=i1]);
    }
    half2.push(p1);

    (half1, half2)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::geometry::polygon::signed_area;
    use crate::math::{Point2, Vector2};

    use super::*;

    fn square() -> ConvexPolygon {
        vec![
            Point3::new(-1.0, 1.0, 0.0),
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn vertical_line_bisects_square() {
        let line = Line::new(Vector2::new(0.0, 1.0), Point2::new(0.0, 0.0));
        let cells = subdivide(square(), &[line]);
        assert_eq!(cells.len(), 2);
        for cell in &cells {
            assert_eq!(cell.len(), 4);
            assert_relative_eq!(signed_area(cell).abs(), 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn line_outside_polygon_does_not_split() {
        let line = Line::new(Vector2::new(0.0, 1.0), Point2::new(5.0, 0.0));
        let cells = subdivide(square(), &[line]);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].len(), 4);
    }

    #[test]
    fn line_through_edge_does_not_split() {
        // coincident with the right edge of the square
        let line = Line::new(Vector2::new(0.0, 1.0), Point2::new(1.0, 0.0));
        let cells = subdivide(square(), &[line]);
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn crossing_lines_produce_four_cells() {
        let lines = vec![
            Line::new(Vector2::new(0.0, 1.0), Point2::new(0.0, 0.0)),
            Line::new(Vector2::new(1.0, 0.0), Point2::new(0.0, 0.0)),
        ];
        let cells = subdivide(square(), &lines);
        assert_eq!(cells.len(), 4);
        let total: f64 = cells.iter().map(|cell| signed_area(cell).abs()).sum();
        assert_relative_eq!(total, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn depth_cap_returns_cell_unsplit() {
        let line = Line::new(Vector2::new(0.0, 1.0), Point2::new(0.0, 0.0));
        let cells = subdivide_to_depth(square(), &[line], 0);
        assert_eq!(cells.len(), 1);
    }
}
