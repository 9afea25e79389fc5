use crate::geometry::polygon::ConvexPolygon;
use crate::math::line_2d::{line_intersection, Line};
use crate::math::{Point3, Vector2, EPSILON};

/// Builds the bounded convex polygon that is the intersection of the
/// half-planes behind `lines`.
///
/// For every line the most constraining forward intersection with the
/// other lines is kept, linking each line to the one that bounds it.
/// Following the links either closes a cycle, whose corners form the
/// perimeter (any dangling prefix walked before the cycle closed is
/// discarded), or dead-ends, in which case the region is unbounded in
/// some direction and the perimeter is empty.
pub fn convex_perimeter(lines: &[Line]) -> ConvexPolygon {
    let links: Vec<Option<(usize, Point3)>> = lines
        .iter()
        .map(|line| {
            let left_normal = Vector2::new(-line.direction.y, line.direction.x);
            let mut best: Option<(usize, f64)> = None;
            for (index, compare) in lines.iter().enumerate() {
                let cos_angle = left_normal.dot(&compare.direction);
                if cos_angle <= EPSILON {
                    continue;
                }
                let Some(distance) = line_intersection(line, compare) else {
                    continue;
                };
                if best.is_none_or(|(_, max)| distance >= max) {
                    best = Some((index, distance));
                }
            }
            best.map(|(index, distance)| {
                (
                    index,
                    Point3::new(
                        line.anchor.x + line.direction.x * distance,
                        line.anchor.y + line.direction.y * distance,
                        0.0,
                    ),
                )
            })
        })
        .collect();

    let Some(start) = links.iter().position(Option::is_some) else {
        return Vec::new();
    };
    let mut walked: Vec<usize> = Vec::new();
    let mut current = start;
    loop {
        if let Some(cycle_start) = walked.iter().position(|&visited| visited == current) {
            return walked[cycle_start..]
                .iter()
                .filter_map(|&index| links[index].map(|(_, point)| point))
                .collect();
        }
        match links[current] {
            Some((next, _)) => {
                walked.push(current);
                current = next;
            }
            // chain never closes; the region is unbounded
            None => return Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::math::Point2;

    use super::*;

    fn square_lines() -> Vec<Line> {
        // half-plane boundaries of the square [-1, 1]^2, oriented the way
        // plane projection orients them (interior to the right)
        vec![
            Line::new(Vector2::new(0.0, -1.0), Point2::new(1.0, 0.0)),
            Line::new(Vector2::new(0.0, 1.0), Point2::new(-1.0, 0.0)),
            Line::new(Vector2::new(1.0, 0.0), Point2::new(0.0, 1.0)),
            Line::new(Vector2::new(-1.0, 0.0), Point2::new(0.0, -1.0)),
        ]
    }

    fn has_corner(polygon: &[Point3], x: f64, y: f64) -> bool {
        polygon
            .iter()
            .any(|p| (p.x - x).abs() < EPSILON && (p.y - y).abs() < EPSILON)
    }

    #[test]
    fn four_half_planes_close_into_a_square() {
        let perimeter = convex_perimeter(&square_lines());
        assert_eq!(perimeter.len(), 4);
        assert!(has_corner(&perimeter, 1.0, 1.0));
        assert!(has_corner(&perimeter, 1.0, -1.0));
        assert!(has_corner(&perimeter, -1.0, 1.0));
        assert!(has_corner(&perimeter, -1.0, -1.0));
    }

    #[test]
    fn unbounded_region_yields_empty_perimeter() {
        // two boundaries cannot close a cycle
        let lines = vec![
            Line::new(Vector2::new(0.0, -1.0), Point2::new(1.0, 0.0)),
            Line::new(Vector2::new(1.0, 0.0), Point2::new(0.0, 1.0)),
        ];
        assert!(convex_perimeter(&lines).is_empty());
    }

    #[test]
    fn no_lines_yield_empty_perimeter() {
        assert!(convex_perimeter(&[]).is_empty());
    }

    #[test]
    fn redundant_half_plane_is_dropped_from_the_cycle() {
        let mut lines = square_lines();
        // a fifth boundary far outside the square constrains nothing
        lines.push(Line::new(Vector2::new(0.0, -1.0), Point2::new(5.0, 0.0)));
        let perimeter = convex_perimeter(&lines);
        assert_eq!(perimeter.len(), 4);
        assert!(has_corner(&perimeter, 1.0, 1.0));
    }
}
