use crate::error::Result;
use crate::geometry::{ConvexShape, Plane, Shape};
use crate::math::point_grid::PointGrid;
use crate::math::{Point3, EPSILON};
use crate::operations::decompose::decompose;
use crate::scene::Scene;

/// Which feature class an iteration refines.
#[derive(Debug, Clone, Copy)]
enum Refinement {
    Corners,
    Edges,
}

/// Rounds a convex shape by repeatedly capping its corners and edges.
///
/// Runs `|steps|` refinement iterations, alternating between corner and
/// edge passes; a positive `steps` starts with corners, a negative one
/// with edges, and `steps == 0` returns the shape unchanged. Each
/// iteration decomposes the current shape, gathers the world-space
/// polygon vertices (or edge midpoints), deduplicates near-coincident
/// vectors and unions one capping plane per unique vector: the plane's
/// normal is the vector's direction, anchored at distance `radius` from
/// the origin, or at the vector's own length plus `radius` when `radius`
/// is negative (cutting material away instead of bounding it). A vertex
/// (or midpoint) coinciding with the origin defines no cap direction and
/// is skipped.
///
/// # Errors
///
/// Returns an error if the shape cannot bound a finite solid.
pub fn round(shape: &ConvexShape, radius: f64, steps: i32) -> Result<ConvexShape> {
    if steps == 0 {
        return Ok(shape.clone());
    }
    let mode = if steps > 0 {
        Refinement::Corners
    } else {
        Refinement::Edges
    };
    let refined = refine(shape, radius, mode)?;
    round(&refined, radius, -(steps - steps.signum()))
}

fn refine(shape: &ConvexShape, radius: f64, mode: Refinement) -> Result<ConvexShape> {
    let scene = Scene::new(vec![Shape::new(shape.clone())])?;
    let faces = decompose(&scene)?;

    let mut samples = PointGrid::new(EPSILON);
    for face in &faces {
        for polygon in &face.polygons {
            for (i, point) in polygon.iter().enumerate() {
                let world = face.to_world.transform_point(point);
                let sample = match mode {
                    Refinement::Corners => world,
                    Refinement::Edges => {
                        let next = face
                            .to_world
                            .transform_point(&polygon[(i + 1) % polygon.len()]);
                        Point3::from((world.coords + next.coords) * 0.5)
                    }
                };
                samples.insert(&sample);
            }
        }
    }

    let mut planes = shape.planes().to_vec();
    for sample in samples.iter() {
        let vector = sample.coords;
        // A sample at the origin has no cap direction; skip it rather
        // than fail the whole pass.
        if vector.norm() < EPSILON {
            continue;
        }
        let distance = if radius > 0.0 {
            radius
        } else {
            vector.norm() + radius
        };
        planes.push(Plane::from_normal_distance(vector, distance)?);
    }
    Ok(ConvexShape::new(planes))
}
