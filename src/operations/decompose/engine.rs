use crate::error::Result;
use crate::geometry::polygon::polygon_centroid;
use crate::geometry::{Face, Plane};
use crate::math::Matrix4;
use crate::scene::{ConvexShapeId, Scene};

use super::classify::cell_is_visible;
use super::lines::project_planes_to_lines;
use super::perimeter::convex_perimeter;
use super::subdivide::subdivide;

/// Computes the exposed boundary of `scene` as one [`Face`] per
/// supporting plane with surviving surface.
///
/// For every plane of every shape (subtraction planes flipped so their
/// exposed side faces into the cavity): build the plane's perimeter
/// polygon from its own addition, split it against every plane-pair
/// intersection line in the scene, classify each leaf cell's centroid,
/// and collect the visible cells into a face.
///
/// # Errors
///
/// Returns an error if an interned convex shape cannot be resolved.
pub fn decompose(scene: &Scene) -> Result<Vec<Face>> {
    let all_planes = scene.all_planes()?;
    let mut faces = Vec::new();

    for (shape_index, scene_shape) in scene.shapes().iter().enumerate() {
        let addition = scene.convex(scene_shape.addition)?;

        let mut sources: Vec<(ConvexShapeId, bool)> = vec![(scene_shape.addition, false)];
        sources.extend(scene_shape.subtractions.iter().map(|&id| (id, true)));

        for (source_id, is_subtraction) in sources {
            let source = scene.convex(source_id)?;
            let planes: Vec<Plane> = if is_subtraction {
                source.planes().iter().map(Plane::flipped).collect()
            } else {
                source.planes().to_vec()
            };

            for plane in &planes {
                let (translate, rotate) = plane.to_transforms();
                let to_world = translate * rotate;
                let inverse_rotate = rotate.transpose();
                let inverse =
                    inverse_rotate * Matrix4::new_translation(&(-plane.anchor().coords));

                let boundary = project_planes_to_lines(addition.planes(), &inverse_rotate, &inverse);
                let perimeter = convex_perimeter(&boundary);
                if perimeter.len() < 3 {
                    continue;
                }

                let scene_lines =
                    project_planes_to_lines(&all_planes, &inverse_rotate, &inverse);
                let mut polygons = Vec::new();
                for cell in subdivide(perimeter, &scene_lines) {
                    if cell.len() < 3 {
                        continue;
                    }
                    let centroid = polygon_centroid(&cell);
                    let world_centroid = to_world.transform_point(&centroid);
                    if cell_is_visible(scene, shape_index, source_id, &world_centroid)? {
                        polygons.push(cell);
                    }
                }

                if !polygons.is_empty() {
                    faces.push(Face {
                        to_world,
                        rotate_to_world: rotate,
                        polygons,
                    });
                }
            }
        }
    }

    Ok(faces)
}
