use slotmap::SlotMap;

use crate::error::{Result, SceneError};
use crate::geometry::{ConvexShape, Plane, Shape};

slotmap::new_key_type! {
    /// Unique identifier for a convex shape interned in a [`Scene`].
    pub struct ConvexShapeId;
}

/// A shape as stored in the scene: one addition and its subtractions,
/// referenced by interned ids.
#[derive(Debug, Clone)]
pub struct SceneShape {
    pub addition: ConvexShapeId,
    pub subtractions: Vec<ConvexShapeId>,
}

/// An ordered set of shapes prepared for boundary evaluation.
///
/// Every convex shape is interned into an arena at construction and
/// referred to by a stable [`ConvexShapeId`]; the visibility classifier
/// uses these ids to recognise the shape it is currently processing.
/// Shape order matters: it is the deterministic tie-break that decides
/// which of two coincident boundary faces survives.
#[derive(Debug, Default)]
pub struct Scene {
    store: SlotMap<ConvexShapeId, ConvexShape>,
    shapes: Vec<SceneShape>,
}

impl Scene {
    /// Builds a scene from ordered shapes.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnderConstrained`] if any convex shape has
    /// fewer than 4 pairwise non-parallel planes; such a shape cannot
    /// bound a finite solid and is a caller contract violation.
    pub fn new(shapes: Vec<Shape>) -> Result<Self> {
        let mut scene = Self {
            store: SlotMap::with_key(),
            shapes: Vec::with_capacity(shapes.len()),
        };
        for shape in shapes {
            scene.push_shape(shape)?;
        }
        Ok(scene)
    }

    /// Appends a shape, interning its convex shapes.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnderConstrained`] as for [`Scene::new`].
    pub fn push_shape(&mut self, shape: Shape) -> Result<()> {
        let addition = self.intern(shape.addition)?;
        let mut subtractions = Vec::with_capacity(shape.subtractions.len());
        for subtraction in shape.subtractions {
            subtractions.push(self.intern(subtraction)?);
        }
        self.shapes.push(SceneShape {
            addition,
            subtractions,
        });
        Ok(())
    }

    fn intern(&mut self, convex: ConvexShape) -> Result<ConvexShapeId> {
        let distinct = convex.distinct_normal_count();
        if distinct < 4 {
            return Err(SceneError::UnderConstrained { planes: distinct }.into());
        }
        Ok(self.store.insert(convex))
    }

    /// The shapes in scene order.
    #[must_use]
    pub fn shapes(&self) -> &[SceneShape] {
        &self.shapes
    }

    /// Resolves an interned convex shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not present in this scene.
    pub fn convex(&self, id: ConvexShapeId) -> Result<&ConvexShape> {
        self.store
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("convex shape".into()).into())
    }

    /// Every plane of every addition and subtraction, in scene order.
    ///
    /// # Errors
    ///
    /// Returns an error if an interned shape cannot be resolved.
    pub fn all_planes(&self) -> Result<Vec<Plane>> {
        let mut planes = Vec::new();
        for shape in &self.shapes {
            planes.extend_from_slice(self.convex(shape.addition)?.planes());
            for &subtraction in &shape.subtractions {
                planes.extend_from_slice(self.convex(subtraction)?.planes());
            }
        }
        Ok(planes)
    }

    /// Number of shapes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
