//! Ordered storage for the shapes of a scene.

use crate::shapes::CamShape;
use routecanvas_core::SceneError;
use std::collections::HashSet;

/// Shapes in draw order.
///
/// Draw order doubles as the default traversal order. Shapes are looked up
/// by id, so reordering never invalidates an id held elsewhere.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: Vec<CamShape>,
    next_id: u64,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn push(&mut self, shape: CamShape) {
        self.shapes.push(shape);
    }

    /// Drops every shape. Ids keep counting up so none is ever reused.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&CamShape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: u64) -> Option<&mut CamShape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Shape at draw-order position `index`.
    pub fn at(&self, index: usize) -> Option<&CamShape> {
        self.shapes.get(index)
    }

    /// Draw-order position of shape `id`.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CamShape> {
        self.shapes.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CamShape> {
        self.shapes.iter_mut()
    }

    /// Ids in draw order.
    pub fn draw_order_iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.shapes.iter().map(|s| s.id())
    }

    /// Rearranges the draw order; `ids` must list every shape exactly once.
    pub fn reorder(&mut self, ids: &[u64]) -> Result<(), SceneError> {
        let mut seen = HashSet::with_capacity(ids.len());
        for &id in ids {
            if self.get(id).is_none() {
                return Err(SceneError::ShapeNotFound { id });
            }
            if !seen.insert(id) {
                let index = self.position(id).unwrap_or_default();
                return Err(SceneError::DuplicateIndex { index });
            }
        }
        if let Some(missing) = self.shapes.iter().find(|s| !seen.contains(&s.id())) {
            return Err(SceneError::InvalidOperation {
                shape_id: missing.id(),
                reason: "missing from the new draw order".to_string(),
            });
        }

        self.shapes
            .sort_by_key(|s| ids.iter().position(|&id| id == s.id()));
        Ok(())
    }
}
