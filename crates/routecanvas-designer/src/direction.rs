//! Path direction changes: reversal and start point re-rooting.
//!
//! Each change computes the new path first and then swaps path, anchors and
//! overlays on the shape in one assignment, so a shape is either fully
//! updated or untouched.

use crate::model::Point;
use crate::shape_store::ShapeStore;
use routecanvas_core::SceneError;

/// Reverses the travel direction of shape `id`.
///
/// Open shapes swap start and end; closed shapes keep their start point and
/// run the loop the other way. The compensation side is kept but the start
/// move and arrows are rebuilt from the new anchors.
pub fn reverse(store: &mut ShapeStore, id: u64) -> Result<(), SceneError> {
    let shape = store.get_mut(id).ok_or(SceneError::ShapeNotFound { id })?;
    let reversed = shape.path().reversed();
    shape.replace_path(reversed);
    tracing::debug!("Switched direction at shape {}", id);
    Ok(())
}

/// Reverses every selected shape and returns their ids.
pub fn reverse_selected(store: &mut ShapeStore) -> Vec<u64> {
    let ids: Vec<u64> = store
        .iter()
        .filter(|s| s.is_selected())
        .map(|s| s.id())
        .collect();
    ids.into_iter()
        .filter(|&id| reverse(store, id).is_ok())
        .collect()
}

/// Moves the start of closed shape `id` to its vertex nearest `reference`.
///
/// Open shapes have fixed ends, so the call fails with
/// [`SceneError::InvalidOperation`] instead of producing a wrong anchor.
pub fn set_nearest_start_point(
    store: &mut ShapeStore,
    id: u64,
    reference: &Point,
) -> Result<(), SceneError> {
    let shape = store.get_mut(id).ok_or(SceneError::ShapeNotFound { id })?;
    if !shape.is_closed() {
        tracing::warn!("Refusing to move the start point of open shape {}", id);
        return Err(SceneError::InvalidOperation {
            shape_id: id,
            reason: "start point can only be moved on closed shapes".to_string(),
        });
    }

    let index = shape.path().nearest_vertex(reference);
    if index != 0 {
        let rerooted = shape.path().rerooted(index);
        shape.replace_path(rerooted);
    }
    tracing::debug!("Set start point of shape {} to vertex {}", id, index);
    Ok(())
}

/// Re-roots every selected closed shape; open shapes are skipped.
///
/// Returns the ids of the shapes that were re-rooted.
pub fn set_nearest_start_point_selected(store: &mut ShapeStore, reference: &Point) -> Vec<u64> {
    let selected: Vec<(u64, bool)> = store
        .iter()
        .filter(|s| s.is_selected())
        .map(|s| (s.id(), s.is_closed()))
        .collect();

    let mut rerooted = Vec::new();
    for (id, closed) in selected {
        if !closed {
            tracing::debug!("Skipped open shape {} while moving start points", id);
            continue;
        }
        if set_nearest_start_point(store, id, reference).is_ok() {
            rerooted.push(id);
        }
    }
    rerooted
}
