//! Enable/disable handling and the "show disabled paths" view flag.

use crate::listeners::ShapeEvent;
use crate::shape_store::ShapeStore;
use crate::shapes::CamShape;
use routecanvas_core::{Notify, SceneError};

/// Disables and enables shapes and decides which of them are drawn.
///
/// A disabled shape is excluded from machining. It is drawn dimmed while
/// `show_disabled` is set and hidden otherwise; enabled shapes are always
/// drawn. Shapes that are not allowed to change are skipped silently.
#[derive(Debug, Clone, Default)]
pub struct VisibilityManager {
    show_disabled: bool,
}

impl VisibilityManager {
    pub fn new(show_disabled: bool) -> Self {
        Self { show_disabled }
    }

    pub fn show_disabled(&self) -> bool {
        self.show_disabled
    }

    /// Whether `shape` is drawn at all.
    pub fn is_visible(&self, shape: &CamShape) -> bool {
        !shape.is_disabled() || self.show_disabled
    }

    /// Disables every selected shape that is allowed to change.
    ///
    /// Returns the number of shapes whose state changed.
    pub fn disable_selected(&self, store: &mut ShapeStore, events: &mut Vec<ShapeEvent>) -> usize {
        self.set_selected_disabled(store, true, events)
    }

    /// Enables every selected shape that is allowed to change.
    pub fn enable_selected(&self, store: &mut ShapeStore, events: &mut Vec<ShapeEvent>) -> usize {
        self.set_selected_disabled(store, false, events)
    }

    fn set_selected_disabled(
        &self,
        store: &mut ShapeStore,
        disabled: bool,
        events: &mut Vec<ShapeEvent>,
    ) -> usize {
        let mut changed = 0;
        for shape in store
            .iter_mut()
            .filter(|s| s.is_selected() && s.allowed_to_change())
        {
            if Self::apply(shape, disabled, events) {
                changed += 1;
            }
        }
        changed
    }

    /// Enables or disables a single shape, e.g. from a layer tree checkbox.
    ///
    /// Returns `Ok(false)` when nothing changed, including the case of a
    /// shape that is not allowed to be disabled.
    pub fn set_disabled(
        &self,
        store: &mut ShapeStore,
        id: u64,
        disabled: bool,
        notify: Notify,
        events: &mut Vec<ShapeEvent>,
    ) -> Result<bool, SceneError> {
        let shape = store.get_mut(id).ok_or(SceneError::ShapeNotFound { id })?;
        if notify.is_enabled() {
            Ok(Self::apply(shape, disabled, events))
        } else {
            Ok(shape.set_disabled(disabled))
        }
    }

    /// Updates the view flag and returns the ids of the disabled shapes whose
    /// visibility was re-evaluated. Enabled shapes are unaffected.
    pub fn set_show_disabled(&mut self, store: &ShapeStore, show: bool) -> Vec<u64> {
        self.show_disabled = show;
        store
            .iter()
            .filter(|s| s.is_disabled())
            .map(|s| s.id())
            .collect()
    }

    /// Ids of the shapes that are currently not drawn.
    pub fn hidden_ids(&self, store: &ShapeStore) -> Vec<u64> {
        store
            .iter()
            .filter(|s| !self.is_visible(s))
            .map(|s| s.id())
            .collect()
    }

    fn apply(shape: &mut CamShape, disabled: bool, events: &mut Vec<ShapeEvent>) -> bool {
        let changed = shape.set_disabled(disabled);
        if changed {
            tracing::debug!(
                "{} shape {}",
                if disabled { "Disabled" } else { "Enabled" },
                shape.id()
            );
            events.push(ShapeEvent::EnabledChanged {
                id: shape.id(),
                enabled: !disabled,
            });
        }
        changed
    }
}
