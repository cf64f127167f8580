//! Shape listener interface
//!
//! Lets a collaborator outside the canvas (a tree view, a layer panel)
//! mirror per-shape selection and enable state without the geometry
//! types depending on any UI toolkit.

/// Whether a state change should be reported to the shape's listener.
///
/// `Silent` is used when the change itself originates from the mirror,
/// so the notification is not echoed back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notify {
    #[default]
    Listeners,
    Silent,
}

impl Notify {
    pub fn is_enabled(self) -> bool {
        matches!(self, Notify::Listeners)
    }
}

/// Listener trait for shape state changes
///
/// Notifications are delivered synchronously once the operation that caused
/// them has finished mutating the scene. Implementations may read their own
/// state but must defer any further scene mutation to a later event turn.
pub trait ShapeListener: Send + Sync {
    /// Called when a shape's selected flag flips
    fn on_selection_changed(&self, _shape_id: u64, _selected: bool) {}

    /// Called when a shape is enabled (`true`) or disabled (`false`)
    fn on_enabled_changed(&self, _shape_id: u64, _enabled: bool) {}
}
