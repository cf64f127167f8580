//! Per-shape listener registration and notification delivery.

use routecanvas_core::ShapeListener;
use std::collections::HashMap;
use std::sync::Arc;

/// A state change worth reporting to a shape's listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeEvent {
    SelectionChanged { id: u64, selected: bool },
    EnabledChanged { id: u64, enabled: bool },
}

impl ShapeEvent {
    pub fn shape_id(&self) -> u64 {
        match *self {
            ShapeEvent::SelectionChanged { id, .. } | ShapeEvent::EnabledChanged { id, .. } => id,
        }
    }

    fn target(&self) -> (u64, bool) {
        (
            self.shape_id(),
            matches!(self, ShapeEvent::SelectionChanged { .. }),
        )
    }
}

/// Reduces a sequence of flips to the net changes.
///
/// Every event records one flip of a flag, so two events on the same flag
/// of the same shape cancel out. Survivors keep the order of their first
/// occurrence.
pub fn net_changes(events: Vec<ShapeEvent>) -> Vec<ShapeEvent> {
    let mut slots: Vec<Option<ShapeEvent>> = Vec::with_capacity(events.len());
    let mut open: HashMap<(u64, bool), usize> = HashMap::new();
    for event in events {
        match open.remove(&event.target()) {
            Some(index) => slots[index] = None,
            None => {
                open.insert(event.target(), slots.len());
                slots.push(Some(event));
            }
        }
    }
    slots.into_iter().flatten().collect()
}

/// One listener per shape, keyed by shape id.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    listeners: HashMap<u64, Arc<dyn ShapeListener>>,
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("shapes", &self.listeners.len())
            .finish()
    }
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for shape `id`, replacing any previous one.
    pub fn register(&mut self, id: u64, listener: Arc<dyn ShapeListener>) {
        self.listeners.insert(id, listener);
    }

    pub fn unregister(&mut self, id: u64) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn is_registered(&self, id: u64) -> bool {
        self.listeners.contains_key(&id)
    }

    /// Delivers `events` in order to the listener of each affected shape.
    pub fn dispatch(&self, events: &[ShapeEvent]) {
        for event in events {
            let Some(listener) = self.listeners.get(&event.shape_id()) else {
                continue;
            };
            match *event {
                ShapeEvent::SelectionChanged { id, selected } => {
                    listener.on_selection_changed(id, selected)
                }
                ShapeEvent::EnabledChanged { id, enabled } => listener.on_enabled_changed(id, enabled),
            }
        }
    }
}
