//! Type aliases for shared state.
//!
//! A scene lives on the thread that owns the UI. When a renderer or a
//! hit-test worker reads it from another thread, the scene is wrapped in a
//! [`ThreadSafeRw`] so every mutating operation holds one exclusive section
//! for its whole duration.

use parking_lot::RwLock;
use std::sync::Arc;

/// A thread-safe read-write lock wrapper.
///
/// Use when many readers (renderers taking snapshots) and one writer
/// (the event loop applying user actions) share state.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// Creates a new `ThreadSafeRw<T>` from a value.
#[inline]
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}
