//! Scene handle shared between the event loop and background readers.

use crate::renderer::{render_list, PaintItem};
use crate::scene::{Scene, SceneConfig};
use routecanvas_core::{thread_safe_rw, ThreadSafeRw};

/// Cloneable handle to a scene behind a read-write lock.
///
/// Each [`SharedScene::write`] call holds the write lock for the whole
/// closure, so a reader never observes a bulk operation half applied.
#[derive(Debug, Clone)]
pub struct SharedScene {
    inner: ThreadSafeRw<Scene>,
}

impl SharedScene {
    pub fn new(config: SceneConfig) -> Self {
        Self::from_scene(Scene::new(config))
    }

    pub fn from_scene(scene: Scene) -> Self {
        Self {
            inner: thread_safe_rw(scene),
        }
    }

    /// Runs `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&Scene) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access for its whole duration.
    pub fn write<R>(&self, f: impl FnOnce(&mut Scene) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Paint commands of a consistent scene state.
    pub fn render_snapshot(&self) -> Vec<PaintItem> {
        self.read(render_list)
    }
}
