#![allow(dead_code)]

use parking_lot::Mutex;
use routecanvas_designer::{ImportedShape, Point, Scene, SceneConfig, ShapeListener, ShapePath};
use std::sync::Arc;

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> ImportedShape {
    ImportedShape::new(
        ShapePath::new(vec![Point::new(x1, y1), Point::new(x2, y2)], false).unwrap(),
    )
}

pub fn square(x: f64, y: f64, size: f64) -> ImportedShape {
    ImportedShape::new(
        ShapePath::new(
            vec![
                Point::new(x, y),
                Point::new(x + size, y),
                Point::new(x + size, y + size),
                Point::new(x, y + size),
            ],
            true,
        )
        .unwrap(),
    )
}

/// Three 10x10 squares side by side at x = 0, 100 and 200.
pub fn three_squares() -> Scene {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([
        square(0.0, 0.0, 10.0),
        square(100.0, 0.0, 10.0),
        square(200.0, 0.0, 10.0),
    ]);
    scene
}

#[derive(Default)]
pub struct Recorder {
    pub selection: Mutex<Vec<(u64, bool)>>,
    pub enabled: Mutex<Vec<(u64, bool)>>,
}

impl ShapeListener for Recorder {
    fn on_selection_changed(&self, shape_id: u64, selected: bool) {
        self.selection.lock().push((shape_id, selected));
    }

    fn on_enabled_changed(&self, shape_id: u64, enabled: bool) {
        self.enabled.lock().push((shape_id, enabled));
    }
}

/// Registers one shared recorder for every shape of `scene`.
pub fn record_all(scene: &mut Scene) -> Arc<Recorder> {
    let recorder = Arc::new(Recorder::default());
    let ids: Vec<u64> = scene.store().draw_order_iter().collect();
    for id in ids {
        scene.register_listener(id, recorder.clone()).unwrap();
    }
    recorder
}
