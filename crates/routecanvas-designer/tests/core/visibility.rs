use crate::common::{record_all, square, three_squares};
use routecanvas_designer::{Bounds, Notify, Scene, SceneConfig};

#[test]
fn test_disable_selected_shapes() {
    let mut scene = three_squares();
    scene.set_selected(1, true, Notify::Silent).unwrap();
    scene.set_selected(3, true, Notify::Silent).unwrap();

    assert_eq!(scene.disable_selection(), 2);
    assert!(scene.shape(1).unwrap().is_disabled());
    assert!(!scene.shape(2).unwrap().is_disabled());
    assert_eq!(scene.hidden_ids(), vec![1, 3]);
}

#[test]
fn test_enable_is_idempotent() {
    let mut scene = three_squares();
    scene.select_all();
    scene.disable_selection();

    assert_eq!(scene.enable_selection(), 3);
    let once: Vec<bool> = scene.store().iter().map(|s| s.is_disabled()).collect();
    assert_eq!(scene.enable_selection(), 0);
    let twice: Vec<bool> = scene.store().iter().map(|s| s.is_disabled()).collect();
    assert_eq!(once, twice);
}

#[test]
fn test_locked_shape_is_never_disabled() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([square(0.0, 0.0, 10.0).locked(), square(20.0, 0.0, 10.0)]);
    scene.select_all();

    for _ in 0..3 {
        scene.disable_selection();
    }
    assert!(!scene.shape(1).unwrap().is_disabled());
    assert!(scene.shape(2).unwrap().is_disabled());
    assert!(!scene.set_disabled(1, true, Notify::Listeners).unwrap());
}

#[test]
fn test_locked_shape_loads_enabled() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([square(0.0, 0.0, 10.0).locked().disabled(true)]);
    assert!(!scene.shape(1).unwrap().is_disabled());
}

#[test]
fn test_show_disabled_reevaluates_only_disabled_shapes() {
    let mut scene = three_squares();
    scene.set_disabled(2, true, Notify::Listeners).unwrap();
    assert_eq!(scene.hidden_ids(), vec![2]);

    assert_eq!(scene.set_show_disabled(true), vec![2]);
    assert!(scene.hidden_ids().is_empty());
    assert!(scene.shape(2).unwrap().is_disabled());

    scene.set_show_disabled(false);
    assert_eq!(scene.hidden_ids(), vec![2]);
}

#[test]
fn test_enable_notifications() {
    let mut scene = three_squares();
    let recorder = record_all(&mut scene);
    scene.select_all();
    scene.disable_selection();
    scene.disable_selection();

    assert_eq!(
        *recorder.enabled.lock(),
        vec![(1, false), (2, false), (3, false)]
    );

    scene.set_disabled(1, false, Notify::Silent).unwrap();
    assert_eq!(recorder.enabled.lock().len(), 3);
}

#[test]
fn test_bounding_rect_covers_visible_shapes() {
    let mut scene = three_squares();
    assert_eq!(
        scene.items_bounding_rect(),
        Some(Bounds::new(0.0, 0.0, 210.0, 10.0))
    );

    scene.set_disabled(3, true, Notify::Listeners).unwrap();
    assert_eq!(
        scene.items_bounding_rect(),
        Some(Bounds::new(0.0, 0.0, 110.0, 10.0))
    );

    scene.reset();
    assert_eq!(scene.items_bounding_rect(), None);
}
