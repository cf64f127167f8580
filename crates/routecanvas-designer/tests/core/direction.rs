use crate::common::{line, square};
use routecanvas_designer::{CutSide, Point, Scene, SceneConfig, SceneError};
use std::f64::consts::PI;

fn scene_with_line_and_square() -> Scene {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([line(0.0, 0.0, 10.0, 0.0), square(100.0, 0.0, 10.0)]);
    scene
}

#[test]
fn test_reverse_open_shape_swaps_ends() {
    let mut scene = scene_with_line_and_square();
    scene.reverse_shape(1).unwrap();

    let shape = scene.shape(1).unwrap();
    assert_eq!(shape.start_anchor().point, Point::new(10.0, 0.0));
    assert_eq!(shape.end_anchor().point, Point::new(0.0, 0.0));
    assert!((shape.start_anchor().angle.abs() - PI).abs() < 1e-9);
}

#[test]
fn test_reverse_rebuilds_overlays_from_new_anchors() {
    let mut scene = scene_with_line_and_square();
    scene.set_compensation_for(&[1], CutSide::Left);
    scene.reverse_shape(1).unwrap();

    let shape = scene.shape(1).unwrap();
    let overlays = shape.overlays();
    assert_eq!(overlays.start_arrow.anchor(), shape.start_anchor());
    assert_eq!(overlays.end_arrow.anchor(), shape.end_anchor());
    assert_eq!(overlays.start_move.anchor(), shape.start_anchor());
    assert_eq!(shape.cut_side(), CutSide::Left);

    // Travelling towards -x the left-hand side is -y.
    let (from, to) = overlays.start_move.lead_in().unwrap();
    assert_eq!(to, Point::new(10.0, 0.0));
    assert!(from.y < 0.0);
}

#[test]
fn test_reverse_closed_shape_keeps_start() {
    let mut scene = scene_with_line_and_square();
    scene.reverse_shape(2).unwrap();

    let shape = scene.shape(2).unwrap();
    assert_eq!(shape.start_anchor().point, Point::new(100.0, 0.0));
    assert_eq!(shape.path().vertices()[1], Point::new(100.0, 10.0));
}

#[test]
fn test_reverse_twice_restores_path() {
    let mut scene = scene_with_line_and_square();
    let before = scene.shape(2).unwrap().path().clone();
    scene.reverse_shape(2).unwrap();
    scene.reverse_shape(2).unwrap();
    assert_eq!(scene.shape(2).unwrap().path(), &before);
}

#[test]
fn test_switch_direction_only_touches_selection() {
    let mut scene = scene_with_line_and_square();
    scene.pick_at(&Point::new(5.0, 0.0));
    assert_eq!(scene.switch_direction(), vec![1]);
    assert_eq!(
        scene.shape(2).unwrap().path().vertices()[1],
        Point::new(110.0, 0.0)
    );
}

#[test]
fn test_nearest_start_point_reroots_closed_shape() {
    let mut scene = scene_with_line_and_square();
    scene
        .set_nearest_start_point(2, &Point::new(111.0, 12.0))
        .unwrap();

    let shape = scene.shape(2).unwrap();
    assert_eq!(shape.start_anchor().point, Point::new(110.0, 10.0));
    assert_eq!(shape.end_anchor().point, Point::new(110.0, 10.0));
    assert_eq!(shape.overlays().start_arrow.anchor(), shape.start_anchor());
}

#[test]
fn test_nearest_start_point_rejects_open_shape() {
    let mut scene = scene_with_line_and_square();
    let result = scene.set_nearest_start_point(1, &Point::new(10.0, 0.0));
    assert!(matches!(
        result,
        Err(SceneError::InvalidOperation { shape_id: 1, .. })
    ));
    assert_eq!(scene.shape(1).unwrap().start_anchor().point, Point::new(0.0, 0.0));
}

#[test]
fn test_bulk_reroot_skips_open_shapes() {
    let mut scene = scene_with_line_and_square();
    scene.select_all();
    let rerooted = scene.set_nearest_start_point_selected(&Point::new(100.0, 12.0));
    assert_eq!(rerooted, vec![2]);
    assert_eq!(
        scene.shape(2).unwrap().start_anchor().point,
        Point::new(100.0, 10.0)
    );
}
