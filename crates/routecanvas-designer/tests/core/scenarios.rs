//! End-to-end canvas scenarios.

use crate::common::{record_all, square};
use routecanvas_designer::{Bounds, Consensus, CutSide, Notify, Point, Scene, SceneConfig};

#[test]
fn test_assign_then_toggle_scenario() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([square(0.0, 0.0, 10.0), square(50.0, 0.0, 10.0)]);
    let (a, b) = (1, 2);

    scene.select_all();
    scene.set_compensation(CutSide::Left);
    assert_eq!(scene.shape(a).unwrap().cut_side(), CutSide::Left);
    assert_eq!(scene.shape(b).unwrap().cut_side(), CutSide::Left);
    assert_eq!(scene.compensation_consensus(), Consensus::Left);

    scene.deselect_all();
    scene.set_selected(b, true, Notify::Listeners).unwrap();
    scene.toggle_compensation();
    assert_eq!(scene.shape(b).unwrap().cut_side(), CutSide::Right);
    assert_eq!(scene.shape(a).unwrap().cut_side(), CutSide::Left);
    assert_eq!(scene.compensation_consensus_for(&[a, b]), Consensus::Mixed);
}

#[test]
fn test_click_miss_scenario() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([square(0.0, 0.0, 10.0), square(50.0, 0.0, 10.0)]);
    scene.set_multi_select(true);
    scene.pick_at(&Point::new(0.0, 5.0));
    scene.pick_at(&Point::new(50.0, 5.0));
    let recorder = record_all(&mut scene);

    assert_eq!(scene.pick_at(&Point::new(30.0, 30.0)), None);
    scene.set_multi_select(false);
    assert_eq!(scene.pick_at(&Point::new(30.0, 30.0)), None);

    assert_eq!(scene.selected_ids(), vec![1, 2]);
    assert!(recorder.selection.lock().is_empty());
}

#[test]
fn test_drag_select_scenario() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([
        square(0.0, 0.0, 10.0),
        square(0.0, 50.0, 10.0),
        square(50.0, 0.0, 10.0),
    ]);
    let (a, b, c) = (1, 2, 3);
    let rect = Bounds::new(-1.0, -1.0, 70.0, 20.0);

    assert_eq!(scene.pick_in_rect(&rect), vec![a, c]);
    assert_eq!(scene.selected_ids(), vec![a, c]);
    assert!(!scene.shape(b).unwrap().is_selected());

    scene.pick_in_rect(&rect);
    assert!(scene.selected_ids().is_empty());
}

#[test]
fn test_full_workflow() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([
        square(0.0, 0.0, 10.0),
        square(20.0, 0.0, 10.0).locked(),
        square(40.0, 0.0, 10.0),
    ]);
    let recorder = record_all(&mut scene);

    scene.pick_in_rect(&Bounds::new(-1.0, -1.0, 60.0, 11.0));
    assert_eq!(scene.disable_selection(), 2);
    assert_eq!(*recorder.enabled.lock(), vec![(1, false), (3, false)]);

    scene.invert_selection();
    assert!(scene.selected_ids().is_empty());

    scene.set_show_disabled(true);
    scene.select_all();
    scene.switch_direction();
    scene.set_compensation(CutSide::Left);

    scene.begin_export_route();
    scene.add_export_route(&[1], "1").unwrap();
    scene.close_export_route();
    let chain = scene.route_chain();
    assert_eq!(chain.connectors.len(), 2);
    assert_eq!(chain.labels[0].text, "1,1");
    assert_eq!(chain.connectors[0].to, Point::new(20.0, 0.0));
}
