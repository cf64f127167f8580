use crate::common::{line, three_squares};
use routecanvas_designer::{
    CompensationMenuState, Consensus, CutSide, MachineKind, Point, Scene, SceneConfig,
};

#[test]
fn test_assign_sets_side_on_selection() {
    let mut scene = three_squares();
    scene.select_all();
    assert_eq!(scene.set_compensation(CutSide::Left), 3);
    assert!(scene
        .store()
        .iter()
        .all(|s| s.cut_side() == CutSide::Left));
    assert_eq!(scene.compensation_consensus(), Consensus::Left);

    // Assigning the same side again changes nothing.
    assert_eq!(scene.set_compensation(CutSide::Left), 0);
}

#[test]
fn test_assign_ignores_disabled_gate() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([line(0.0, 0.0, 10.0, 0.0).locked().disabled(true)]);
    scene.select_all();
    assert_eq!(scene.set_compensation(CutSide::Right), 1);
    assert_eq!(scene.shape(1).unwrap().cut_side(), CutSide::Right);
}

#[test]
fn test_toggle_swaps_left_and_right_only() {
    let mut scene = three_squares();
    scene.set_compensation_for(&[1], CutSide::Left);
    scene.set_compensation_for(&[2], CutSide::Right);

    assert_eq!(scene.toggle_compensation_for(&[1, 2, 3]), 2);
    assert_eq!(scene.shape(1).unwrap().cut_side(), CutSide::Right);
    assert_eq!(scene.shape(2).unwrap().cut_side(), CutSide::Left);
    assert_eq!(scene.shape(3).unwrap().cut_side(), CutSide::None);
}

#[test]
fn test_toggle_keeps_direction() {
    let mut scene = three_squares();
    scene.set_compensation_for(&[1], CutSide::Left);
    let before = scene.shape(1).unwrap().path().clone();
    scene.toggle_compensation_for(&[1]);
    assert_eq!(scene.shape(1).unwrap().path(), &before);
}

#[test]
fn test_consensus_of_mixed_selection() {
    let mut scene = three_squares();
    scene.set_compensation_for(&[1, 2], CutSide::Left);
    assert_eq!(scene.compensation_consensus_for(&[1, 2]), Consensus::Left);
    assert_eq!(scene.compensation_consensus_for(&[1, 2, 3]), Consensus::Mixed);
    assert_eq!(scene.compensation_consensus_for(&[3]), Consensus::None);
}

#[test]
fn test_empty_selection_reads_as_none() {
    let scene = three_squares();
    assert_eq!(scene.compensation_consensus(), Consensus::None);
    assert_eq!(
        scene.compensation_menu_state(),
        CompensationMenuState {
            none: true,
            left: false,
            right: false
        }
    );
}

#[test]
fn test_mixed_checks_no_menu_entry() {
    assert_eq!(
        CompensationMenuState::from(Consensus::Mixed),
        CompensationMenuState::default()
    );
}

#[test]
fn test_drag_knife_hides_compensation_but_keeps_operations() {
    let config = SceneConfig {
        machine_kind: MachineKind::DragKnife,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new(config);
    scene.load_shapes([line(0.0, 0.0, 10.0, 0.0)]);
    assert!(!scene.compensation_available());

    scene.pick_at(&Point::new(5.0, 0.0));
    assert_eq!(scene.set_compensation(CutSide::Left), 1);
    assert_eq!(scene.compensation_consensus(), Consensus::Left);
}

#[test]
fn test_compensation_rebuilds_start_move() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([line(0.0, 0.0, 10.0, 0.0)]);
    assert_eq!(scene.shape(1).unwrap().overlays().start_move.lead_in(), None);

    scene.set_compensation_for(&[1], CutSide::Left);
    let (from, to) = scene
        .shape(1)
        .unwrap()
        .overlays()
        .start_move
        .lead_in()
        .unwrap();
    assert_eq!(to, Point::new(0.0, 0.0));
    assert!(from.y > 0.0);
}
