use crate::common::{line, square, three_squares};
use routecanvas_designer::{
    ContextMenu, CutSide, MachineKind, MenuAction, Point, Scene, SceneConfig,
};

fn checks(menu: &ContextMenu) -> Vec<bool> {
    menu.submenu("Cutter Compensation")
        .unwrap()
        .iter()
        .map(|entry| entry.checked.unwrap())
        .collect()
}

#[test]
fn test_no_menu_without_selection() {
    let scene = three_squares();
    assert!(ContextMenu::build(&scene, Point::new(0.0, 0.0)).is_none());
}

#[test]
fn test_menu_lists_actions() {
    let mut scene = three_squares();
    scene.select_all();
    let click = Point::new(7.0, 7.0);
    let menu = ContextMenu::build(&scene, click).unwrap();

    assert_eq!(
        menu.actions(),
        vec![
            MenuAction::InvertSelection,
            MenuAction::DisableSelection,
            MenuAction::EnableSelection,
            MenuAction::SwitchDirection,
            MenuAction::SetNearestStartPoint(click),
            MenuAction::Compensation(CutSide::None),
            MenuAction::Compensation(CutSide::Left),
            MenuAction::Compensation(CutSide::Right),
        ]
    );
    assert_eq!(checks(&menu), vec![true, false, false]);
}

#[test]
fn test_mixed_selection_checks_nothing() {
    let mut scene = three_squares();
    scene.set_compensation_for(&[1], CutSide::Right);
    scene.select_all();
    let menu = ContextMenu::build(&scene, Point::default()).unwrap();
    assert_eq!(checks(&menu), vec![false, false, false]);

    scene.set_compensation(CutSide::Right);
    let menu = ContextMenu::build(&scene, Point::default()).unwrap();
    assert_eq!(checks(&menu), vec![false, false, true]);
}

#[test]
fn test_drag_knife_menu_has_no_compensation() {
    let config = SceneConfig {
        machine_kind: MachineKind::DragKnife,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new(config);
    scene.load_shapes([line(0.0, 0.0, 10.0, 0.0)]);
    scene.select_all();

    let menu = ContextMenu::build(&scene, Point::default()).unwrap();
    assert!(menu.submenu("Cutter Compensation").is_none());
    assert_eq!(menu.actions().len(), 5);
}

#[test]
fn test_menu_actions_apply_to_selection() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes([square(0.0, 0.0, 10.0), square(100.0, 0.0, 10.0)]);
    scene.pick_at(&Point::new(5.0, 0.0));

    scene.apply_menu_action(MenuAction::Compensation(CutSide::Left));
    assert_eq!(scene.shape(1).unwrap().cut_side(), CutSide::Left);
    assert_eq!(scene.shape(2).unwrap().cut_side(), CutSide::None);

    scene.apply_menu_action(MenuAction::SetNearestStartPoint(Point::new(10.0, 10.0)));
    assert_eq!(
        scene.shape(1).unwrap().start_anchor().point,
        Point::new(10.0, 10.0)
    );

    scene.apply_menu_action(MenuAction::DisableSelection);
    assert!(scene.shape(1).unwrap().is_disabled());
    scene.apply_menu_action(MenuAction::EnableSelection);
    assert!(!scene.shape(1).unwrap().is_disabled());

    scene.apply_menu_action(MenuAction::InvertSelection);
    assert_eq!(scene.selected_ids(), vec![2]);
}
