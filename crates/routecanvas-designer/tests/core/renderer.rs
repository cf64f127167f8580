use crate::common::three_squares;
use routecanvas_designer::{
    render_list, CutSide, LineDash, Notify, PaintItem, PenKind, Point, Rgb, SharedScene,
};

fn shape_pens(items: &[PaintItem]) -> Vec<(u64, Rgb)> {
    items
        .iter()
        .filter_map(|item| match item {
            PaintItem::Shape { id, pen, .. } => Some((*id, pen.color)),
            _ => None,
        })
        .collect()
}

fn arrow_count(items: &[PaintItem]) -> usize {
    items
        .iter()
        .filter(|item| matches!(item, PaintItem::Arrow { .. }))
        .count()
}

#[test]
fn test_style_table() {
    use CutSide::*;
    let cases = [
        (true, false, Left, PenKind::Selection),
        (false, false, Left, PenKind::LeftCompensation),
        (false, false, Right, PenKind::RightCompensation),
        (false, false, None, PenKind::Default),
        (true, true, Right, PenKind::SelectedDisabled),
        (false, true, Left, PenKind::Disabled),
    ];
    for (selected, disabled, side, expected) in cases {
        assert_eq!(PenKind::for_state(selected, disabled, side), expected);
    }
    assert_eq!(PenKind::Selection.pen().color, Rgb(255, 0, 0));
    assert_eq!(PenKind::Selection.pen().width, 2.0);
    assert_eq!(PenKind::Disabled.pen().color, Rgb(160, 160, 164));
    assert_eq!(PenKind::SelectedDisabled.pen().dash, LineDash::Dash);
}

#[test]
fn test_pens_follow_shape_state() {
    let mut scene = three_squares();
    scene.set_compensation_for(&[2], CutSide::Left);
    scene.set_compensation_for(&[3], CutSide::Right);
    scene.set_selected(1, true, Notify::Silent).unwrap();

    assert_eq!(
        shape_pens(&render_list(&scene)),
        vec![
            (1, Rgb(255, 0, 0)),
            (2, Rgb(0, 128, 128)),
            (3, Rgb(128, 0, 128)),
        ]
    );
}

#[test]
fn test_hidden_shapes_are_not_painted() {
    let mut scene = three_squares();
    scene.set_disabled(2, true, Notify::Silent).unwrap();
    let ids: Vec<u64> = shape_pens(&render_list(&scene))
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    scene.set_show_disabled(true);
    assert_eq!(
        shape_pens(&render_list(&scene))[1],
        (2, Rgb(160, 160, 164))
    );
}

#[test]
fn test_overlays_follow_selection_or_direction_flag() {
    let mut scene = three_squares();
    scene.set_show_wp_zero(false);
    assert_eq!(arrow_count(&render_list(&scene)), 0);

    scene.pick_at(&Point::new(5.0, 0.0));
    assert_eq!(arrow_count(&render_list(&scene)), 2);

    scene.set_show_path_direction(true);
    assert_eq!(arrow_count(&render_list(&scene)), 6);
}

#[test]
fn test_route_and_zero_marker_are_painted() {
    let mut scene = three_squares();
    scene.sequence_export_route(&[0, 1], "1").unwrap();
    let items = render_list(&scene);

    let connectors = items
        .iter()
        .filter(|item| matches!(item, PaintItem::Connector { .. }))
        .count();
    let labels: Vec<&str> = items
        .iter()
        .filter_map(|item| match item {
            PaintItem::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(connectors, 2);
    assert_eq!(labels, vec!["1,1", "1,2"]);
    assert!(matches!(
        items.last(),
        Some(PaintItem::WorkpieceZero { .. })
    ));
}

#[test]
fn test_shared_snapshot_matches_scene() {
    let shared = SharedScene::from_scene(three_squares());
    shared.write(|scene| scene.select_all());
    let snapshot = shared.render_snapshot();
    assert_eq!(arrow_count(&snapshot), 6);
}
