use routecanvas_designer::{CutSide, DrawingFile, Point, Scene, SceneConfig};
use tempfile::TempDir;

const DRAWING: &str = r#"{
    "version": "1.0",
    "name": "bracket",
    "shapes": [
        { "vertices": [[0, 0], [40, 0], [40, 20], [0, 20]], "closed": true, "layer": "outline", "cut_side": "right" },
        { "vertices": [[10, 10], [30, 10]], "layer": "engrave", "disabled": true },
        { "vertices": [[-5, -5], [45, -5]], "allowed_to_change": false, "disabled": true }
    ]
}"#;

#[test]
fn test_drawing_loads_into_scene() {
    let drawing = DrawingFile::from_json(DRAWING).unwrap();
    assert_eq!(drawing.name, "bracket");

    let mut scene = Scene::new(SceneConfig::default());
    let ids = scene.load_shapes(drawing.into_imports().unwrap());
    assert_eq!(ids, vec![1, 2, 3]);

    let outline = scene.shape(1).unwrap();
    assert!(outline.is_closed());
    assert_eq!(outline.layer(), Some("outline"));
    assert_eq!(outline.cut_side(), CutSide::Right);
    assert!(scene.shape(2).unwrap().is_disabled());

    let reference = scene.shape(3).unwrap();
    assert!(!reference.allowed_to_change());
    assert!(!reference.is_disabled());
}

#[test]
fn test_drawing_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bracket.json");

    let drawing = DrawingFile::from_json(DRAWING).unwrap();
    drawing.save(&path).unwrap();
    let loaded = DrawingFile::load(&path).unwrap();

    assert_eq!(loaded.shapes.len(), 3);
    assert_eq!(loaded.shapes[0].vertices[2], [40.0, 20.0]);
    assert_eq!(loaded.shapes[0].cut_side, CutSide::Right);
}

#[test]
fn test_missing_drawing_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");
    let err = DrawingFile::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.json"));
}

#[test]
fn test_reloading_assigns_fresh_ids() {
    let mut scene = Scene::new(SceneConfig::default());
    scene.load_shapes(DrawingFile::from_json(DRAWING).unwrap().into_imports().unwrap());
    let ids = scene.load_shapes(DrawingFile::from_json(DRAWING).unwrap().into_imports().unwrap());
    assert_eq!(ids, vec![4, 5, 6]);
    assert_eq!(scene.pick_at(&Point::new(20.0, 0.0)), Some(4));
}
