use anyhow::Context;
use routecanvas::{init_logging, route_by_layer, Config, DrawingFile, Scene, SceneConfig};
use std::path::PathBuf;

fn usage() -> String {
    "usage: routecanvas <drawing.json> [config.toml|config.json]".to_string()
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!(
        "RouteCanvas {} (built {})",
        routecanvas::VERSION,
        routecanvas::BUILD_DATE
    );

    let mut args = std::env::args().skip(1);
    let drawing_path = PathBuf::from(args.next().with_context(usage)?);

    let config = match args.next().map(PathBuf::from).or_else(Config::default_path) {
        Some(path) => Config::load_or_default(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let drawing = DrawingFile::load(&drawing_path)?;
    let mut scene = Scene::new(SceneConfig::from(&config));
    scene.load_shapes(drawing.into_imports()?);

    route_by_layer(&mut scene).context("Failed to build the export route")?;

    let chain = scene.route_chain();
    for connector in &chain.connectors {
        println!(
            "{:?}: ({:.3}, {:.3}) -> ({:.3}, {:.3})",
            connector.kind, connector.from.x, connector.from.y, connector.to.x, connector.to.y
        );
    }
    for label in &chain.labels {
        println!(
            "{} at ({:.3}, {:.3})",
            label.text, label.position.x, label.position.y
        );
    }

    Ok(())
}
