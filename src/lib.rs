//! # RouteCanvas
//!
//! The canvas core of a CAM layout tool: shapes imported from a drawing are
//! picked by click or rubber band, enabled or disabled, given a cutter
//! compensation side, reversed or re-rooted, and threaded into an export
//! route that previews the machining order.
//!
//! ## Architecture
//!
//! RouteCanvas is organized as a workspace with multiple crates:
//!
//! 1. **routecanvas-core** - Errors, the shape listener trait, machine kind, shared-state aliases
//! 2. **routecanvas-settings** - Configuration file handling and validation
//! 3. **routecanvas-designer** - Scene, selection, compensation, route and rendering model
//! 4. **routecanvas** - Main binary that integrates all crates

pub use routecanvas_designer as designer;
pub use routecanvas_settings as settings;

pub use routecanvas_core::{
    ConfigError, Error, MachineKind, Notify, Result, SceneError, ShapeListener,
};

pub use routecanvas_designer::{
    Bounds, ContextMenu, CutSide, DrawingFile, Gesture, ImportedShape, MenuAction, PaintItem,
    Point, PointerTracker, RouteChain, Scene, SceneConfig, ShapePath, SharedScene,
};

pub use routecanvas_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Builds the export route of every enabled shape, one group per layer.
///
/// Layers are numbered from 1 in order of first appearance; shapes without
/// a layer share group 0. Shapes keep their draw order inside a group.
pub fn route_by_layer(scene: &mut Scene) -> std::result::Result<(), SceneError> {
    let mut layers: Vec<(Option<String>, Vec<usize>)> = Vec::new();
    for (index, shape) in scene.store().iter().enumerate() {
        if shape.is_disabled() {
            continue;
        }
        let layer = shape.layer().map(str::to_string);
        match layers.iter_mut().find(|(name, _)| *name == layer) {
            Some((_, order)) => order.push(index),
            None => layers.push((layer, vec![index])),
        }
    }

    scene.begin_export_route();
    let mut number = 0;
    for (name, order) in &layers {
        let group = match name {
            Some(_) => {
                number += 1;
                number
            }
            None => 0,
        };
        scene.add_export_route(order, &group.to_string())?;
    }
    scene.close_export_route();
    Ok(())
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
