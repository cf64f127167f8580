//! # RouteCanvas Designer
//!
//! The interactive 2D canvas of a CAM layout: imported outlines are picked
//! by click or rubber band, enabled or disabled, given a cutter
//! compensation side, reversed or re-rooted, and threaded into an export
//! route that shows the machining order.
//!
//! ## Core Components
//!
//! - **Model**: points, anchors, cut sides and the immutable [`ShapePath`]
//! - **Path sampling**: fixed 101-sample point-to-path distance
//! - **Selection**: click and rubber-band picking, invert, silent mirroring
//! - **Visibility**: enable/disable with the allowed-to-change gate
//! - **Compensation**: G40/G41/G42 assignment, toggle and consensus
//! - **Direction**: reversal and nearest start point
//! - **Route**: export-order connectors and labels with a running cursor
//! - **Rendering**: pens per state and a paint list for the painter
//!
//! ## Architecture
//!
//! ```text
//! Scene (owns shapes, composes operations, dispatches notifications)
//!   ├── ShapeStore (draw order, ids)
//!   │     └── CamShape (path, state, overlays)
//!   ├── SelectionManager ── path_sampler
//!   ├── VisibilityManager
//!   ├── CompensationManager
//!   ├── direction
//!   └── RouteSequencer
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use routecanvas_designer::{ImportedShape, Point, Scene, SceneConfig, ShapePath};
//!
//! let mut scene = Scene::new(SceneConfig::default());
//! let square = ShapePath::new(
//!     vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(10.0, 0.0),
//!         Point::new(10.0, 10.0),
//!         Point::new(0.0, 10.0),
//!     ],
//!     true,
//! )?;
//! scene.load_shapes([ImportedShape::new(square)]);
//!
//! assert_eq!(scene.pick_at(&Point::new(10.0, 5.0)), Some(1));
//! scene.sequence_export_route(&[0], "1")?;
//! assert_eq!(scene.route_chain().labels[0].text, "1,1");
//! # Ok::<(), routecanvas_core::SceneError>(())
//! ```

pub mod compensation;
pub mod context_menu;
pub mod direction;
pub mod input;
pub mod listeners;
pub mod model;
pub mod overlays;
pub mod path_sampler;
pub mod renderer;
pub mod route;
pub mod scene;
pub mod selection_manager;
pub mod serialization;
pub mod shape_store;
pub mod shapes;
pub mod shared;
pub mod spatial;
pub mod style;
pub mod visibility;

pub use compensation::{CompensationManager, CompensationMenuState, Consensus};
pub use context_menu::{ContextMenu, MenuAction, MenuEntry, MenuItem};
pub use input::{Gesture, PointerTracker};
pub use listeners::ShapeEvent;
pub use model::{Anchor, CutSide, Point, ShapePath};
pub use overlays::{ArrowEnd, DirectionArrow, ShapeOverlays, StartMove};
pub use renderer::{render_list, PaintItem};
pub use route::{Connector, ConnectorKind, RouteChain, RouteLabel, RouteSequencer};
pub use scene::{Scene, SceneConfig};
pub use selection_manager::SelectionManager;
pub use serialization::{DrawingFile, DrawingShape};
pub use shape_store::ShapeStore;
pub use shapes::{CamShape, ImportedShape};
pub use shared::SharedScene;
pub use spatial::Bounds;
pub use style::{LineCap, LineDash, Pen, PenKind, Rgb};
pub use visibility::VisibilityManager;

pub use routecanvas_core::{MachineKind, Notify, SceneError, ShapeListener};
pub use routecanvas_settings::HitRegion;
