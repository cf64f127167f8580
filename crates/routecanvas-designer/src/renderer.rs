//! Render list builder for the canvas painter.
//!
//! Produces paint commands in back-to-front order:
//! - Shape outlines with the pen of their state
//! - Direction arrows and start moves of shapes showing overlays
//! - Export route connectors and labels
//! - Workpiece zero marker

use crate::model::Point;
use crate::overlays::DirectionArrow;
use crate::scene::Scene;
use crate::style::{Pen, PenKind, Rgb};
use lyon::path::Path;

/// Size of the workpiece zero cross in scene units.
pub const WP_ZERO_SIZE: f64 = 10.0;

#[derive(Debug, Clone)]
pub enum PaintItem {
    Shape {
        id: u64,
        path: Path,
        pen: Pen,
    },
    Arrow {
        owner: u64,
        tail: Point,
        tip: Point,
        fill: Rgb,
        pen: Rgb,
    },
    StartMove {
        owner: u64,
        from: Point,
        to: Point,
        pen: Pen,
    },
    Connector {
        from: Point,
        to: Point,
        color: Rgb,
    },
    Label {
        text: String,
        position: Point,
        color: Rgb,
    },
    WorkpieceZero {
        origin: Point,
        size: f64,
    },
}

fn arrow_item(arrow: &DirectionArrow) -> PaintItem {
    let (tail, tip) = arrow.shaft();
    PaintItem::Arrow {
        owner: arrow.owner(),
        tail,
        tip,
        fill: arrow.fill_color(),
        pen: arrow.pen_color(),
    }
}

/// Builds the paint commands for the current scene state.
///
/// Hidden shapes and their overlays are skipped. Overlays are drawn for
/// selected shapes, or for every visible shape while path direction
/// display is on.
pub fn render_list(scene: &Scene) -> Vec<PaintItem> {
    let mut items = Vec::new();
    let mut overlays = Vec::new();

    for shape in scene.store().iter().filter(|s| scene.is_visible(s)) {
        let kind = PenKind::for_state(shape.is_selected(), shape.is_disabled(), shape.cut_side());
        items.push(PaintItem::Shape {
            id: shape.id(),
            path: shape.path().render(),
            pen: kind.pen(),
        });

        if shape.is_selected() || scene.show_path_direction() {
            let o = shape.overlays();
            overlays.push(arrow_item(&o.start_arrow));
            overlays.push(arrow_item(&o.end_arrow));
            if let Some((from, to)) = o.start_move.lead_in() {
                overlays.push(PaintItem::StartMove {
                    owner: o.start_move.owner(),
                    from,
                    to,
                    pen: kind.pen(),
                });
            }
        }
    }
    items.append(&mut overlays);

    let chain = scene.route_chain();
    for connector in &chain.connectors {
        items.push(PaintItem::Connector {
            from: connector.from,
            to: connector.to,
            color: connector.color(),
        });
    }
    for label in &chain.labels {
        items.push(PaintItem::Label {
            text: label.text.clone(),
            position: label.position,
            color: Rgb::BLACK,
        });
    }

    if scene.show_wp_zero() {
        items.push(PaintItem::WorkpieceZero {
            origin: scene.origin(),
            size: WP_ZERO_SIZE,
        });
    }

    tracing::trace!("Built {} paint items", items.len());
    items
}
