//! Pens used to paint shapes, overlays and the export route.
//!
//! The pen of a shape encodes its state for the user, so the mapping in
//! [`PenKind::for_state`] must stay exactly as it is.

use crate::model::CutSide;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const GRAY: Rgb = Rgb(160, 160, 164);
    pub const DARK_CYAN: Rgb = Rgb(0, 128, 128);
    pub const DARK_MAGENTA: Rgb = Rgb(128, 0, 128);
    pub const DARK_RED: Rgb = Rgb(128, 0, 0);
    pub const DARK_GRAY: Rgb = Rgb(128, 128, 128);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    #[default]
    Solid,
    Dot,
    Dash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Square,
    Round,
}

/// Stroke description handed to the renderer.
///
/// A cosmetic pen keeps its width in screen pixels regardless of zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Rgb,
    pub width: f32,
    pub dash: LineDash,
    pub cap: LineCap,
    pub cosmetic: bool,
}

impl Pen {
    pub const fn solid(color: Rgb) -> Self {
        Self {
            color,
            width: 1.0,
            dash: LineDash::Solid,
            cap: LineCap::Square,
            cosmetic: false,
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Pen::solid(Rgb::BLACK)
    }
}

/// The six shape pens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenKind {
    Selection,
    LeftCompensation,
    RightCompensation,
    Default,
    SelectedDisabled,
    Disabled,
}

impl PenKind {
    /// Pen kind for a shape in the given state.
    ///
    /// Selection wins over compensation; the disabled flag wins over both.
    pub fn for_state(selected: bool, disabled: bool, cut_side: CutSide) -> Self {
        match (selected, disabled, cut_side) {
            (true, false, _) => PenKind::Selection,
            (false, false, CutSide::Left) => PenKind::LeftCompensation,
            (false, false, CutSide::Right) => PenKind::RightCompensation,
            (false, false, CutSide::None) => PenKind::Default,
            (true, true, _) => PenKind::SelectedDisabled,
            (false, true, _) => PenKind::Disabled,
        }
    }

    pub fn pen(self) -> Pen {
        match self {
            PenKind::Selection => Pen {
                color: Rgb::RED,
                width: 2.0,
                dash: LineDash::Solid,
                cap: LineCap::Round,
                cosmetic: true,
            },
            PenKind::LeftCompensation => Pen::solid(Rgb::DARK_CYAN),
            PenKind::RightCompensation => Pen::solid(Rgb::DARK_MAGENTA),
            PenKind::Default => Pen::solid(Rgb::BLACK),
            PenKind::SelectedDisabled => Pen {
                dash: LineDash::Dash,
                ..Pen::solid(Rgb::BLUE)
            },
            PenKind::Disabled => Pen {
                dash: LineDash::Dot,
                ..Pen::solid(Rgb::GRAY)
            },
        }
    }
}

/// Color of the first and the closing route connector.
pub const ROUTE_START_COLOR: Rgb = Rgb::DARK_RED;

/// Color of the connectors between shapes.
pub const ROUTE_TRAVEL_COLOR: Rgb = Rgb::DARK_GRAY;
