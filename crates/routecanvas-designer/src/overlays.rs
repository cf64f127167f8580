//! Per-shape overlays: direction arrows and the compensation start move.
//!
//! Overlays are owned by the scene together with their shape. Each one keeps
//! the owning shape id only as a back reference for lookups; it never owns
//! or borrows the shape.

use crate::model::{Anchor, CutSide, Point, ShapePath};
use crate::style::Rgb;

/// Length of a direction arrow in scene units.
pub const ARROW_LENGTH: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowEnd {
    Start,
    End,
}

/// Arrow marking the travel direction at one end of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionArrow {
    owner: u64,
    end: ArrowEnd,
    anchor: Anchor,
}

impl DirectionArrow {
    pub fn owner(&self) -> u64 {
        self.owner
    }

    pub fn end(&self) -> ArrowEnd {
        self.end
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Shaft of the arrow, tail first.
    ///
    /// The start arrow leaves the start point along the travel direction;
    /// the end arrow arrives at the end point.
    pub fn shaft(&self) -> (Point, Point) {
        match self.end {
            ArrowEnd::Start => (
                self.anchor.point,
                self.anchor.point.polar(self.anchor.angle, ARROW_LENGTH),
            ),
            ArrowEnd::End => (
                self.anchor.point.polar(self.anchor.angle, -ARROW_LENGTH),
                self.anchor.point,
            ),
        }
    }

    pub fn fill_color(&self) -> Rgb {
        match self.end {
            ArrowEnd::Start => Rgb(50, 200, 255),
            ArrowEnd::End => Rgb(0, 245, 100),
        }
    }

    pub fn pen_color(&self) -> Rgb {
        match self.end {
            ArrowEnd::Start => Rgb(50, 100, 255),
            ArrowEnd::End => Rgb(0, 180, 50),
        }
    }
}

/// Lead-in move onto the start point, offset to the compensation side.
#[derive(Debug, Clone, PartialEq)]
pub struct StartMove {
    owner: u64,
    anchor: Anchor,
    cut_side: CutSide,
    radius: f64,
}

impl StartMove {
    pub fn owner(&self) -> u64 {
        self.owner
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn cut_side(&self) -> CutSide {
        self.cut_side
    }

    /// Lead-in segment ending on the start point, or `None` without compensation.
    pub fn lead_in(&self) -> Option<(Point, Point)> {
        let normal = match self.cut_side {
            CutSide::None => return None,
            CutSide::Left => self.anchor.left_normal(),
            CutSide::Right => self.anchor.right_normal(),
        };
        Some((self.anchor.point.polar(normal, self.radius), self.anchor.point))
    }
}

/// Everything drawn on top of a shape that derives from its anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOverlays {
    pub start_arrow: DirectionArrow,
    pub end_arrow: DirectionArrow,
    pub start_move: StartMove,
}

impl ShapeOverlays {
    pub(crate) fn build(owner: u64, path: &ShapePath, cut_side: CutSide, radius: f64) -> Self {
        let start = path.start_anchor();
        let end = path.end_anchor();
        Self {
            start_arrow: DirectionArrow {
                owner,
                end: ArrowEnd::Start,
                anchor: start,
            },
            end_arrow: DirectionArrow {
                owner,
                end: ArrowEnd::End,
                anchor: end,
            },
            start_move: StartMove {
                owner,
                anchor: start,
                cut_side,
                radius,
            },
        }
    }

    pub(crate) fn start_move_radius(&self) -> f64 {
        self.start_move.radius
    }
}
