use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

mod path;

pub use path::ShapePath;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Direction from `self` towards `other` in radians.
    pub fn angle_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Point at `distance` from `self` along `angle` (radians).
    pub fn polar(&self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }

    pub(crate) fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// A path end point together with the travel direction at that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub point: Point,
    /// Tangent angle in radians, pointing in the direction of travel.
    pub angle: f64,
}

impl Anchor {
    pub fn new(point: Point, angle: f64) -> Self {
        Self { point, angle }
    }

    /// Angle of the normal on the left-hand side of the travel direction.
    pub fn left_normal(&self) -> f64 {
        self.angle + FRAC_PI_2
    }

    /// Angle of the normal on the right-hand side of the travel direction.
    pub fn right_normal(&self) -> f64 {
        self.angle - FRAC_PI_2
    }
}

/// Tool radius compensation side, mapped onto G40/G41/G42.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CutSide {
    #[default]
    None,
    Left,
    Right,
}

impl CutSide {
    /// The G-code word selecting this compensation mode.
    pub fn gcode(self) -> u8 {
        match self {
            CutSide::None => 40,
            CutSide::Left => 41,
            CutSide::Right => 42,
        }
    }

    /// Swaps left and right; `None` stays `None`.
    pub fn toggled(self) -> Self {
        match self {
            CutSide::Left => CutSide::Right,
            CutSide::Right => CutSide::Left,
            CutSide::None => CutSide::None,
        }
    }
}

impl std::fmt::Display for CutSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CutSide::None => write!(f, "none"),
            CutSide::Left => write!(f, "left"),
            CutSide::Right => write!(f, "right"),
        }
    }
}
