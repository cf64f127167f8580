//! Pointer gesture tracking: tells a click from a rubber-band drag.

use crate::model::Point;
use crate::spatial::Bounds;

/// Result of a completed press/release cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Pointer released without leaving the drag threshold.
    Click {
        point: Point,
        /// Square of half size `click_tolerance` centered on `point`.
        tolerance_rect: Bounds,
    },
    /// Pointer dragged past the threshold; the band in scene coordinates.
    RubberBand(Bounds),
}

/// Tracks the pointer between press and release.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    press: Option<Point>,
    band: Option<Bounds>,
    drag_threshold: f64,
    click_tolerance: f64,
}

impl PointerTracker {
    pub fn new(drag_threshold: f64, click_tolerance: f64) -> Self {
        Self {
            press: None,
            band: None,
            drag_threshold,
            click_tolerance,
        }
    }

    pub fn click_tolerance(&self) -> f64 {
        self.click_tolerance
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Rubber band currently shown, if any.
    pub fn band(&self) -> Option<Bounds> {
        self.band
    }

    pub fn press(&mut self, pos: Point) {
        self.press = Some(pos);
        self.band = None;
    }

    /// Updates the rubber band while the pointer is down.
    ///
    /// The band appears once the manhattan distance to the press point
    /// exceeds the drag threshold and stays active until release.
    pub fn move_to(&mut self, pos: Point) -> Option<Bounds> {
        let origin = self.press?;
        let manhattan = (pos.x - origin.x).abs() + (pos.y - origin.y).abs();
        if self.band.is_some() || manhattan > self.drag_threshold {
            self.band = Some(Bounds::from_corners(origin, pos));
        }
        self.band
    }

    /// Ends the gesture. Returns `None` if no press was recorded.
    pub fn release(&mut self, pos: Point) -> Option<Gesture> {
        let origin = self.press.take()?;
        let band = self.band.take();

        let manhattan = (pos.x - origin.x).abs() + (pos.y - origin.y).abs();
        if band.is_some() || manhattan > self.drag_threshold {
            return Some(Gesture::RubberBand(Bounds::from_corners(origin, pos)));
        }
        Some(Gesture::Click {
            point: pos,
            tolerance_rect: Bounds::around(pos, self.click_tolerance),
        })
    }

    /// Drops a pending gesture, e.g. when the pointer leaves the view.
    pub fn cancel(&mut self) {
        self.press = None;
        self.band = None;
    }

    /// Coordinate tooltip shown while dragging.
    ///
    /// The canvas Y axis points down, so Y is negated for display.
    pub fn tooltip(pos: Point) -> String {
        format!("X: {:3.1}; Y: {:3.1}", pos.x, -pos.y)
    }
}
