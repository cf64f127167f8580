//! Imported shapes and their per-shape machining state.

use crate::model::{Anchor, CutSide, ShapePath};
use crate::overlays::ShapeOverlays;
use crate::spatial::Bounds;

/// Description of a shape handed over by the importer.
#[derive(Debug, Clone)]
pub struct ImportedShape {
    pub path: ShapePath,
    pub layer: Option<String>,
    pub cut_side: CutSide,
    pub allowed_to_change: bool,
    pub disabled: bool,
}

impl ImportedShape {
    pub fn new(path: ShapePath) -> Self {
        Self {
            path,
            layer: None,
            cut_side: CutSide::None,
            allowed_to_change: true,
            disabled: false,
        }
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    pub fn with_cut_side(mut self, cut_side: CutSide) -> Self {
        self.cut_side = cut_side;
        self
    }

    /// Marks the shape as reference geometry that can never be disabled.
    pub fn locked(mut self) -> Self {
        self.allowed_to_change = false;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A shape on the canvas.
///
/// The selected flag is written only by the selection manager and the
/// disabled flag only through [`CamShape::set_disabled`], which enforces the
/// allowed-to-change gate.
#[derive(Debug, Clone)]
pub struct CamShape {
    id: u64,
    layer: Option<String>,
    path: ShapePath,
    cut_side: CutSide,
    selected: bool,
    disabled: bool,
    allowed_to_change: bool,
    overlays: ShapeOverlays,
}

impl CamShape {
    pub(crate) fn from_import(id: u64, imported: ImportedShape, start_move_radius: f64) -> Self {
        let overlays = ShapeOverlays::build(
            id,
            &imported.path,
            imported.cut_side,
            start_move_radius,
        );
        // Reference geometry starts enabled whatever the importer said.
        let disabled = imported.disabled && imported.allowed_to_change;
        Self {
            id,
            layer: imported.layer,
            path: imported.path,
            cut_side: imported.cut_side,
            selected: false,
            disabled,
            allowed_to_change: imported.allowed_to_change,
            overlays,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn layer(&self) -> Option<&str> {
        self.layer.as_deref()
    }

    pub fn path(&self) -> &ShapePath {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.path.is_closed()
    }

    pub fn cut_side(&self) -> CutSide {
        self.cut_side
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn allowed_to_change(&self) -> bool {
        self.allowed_to_change
    }

    pub fn overlays(&self) -> &ShapeOverlays {
        &self.overlays
    }

    pub fn bounds(&self) -> Bounds {
        self.path.bounds()
    }

    pub fn start_anchor(&self) -> Anchor {
        self.path.start_anchor()
    }

    pub fn end_anchor(&self) -> Anchor {
        self.path.end_anchor()
    }

    /// Sets the selected flag; returns `true` if it changed.
    pub(crate) fn set_selected(&mut self, selected: bool) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }

    /// Sets the disabled flag; returns `true` if it changed.
    ///
    /// Shapes that are not allowed to change are never disabled.
    pub(crate) fn set_disabled(&mut self, disabled: bool) -> bool {
        if disabled && !self.allowed_to_change {
            return false;
        }
        let changed = self.disabled != disabled;
        self.disabled = disabled;
        changed
    }

    /// Sets the compensation side and rebuilds the start move.
    pub(crate) fn set_cut_side(&mut self, cut_side: CutSide) -> bool {
        let changed = self.cut_side != cut_side;
        self.cut_side = cut_side;
        self.rebuild_overlays();
        changed
    }

    /// Replaces the path and everything derived from it in one step.
    pub(crate) fn replace_path(&mut self, path: ShapePath) {
        let overlays = ShapeOverlays::build(
            self.id,
            &path,
            self.cut_side,
            self.overlays.start_move_radius(),
        );
        self.path = path;
        self.overlays = overlays;
    }

    fn rebuild_overlays(&mut self) {
        self.overlays = ShapeOverlays::build(
            self.id,
            &self.path,
            self.cut_side,
            self.overlays.start_move_radius(),
        );
    }
}
