//! Cutter compensation (G40/G41/G42) per shape.

use crate::model::CutSide;
use crate::shape_store::ShapeStore;
use routecanvas_core::MachineKind;

/// Common compensation side across a selection.
///
/// An empty selection reports [`Consensus::None`], exactly like a selection
/// that agrees on no compensation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consensus {
    None,
    Left,
    Right,
    Mixed,
}

impl From<CutSide> for Consensus {
    fn from(side: CutSide) -> Self {
        match side {
            CutSide::None => Consensus::None,
            CutSide::Left => Consensus::Left,
            CutSide::Right => Consensus::Right,
        }
    }
}

/// Checked state of the three compensation menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompensationMenuState {
    pub none: bool,
    pub left: bool,
    pub right: bool,
}

impl From<Consensus> for CompensationMenuState {
    fn from(consensus: Consensus) -> Self {
        Self {
            none: consensus == Consensus::None,
            left: consensus == Consensus::Left,
            right: consensus == Consensus::Right,
        }
    }
}

/// Assigns, toggles and summarizes the compensation side of shapes.
///
/// Operations work on any set of ids; availability only tells the menu
/// layer whether to offer them for the configured machine.
#[derive(Debug, Clone)]
pub struct CompensationManager {
    machine_kind: MachineKind,
}

impl CompensationManager {
    pub fn new(machine_kind: MachineKind) -> Self {
        Self { machine_kind }
    }

    pub fn machine_kind(&self) -> MachineKind {
        self.machine_kind
    }

    /// Whether compensation controls should be offered at all.
    pub fn is_available(&self) -> bool {
        self.machine_kind.supports_compensation()
    }

    /// Sets `side` on every listed shape, unconditionally.
    ///
    /// Start moves are rebuilt even when the side did not change. Returns
    /// the number of shapes whose side changed; unknown ids are ignored.
    pub fn assign(&self, store: &mut ShapeStore, ids: &[u64], side: CutSide) -> usize {
        let mut changed = 0;
        for &id in ids {
            if let Some(shape) = store.get_mut(id) {
                if shape.set_cut_side(side) {
                    changed += 1;
                }
                tracing::debug!("Changed cutter compensation to {} at shape {}", side, id);
            }
        }
        changed
    }

    /// Swaps left and right on every listed shape; `None` stays untouched.
    ///
    /// The path direction is not reversed.
    pub fn toggle(&self, store: &mut ShapeStore, ids: &[u64]) -> usize {
        let mut changed = 0;
        for &id in ids {
            if let Some(shape) = store.get_mut(id) {
                let side = shape.cut_side().toggled();
                if shape.set_cut_side(side) {
                    changed += 1;
                    tracing::debug!("Toggled cutter compensation to {} at shape {}", side, id);
                }
            }
        }
        changed
    }

    /// The side shared by every listed shape, or `Mixed`.
    pub fn consensus(&self, store: &ShapeStore, ids: &[u64]) -> Consensus {
        let mut sides = ids.iter().filter_map(|&id| store.get(id)).map(|s| s.cut_side());
        let Some(first) = sides.next() else {
            return Consensus::None;
        };
        if sides.all(|side| side == first) {
            first.into()
        } else {
            Consensus::Mixed
        }
    }

    /// Menu check marks for the listed shapes.
    pub fn menu_state(&self, store: &ShapeStore, ids: &[u64]) -> CompensationMenuState {
        self.consensus(store, ids).into()
    }
}
