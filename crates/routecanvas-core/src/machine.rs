//! Machine kinds supported by the export pipeline.

use serde::{Deserialize, Serialize};

/// Kind of machine the drawing is prepared for.
///
/// Cutter compensation is only offered for machines that can offset the
/// tool sideways; a drag knife follows the outline exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MachineKind {
    #[default]
    Milling,
    Lathe,
    DragKnife,
}

impl MachineKind {
    /// Returns `true` if G41/G42 cutter compensation applies to this machine.
    pub fn supports_compensation(self) -> bool {
        !matches!(self, MachineKind::DragKnife)
    }
}

impl std::fmt::Display for MachineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Milling => write!(f, "milling"),
            Self::Lathe => write!(f, "lathe"),
            Self::DragKnife => write!(f, "drag_knife"),
        }
    }
}

impl std::str::FromStr for MachineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "milling" => Ok(Self::Milling),
            "lathe" => Ok(Self::Lathe),
            "drag_knife" | "dragknife" => Ok(Self::DragKnife),
            _ => Err(format!("Unknown machine kind: {}", s)),
        }
    }
}
