//! Drawing files.
//!
//! A drawing is a JSON document listing the imported outlines with their
//! initial machining state. It stands in for a DXF importer when feeding
//! a scene from the command line or from tests.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{CutSide, Point, ShapePath};
use crate::shapes::ImportedShape;

/// Drawing file format version
const FILE_FORMAT_VERSION: &str = "1.0";

fn default_version() -> String {
    FILE_FORMAT_VERSION.to_string()
}

fn default_allowed() -> bool {
    true
}

/// Complete drawing file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingFile {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub name: String,
    pub shapes: Vec<DrawingShape>,
}

/// One outline of a drawing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingShape {
    pub vertices: Vec<[f64; 2]>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub cut_side: CutSide,
    #[serde(default = "default_allowed")]
    pub allowed_to_change: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl DrawingFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: default_version(),
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse drawing")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize drawing")
    }

    /// Load a drawing from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read drawing {}", path.display()))?;
        let drawing = Self::from_json(&content)
            .with_context(|| format!("Invalid drawing {}", path.display()))?;
        tracing::info!(
            "Loaded drawing '{}' with {} shapes from {}",
            drawing.name,
            drawing.shapes.len(),
            path.display()
        );
        Ok(drawing)
    }

    /// Save the drawing to file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write drawing {}", path.display()))
    }

    /// Converts the outlines into shapes ready for [`crate::Scene::load_shapes`].
    pub fn into_imports(self) -> Result<Vec<ImportedShape>> {
        self.shapes
            .into_iter()
            .enumerate()
            .map(|(index, shape)| {
                shape
                    .into_import()
                    .with_context(|| format!("Shape {} of the drawing", index))
            })
            .collect()
    }
}

impl DrawingShape {
    fn into_import(self) -> Result<ImportedShape> {
        let vertices = self
            .vertices
            .into_iter()
            .map(|[x, y]| Point::new(x, y))
            .collect();
        let path = ShapePath::new(vertices, self.closed)?;

        let mut imported = ImportedShape::new(path)
            .with_cut_side(self.cut_side)
            .disabled(self.disabled);
        if let Some(layer) = self.layer {
            imported = imported.with_layer(layer);
        }
        if !self.allowed_to_change {
            imported = imported.locked();
        }
        Ok(imported)
    }
}
