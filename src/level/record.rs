//! # Level Record
//!
//! The canonical serializable level description shared by the designer's
//! output and externally authored JSON files. The grid rows are the
//! authoritative layout; `spawn`, `goal`, and `enemies` are optional fields
//! that only take effect where the grid carries no corresponding symbol
//! (spawn/goal) or that merge with it (enemies) — see the expander for the
//! precedence rules.

use crate::level::GridPos;
use crate::PlatforgeResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable description of one level.
///
/// Produced by [`Designer::build`](crate::Designer::build) or deserialized
/// from JSON. A record loaded from an external file may violate the
/// invariants the designer enforces (missing or duplicate singleton markers);
/// run it through [`validate`](crate::validate) before expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    /// Stable identifier, if the level has been saved before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Text rows over the alphabet `{. S P G E}`, top row first.
    pub grid: Vec<String>,

    /// Player spawn, authoritative only when the grid holds no `P`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn: Option<GridPos>,

    /// Goal position, authoritative only when the grid holds no `G`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GridPos>,

    /// Extra enemy spawns, merged with (not replacing) grid-derived `E` cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemies: Option<Vec<GridPos>>,

    /// Visual theme name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Color palette for the host's material selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,

    /// Deferred skybox asset request, passed through to the host verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skybox: Option<Skybox>,

    /// Open metadata map, passed through opaquely. Known conventions:
    /// `version` (int, schema version) and `difficulty` (string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
}

impl LevelRecord {
    /// Parses a record from a JSON string.
    pub fn from_json(json: &str) -> PlatforgeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the record to pretty-printed JSON.
    pub fn to_json(&self) -> PlatforgeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a record from a JSON file on disk.
    pub fn load(path: &Path) -> PlatforgeResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let record = Self::from_json(&contents)?;
        log::debug!(
            "loaded level record {} ({}x{}) from {}",
            record.id.as_deref().unwrap_or("<unnamed>"),
            record.width,
            record.height,
            path.display()
        );
        Ok(record)
    }

    /// Writes the record as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> PlatforgeResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Schema version from `meta.version`, if present and integral.
    pub fn schema_version(&self) -> Option<i64> {
        self.meta.as_ref()?.get("version")?.as_i64()
    }
}

/// Color palette for level rendering. All fields are optional so that the
/// designer's partial-merge semantics survive serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Palette {
    /// Shallow merge: fields present in `other` overwrite, fields absent in
    /// `other` keep their current value.
    pub fn merge(&mut self, other: Palette) {
        if other.background.is_some() {
            self.background = other.background;
        }
        if other.primary.is_some() {
            self.primary = other.primary;
        }
        if other.accent.is_some() {
            self.accent = other.accent;
        }
    }
}

/// Origin of a skybox image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkyboxSource {
    /// Generated from a text prompt.
    Imagen,
    /// Uploaded by the level author.
    User,
}

/// A skybox asset request. The core never fetches the URL; the host does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skybox {
    pub url: String,
    pub source: SkyboxSource,
    /// Generation prompt, kept for provenance when `source` is `imagen`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Helper for structural dimension checks shared by the designer and the
/// validator. Returns an error message per mismatch, in row order.
pub(crate) fn dimension_mismatches(record: &LevelRecord) -> Vec<String> {
    let mut problems = Vec::new();
    if record.grid.len() != record.height as usize {
        problems.push(format!(
            "grid has {} rows, declared height is {}",
            record.grid.len(),
            record.height
        ));
    }
    for (y, row) in record.grid.iter().enumerate() {
        if row.chars().count() != record.width as usize {
            problems.push(format!(
                "row {} has length {}, declared width is {}",
                y,
                row.chars().count(),
                record.width
            ));
        }
    }
    problems
}
