//! Derives the displayed color records of a saved palette.

use serde::{Deserialize, Serialize};

use super::selection::ViewSelection;
use crate::error::{DraftError, Result};
use crate::model::{Palette, ShadeTable, ShadedPalette};

/// One color box as the viewer renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub display_value: String,
    pub name: String,
    pub id: String,
    pub color_url: String,
}

/// Link to the single-color page of a swatch.
pub fn color_url(palette_id: &str, color_id: &str) -> String {
    format!("/palette/{}/{}", palette_id, color_id)
}

/// Project `palette` at the selected level and format.
///
/// Pure: the same inputs always give the same records, in table order.
pub fn project(
    palette: &Palette,
    selection: &ViewSelection,
    table: &ShadeTable,
) -> Result<Vec<DisplayRecord>> {
    project_shades(&palette.id, selection, table)
}

/// Same as [`project`], keyed by palette id only.
pub fn project_shades(
    palette_id: &str,
    selection: &ViewSelection,
    table: &ShadeTable,
) -> Result<Vec<DisplayRecord>> {
    let records = table
        .get(selection.level)
        .ok_or(DraftError::UnknownLevel {
            level: selection.level,
        })?;

    Ok(records
        .iter()
        .map(|record| DisplayRecord {
            display_value: record.value(selection.format).to_string(),
            name: record.name.clone(),
            id: record.id.clone(),
            color_url: color_url(palette_id, &record.id),
        })
        .collect())
}

impl ShadedPalette {
    /// Project this palette with its own shade table.
    pub fn project(&self, selection: &ViewSelection) -> Result<Vec<DisplayRecord>> {
        project_shades(&self.id, selection, &self.colors)
    }
}
