//! Committed palettes.

use serde::{Deserialize, Serialize};

use super::color_entry::{make_id, ColorEntry};

/// An immutable, committed palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Display name, unique across saved palettes (case-insensitive).
    pub palette_name: String,
    /// Slug of `palette_name`.
    pub id: String,
    /// Ordered colors.
    pub colors: Vec<ColorEntry>,
}

impl Palette {
    /// Create a palette, deriving its id from `palette_name`.
    pub fn new(palette_name: impl Into<String>, colors: Vec<ColorEntry>) -> Self {
        let palette_name = palette_name.into();
        let id = make_id(&palette_name);
        Self {
            palette_name,
            id,
            colors,
        }
    }

    /// Flatten the colors of every palette, in registry order.
    pub fn all_colors(palettes: &[Palette]) -> Vec<&ColorEntry> {
        palettes.iter().flat_map(|p| p.colors.iter()).collect()
    }

    /// Find a color by id.
    pub fn find_color(&self, id: &str) -> Option<&ColorEntry> {
        self.colors.iter().find(|c| c.id == id)
    }
}
