//! Precomputed shade tables used by the palette viewer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::ColorFormat;

/// One swatch of a shade level, with every output format precomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeRecord {
    pub name: String,
    pub hex: String,
    pub rgb: String,
    pub rgba: String,
    pub id: String,
}

impl ShadeRecord {
    /// Value of this swatch in the given format.
    pub fn value(&self, format: ColorFormat) -> &str {
        match format {
            ColorFormat::Hex => &self.hex,
            ColorFormat::Rgb => &self.rgb,
            ColorFormat::Rgba => &self.rgba,
        }
    }
}

/// Mapping from shade level to the ordered swatches of that level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadeTable(BTreeMap<u16, Vec<ShadeRecord>>);

impl ShadeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the swatches of a level, replacing any previous ones.
    pub fn insert(&mut self, level: u16, records: Vec<ShadeRecord>) {
        self.0.insert(level, records);
    }

    /// Swatches of a level.
    pub fn get(&self, level: u16) -> Option<&[ShadeRecord]> {
        self.0.get(&level).map(Vec::as_slice)
    }

    /// Levels present, ascending.
    pub fn levels(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u16, Vec<ShadeRecord>)> for ShadeTable {
    fn from_iter<I: IntoIterator<Item = (u16, Vec<ShadeRecord>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A saved palette in its display form: the shade table replaces the flat
/// color list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadedPalette {
    pub palette_name: String,
    pub id: String,
    pub colors: ShadeTable,
}
