//! Configuration constants and settings for the draft engine.

use crate::error::DraftError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum number of colors a draft accepts by default.
pub const DEFAULT_MAX_COLORS: usize = 20;

/// Fixed, ordered set of shade levels a shade table is keyed by.
pub const SHADE_LEVELS: [u16; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Shade level shown when a palette is first opened.
pub const DEFAULT_LEVEL: u16 = 500;

/// Check whether `level` belongs to [`SHADE_LEVELS`].
#[inline]
pub fn is_known_level(level: u16) -> bool {
    SHADE_LEVELS.contains(&level)
}

/// Output format of a displayed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Rgba,
}

impl ColorFormat {
    /// All formats in selector order.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Rgba];

    /// Label used by the format selector.
    pub fn label(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX - #ffffff",
            ColorFormat::Rgb => "RGB - rgb(#, #, #)",
            ColorFormat::Rgba => "RGBA - rgba(#, #, #, #)",
        }
    }

    /// Field name of this format in a shade record.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
        }
    }
}

impl FromStr for ColorFormat {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "rgba" => Ok(ColorFormat::Rgba),
            _ => Err(DraftError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draft builder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftConfig {
    /// Entry count at which the draft becomes full.
    pub max_colors: usize,
    /// Run the uniqueness rules on random picks too. Off by default, so a
    /// random pick may duplicate a name or value already in the draft.
    pub validate_random_picks: bool,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            max_colors: DEFAULT_MAX_COLORS,
            validate_random_picks: false,
        }
    }
}

impl DraftConfig {
    /// Create a configuration with a custom capacity.
    pub fn new(max_colors: usize) -> Self {
        Self {
            max_colors,
            ..Default::default()
        }
    }
}
