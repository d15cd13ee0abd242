//! Level and format chosen in the palette viewer.

use serde::{Deserialize, Serialize};

use crate::config::{is_known_level, ColorFormat, DEFAULT_LEVEL};
use crate::error::{DraftError, Result};

/// Transient view choices. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSelection {
    pub level: u16,
    pub format: ColorFormat,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            format: ColorFormat::default(),
        }
    }
}

impl ViewSelection {
    pub fn new(level: u16, format: ColorFormat) -> Self {
        Self { level, format }
    }

    /// Build a selection from raw control values.
    pub fn parse(level: u16, format: &str) -> Result<Self> {
        Ok(Self::new(level, format.parse()?))
    }

    /// Move the level slider. Only the fixed shade levels are accepted.
    pub fn set_level(&mut self, level: u16) -> Result<()> {
        if !is_known_level(level) {
            return Err(DraftError::UnknownLevel { level });
        }
        self.level = level;
        Ok(())
    }

    /// Change the output format and return the notice shown to the user.
    pub fn set_format(&mut self, format: ColorFormat) -> String {
        self.format = format;
        format_change_notice(format)
    }
}

/// Notice shown after the format selector changes.
pub fn format_change_notice(format: ColorFormat) -> String {
    format!("Format Changed to {}", format.as_str().to_uppercase())
}
