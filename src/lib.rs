//! palette-draft - Draft engine for building and viewing color palettes.
//!
//! This library holds the logic behind a palette builder: accumulating named
//! colors into a draft, keeping names and values unique, reordering, and
//! committing the result as a new palette. It also projects a saved palette
//! into the records shown for a chosen shade level and output format.
//!
//! # Example
//!
//! ```
//! use palette_draft::{ColorEntry, DraftBuilder, DraftConfig, Palette};
//!
//! let mut saved: Vec<Palette> = Vec::new();
//! let mut draft = DraftBuilder::new(DraftConfig::default());
//!
//! draft.set_pending_color("#4caf50").unwrap();
//! draft.add_color("Grass").unwrap();
//! draft.set_working_name("Garden").unwrap();
//!
//! let palette = draft.commit_to(&mut saved).unwrap();
//! assert_eq!(palette.id, "garden");
//! assert_eq!(palette.colors, vec![ColorEntry::new("Grass", "#4caf50")]);
//! assert_eq!(saved.len(), 1);
//! ```

pub mod config;
pub mod draft;
pub mod error;
pub mod model;
pub mod transform;
pub mod validation;
pub mod view;

// Re-exports for convenience
pub use config::{ColorFormat, DraftConfig, DEFAULT_LEVEL, DEFAULT_MAX_COLORS, SHADE_LEVELS};
pub use draft::{DraftBuilder, DraftState, PaletteStore};
pub use error::{DraftError, ErrorKind, InputField, Result};
pub use model::{make_id, ColorEntry, Palette, ShadeRecord, ShadeTable, ShadedPalette};
pub use transform::move_item;
pub use validation::{
    audit_entries, is_color_unique, is_name_unique, is_palette_name_unique, RuleSet,
    ValidationResult,
};
pub use view::{project, DisplayRecord, ViewSelection};
