//! Validation rules for draft colors and palette names.

mod audit;
mod rules;

pub use audit::{audit_entries, ValidationResult};
pub use rules::{
    is_color_unique, is_name_unique, is_palette_name_unique, ColorRule, PaletteRule, RuleSet,
};
