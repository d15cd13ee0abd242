//! Uniqueness predicates and the rule set that turns them into decisions.

use crate::error::{DraftError, InputField, Result};
use crate::model::{ColorEntry, Palette};

/// True if no entry's name matches `candidate` case-insensitively.
pub fn is_name_unique(candidate: &str, entries: &[ColorEntry]) -> bool {
    entries.iter().all(|e| !e.same_name(candidate))
}

/// True if no entry's value matches `candidate` exactly.
pub fn is_color_unique(candidate: &str, entries: &[ColorEntry]) -> bool {
    entries.iter().all(|e| !e.same_value(candidate))
}

/// True if no saved palette's name matches `candidate` case-insensitively.
pub fn is_palette_name_unique(candidate: &str, saved: &[Palette]) -> bool {
    let candidate = candidate.to_lowercase();
    saved
        .iter()
        .all(|p| p.palette_name.to_lowercase() != candidate)
}

/// A check applied to a new color before it joins the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRule {
    /// Name must not be empty.
    Required,
    /// Name must not clash with an entry.
    NameUnique,
    /// A picker value must have been supplied. Not part of the default set.
    ValuePresent,
    /// Value must not clash with an entry.
    ColorUnique,
}

impl ColorRule {
    pub fn check(&self, name: &str, value: &str, entries: &[ColorEntry]) -> Result<()> {
        let ok = match self {
            ColorRule::Required => !name.is_empty(),
            ColorRule::NameUnique => is_name_unique(name, entries),
            ColorRule::ValuePresent => !value.is_empty(),
            ColorRule::ColorUnique => is_color_unique(value, entries),
        };
        if ok {
            return Ok(());
        }
        Err(match self {
            ColorRule::Required => DraftError::EmptyInput {
                field: InputField::ColorName,
            },
            ColorRule::NameUnique => DraftError::NameCollision,
            ColorRule::ValuePresent => DraftError::EmptyInput {
                field: InputField::ColorValue,
            },
            ColorRule::ColorUnique => DraftError::ValueCollision,
        })
    }
}

/// A check applied to the palette name on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRule {
    /// Name must not be empty.
    Required,
    /// Name must not clash with a saved palette.
    NameUnique,
}

impl PaletteRule {
    pub fn check(&self, name: &str, saved: &[Palette]) -> Result<()> {
        match self {
            PaletteRule::Required if name.is_empty() => Err(DraftError::EmptyInput {
                field: InputField::PaletteName,
            }),
            PaletteRule::NameUnique if !is_palette_name_unique(name, saved) => {
                Err(DraftError::PaletteNameCollision)
            }
            _ => Ok(()),
        }
    }
}

/// Ordered rules owned by a draft builder. The first failing rule decides
/// the rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub color: Vec<ColorRule>,
    pub palette: Vec<PaletteRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            color: vec![
                ColorRule::Required,
                ColorRule::NameUnique,
                ColorRule::ColorUnique,
            ],
            palette: vec![PaletteRule::Required, PaletteRule::NameUnique],
        }
    }
}

impl RuleSet {
    /// Default rules plus a check that the picker produced a value.
    pub fn requiring_value() -> Self {
        let mut rules = Self::default();
        rules.color.insert(2, ColorRule::ValuePresent);
        rules
    }

    /// Validate a candidate color against the current entries.
    pub fn check_color(&self, name: &str, value: &str, entries: &[ColorEntry]) -> Result<()> {
        self.color
            .iter()
            .try_for_each(|rule| rule.check(name, value, entries))
    }

    /// Validate a palette name against the saved registry.
    pub fn check_palette_name(&self, name: &str, saved: &[Palette]) -> Result<()> {
        self.palette
            .iter()
            .try_for_each(|rule| rule.check(name, saved))
    }
}
