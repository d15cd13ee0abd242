//! Stateful accumulator for one palette editing session.

use rand::Rng;
use tracing::{debug, info, warn};

use super::store::PaletteStore;
use crate::config::DraftConfig;
use crate::error::{DraftError, Result};
use crate::model::{ColorEntry, Palette};
use crate::transform::move_item;
use crate::validation::{audit_entries, RuleSet, ValidationResult};

/// Lifecycle state of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    /// No entries.
    Empty,
    /// Some entries, below capacity.
    Editing,
    /// Entry count reached the configured maximum.
    Full,
    /// Palette emitted; terminal.
    Committed,
    /// Draft discarded; terminal.
    Cancelled,
}

impl DraftState {
    /// Whether the draft still accepts mutations.
    pub fn is_open(&self) -> bool {
        !matches!(self, DraftState::Committed | DraftState::Cancelled)
    }
}

impl std::fmt::Display for DraftState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DraftState::Empty => "empty",
            DraftState::Editing => "editing",
            DraftState::Full => "full",
            DraftState::Committed => "committed",
            DraftState::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Committed,
    Cancelled,
}

/// Builds a new palette from user actions.
///
/// Open states (empty, editing, full) are derived from the entry count, so
/// removing from a full draft makes it editable again without bookkeeping.
/// Every rejected operation leaves the draft exactly as it was.
#[derive(Debug, Clone)]
pub struct DraftBuilder {
    config: DraftConfig,
    rules: RuleSet,
    entries: Vec<ColorEntry>,
    pending_color: String,
    color_name: String,
    working_name: String,
    phase: Phase,
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new(DraftConfig::default())
    }
}

impl DraftBuilder {
    /// Create an empty draft.
    pub fn new(config: DraftConfig) -> Self {
        Self::with_rules(config, RuleSet::default())
    }

    /// Create an empty draft with a custom rule set.
    pub fn with_rules(config: DraftConfig, rules: RuleSet) -> Self {
        Self {
            config,
            rules,
            entries: Vec::new(),
            pending_color: String::new(),
            color_name: String::new(),
            working_name: String::new(),
            phase: Phase::Open,
        }
    }

    /// Create a draft seeded with a copy of `seed`.
    pub fn from_seed(config: DraftConfig, seed: &[ColorEntry]) -> Self {
        let mut draft = Self::new(config);
        draft.entries = seed.to_vec();
        draft
    }

    /// Replace the entries with a copy of `seed`.
    pub fn initialize(&mut self, seed: &[ColorEntry]) -> Result<()> {
        self.ensure_open()?;
        self.entries = seed.to_vec();
        debug!(count = self.entries.len(), state = %self.state(), "draft initialized");
        Ok(())
    }

    // ==================== Queries ====================

    pub fn state(&self) -> DraftState {
        match self.phase {
            Phase::Committed => DraftState::Committed,
            Phase::Cancelled => DraftState::Cancelled,
            Phase::Open if self.entries.is_empty() => DraftState::Empty,
            Phase::Open if self.is_full() => DraftState::Full,
            Phase::Open => DraftState::Editing,
        }
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the entry count has reached the configured maximum.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.config.max_colors
    }

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn pending_color(&self) -> &str {
        &self.pending_color
    }

    pub fn color_name(&self) -> &str {
        &self.color_name
    }

    pub fn working_name(&self) -> &str {
        &self.working_name
    }

    /// Report duplicate names or values currently in the draft. They are
    /// errors when random picks are validated, warnings otherwise.
    pub fn audit(&self) -> ValidationResult {
        audit_entries(&self.entries, self.config.validate_random_picks)
    }

    // ==================== Inputs ====================

    /// Store the value currently selected in the color picker.
    pub fn set_pending_color(&mut self, value: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.pending_color = value.into();
        Ok(())
    }

    /// Store the text of the color name input.
    pub fn set_color_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.color_name = name.into();
        Ok(())
    }

    /// Store the candidate palette name. Checked only on commit.
    pub fn set_working_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.working_name = name.into();
        Ok(())
    }

    // ==================== Mutations ====================

    /// Add the pending color under `name`.
    ///
    /// A full draft rejects before any other rule runs. On success the
    /// color name input is cleared.
    pub fn add_color(&mut self, name: &str) -> Result<ColorEntry> {
        self.ensure_open()?;
        self.ensure_capacity()?;
        self.rules
            .check_color(name, &self.pending_color, &self.entries)?;

        let entry = ColorEntry::new(name, self.pending_color.clone());
        self.entries.push(entry.clone());
        self.color_name.clear();
        debug!(name = %entry.name, value = %entry.value, state = %self.state(), "color added");
        Ok(entry)
    }

    /// Add the color currently typed in the name input.
    pub fn add_current_color(&mut self) -> Result<ColorEntry> {
        let name = self.color_name.clone();
        self.add_color(&name)
    }

    /// Append a color picked uniformly from every saved palette.
    ///
    /// Unless `validate_random_picks` is set, the pick skips the name and
    /// value rules and may duplicate an existing entry. Returns `None` when
    /// there is nothing to pick from.
    pub fn add_random_color<R: Rng>(
        &mut self,
        saved: &[Palette],
        rng: &mut R,
    ) -> Result<Option<ColorEntry>> {
        self.ensure_open()?;
        self.ensure_capacity()?;

        let pool = Palette::all_colors(saved);
        if pool.is_empty() {
            debug!("no saved colors to pick from");
            return Ok(None);
        }
        let picked = pool[rng.random_range(0..pool.len())].clone();

        if self.config.validate_random_picks {
            self.rules
                .check_color(&picked.name, &picked.value, &self.entries)?;
        } else if self
            .rules
            .check_color(&picked.name, &picked.value, &self.entries)
            .is_err()
        {
            warn!(name = %picked.name, value = %picked.value, "random pick duplicates an existing color");
        }

        self.entries.push(picked.clone());
        debug!(name = %picked.name, value = %picked.value, state = %self.state(), "random color added");
        Ok(Some(picked))
    }

    /// Remove every entry with the given id. Returns whether anything was
    /// removed.
    pub fn remove_color(&mut self, id: &str) -> Result<bool> {
        self.ensure_open()?;
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!(id, state = %self.state(), "color removed");
        }
        Ok(removed)
    }

    /// Remove all entries.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.entries.clear();
        debug!("draft cleared");
        Ok(())
    }

    /// Move the entry at `old_index` to `new_index`.
    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<()> {
        self.ensure_open()?;
        self.entries = move_item(&self.entries, old_index, new_index)?;
        Ok(())
    }

    // ==================== Termination ====================

    /// Validate the working name against `saved` and emit the palette.
    ///
    /// On success the draft is consumed into the palette and becomes
    /// committed. This does no persistence; see [`DraftBuilder::commit_to`].
    pub fn commit(&mut self, saved: &[Palette]) -> Result<Palette> {
        self.ensure_open()?;
        self.rules.check_palette_name(&self.working_name, saved)?;

        let palette = Palette::new(
            std::mem::take(&mut self.working_name),
            std::mem::take(&mut self.entries),
        );
        self.pending_color.clear();
        self.color_name.clear();
        self.phase = Phase::Committed;
        info!(
            palette = %palette.palette_name,
            id = %palette.id,
            colors = palette.colors.len(),
            "palette committed"
        );
        Ok(palette)
    }

    /// Commit against the store's palettes and save the result into it.
    ///
    /// The store sees exactly one save on success and none on rejection.
    pub fn commit_to<S: PaletteStore + ?Sized>(&mut self, store: &mut S) -> Result<Palette> {
        let palette = self.commit(store.palettes())?;
        store.save_palette(palette.clone());
        Ok(palette)
    }

    /// Discard the draft.
    pub fn cancel(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.entries.clear();
        self.pending_color.clear();
        self.color_name.clear();
        self.working_name.clear();
        self.phase = Phase::Cancelled;
        info!("draft cancelled");
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        let state = self.state();
        if state.is_open() {
            Ok(())
        } else {
            Err(DraftError::DraftClosed { state })
        }
    }

    fn ensure_capacity(&self) -> Result<()> {
        if self.is_full() {
            return Err(DraftError::CapacityExceeded {
                max: self.config.max_colors,
            });
        }
        Ok(())
    }
}
