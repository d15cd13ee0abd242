//! Persistence seam for committed palettes.

use crate::model::Palette;

/// Registry of saved palettes that also accepts newly committed ones.
///
/// `palettes()` is read as a snapshot when a commit is validated; keeping it
/// fresh is up to the implementor.
pub trait PaletteStore {
    /// Currently saved palettes.
    fn palettes(&self) -> &[Palette];

    /// Persist one committed palette.
    fn save_palette(&mut self, palette: Palette);
}

impl PaletteStore for Vec<Palette> {
    fn palettes(&self) -> &[Palette] {
        self
    }

    fn save_palette(&mut self, palette: Palette) {
        self.push(palette);
    }
}
