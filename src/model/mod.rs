//! Data model types for palette drafting and viewing.

mod color_entry;
mod palette;
mod shade;

pub use color_entry::{make_id, ColorEntry};
pub use palette::Palette;
pub use shade::{ShadeRecord, ShadeTable, ShadedPalette};
