//! Draft builder module.

mod builder;
mod store;

pub use builder::{DraftBuilder, DraftState};
pub use store::PaletteStore;
