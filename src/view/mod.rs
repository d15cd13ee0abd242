//! Palette viewer projection.

mod projector;
mod selection;

pub use projector::{color_url, project, project_shades, DisplayRecord};
pub use selection::{format_change_notice, ViewSelection};
