//! Order-changing transforms over draft entries.

mod reorder;

pub use reorder::move_item;
