//! Positional move used by drag-and-drop reordering.

use crate::error::{DraftError, Result};

/// Return a copy of `items` with the element at `old_index` moved to
/// `new_index`.
///
/// Elements between the two positions shift one slot toward the vacated
/// position; everything else stays put. Both indices must be in range, even
/// when they are equal.
pub fn move_item<T: Clone>(items: &[T], old_index: usize, new_index: usize) -> Result<Vec<T>> {
    let len = items.len();
    for index in [old_index, new_index] {
        if index >= len {
            return Err(DraftError::IndexOutOfRange { index, len });
        }
    }

    let mut moved = items.to_vec();
    if old_index < new_index {
        moved[old_index..=new_index].rotate_left(1);
    } else if old_index > new_index {
        moved[new_index..=old_index].rotate_right(1);
    }
    Ok(moved)
}
