//! Directional moves and the slide/merge transform.
//!
//! Only [`move_left`] compacts and merges tiles. The other three directions
//! are reflections of it: reversing rows for `Right`, transposing for `Up`,
//! and both for `Down`.

mod direction;
mod slide;

pub use direction::Direction;
pub use slide::{merge_row_left, move_down, move_left, move_right, move_up, slide};
