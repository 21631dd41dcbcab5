//! # input_core
//!
//! UI-agnostic editing layer for a single-line text control.
//!
//! - [`EditBuffer`]: value, caret, selection and value revision
//! - [`EditCommand`]: the keystrokes a focused control understands
//! - UTF-8 boundary and UTF-16 length helpers used for caret math and
//!   `minlength`/`maxlength` measurement
//!
//! The crate depends only on `std`; rendering, focus and form semantics live
//! in the layers above it.

mod buffer;
mod command;
mod text;

pub use buffer::{EditBuffer, SelectionRange};
pub use command::EditCommand;
pub use text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
    truncate_to_utf16_units, utf16_len,
};
