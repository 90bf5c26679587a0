//! slate-buffer: the row-structured document model for the slate editor.
//!
//! This crate provides the text buffer a single open document lives in:
//! an ordered sequence of rows, each holding raw content bytes and a
//! derived tab-expanded render form, plus cursor tracking, a dirty counter,
//! and render-space search. It is pure data with no terminal dependencies,
//! so every operation is unit-testable in isolation.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Byte insertion and deletion at the cursor position
//! - Row split and join (newline insertion, backspace across lines)
//! - Whole-buffer serialization to the on-disk format
//! - Forward search over rendered (tab-expanded) row text
//!
//! # Coordinates
//!
//! Content columns are byte offsets; render columns are visual offsets
//! after tab expansion. [`Row`] converts between the two. Unicode-aware
//! columns are out of scope by design: the buffer is byte-oriented
//! throughout, and multi-byte sequences pass through untouched.

mod row;
mod text_buffer;
mod types;

pub use row::{Row, TAB_STOP};
pub use text_buffer::TextBuffer;
pub use types::Position;
