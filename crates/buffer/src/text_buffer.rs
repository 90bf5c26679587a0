//! TextBuffer is the main public API for document editing operations.
//!
//! It owns the ordered sequence of [`Row`]s (index = line number), the
//! cursor position, the filename, and the dirty counter. All content
//! mutations go through the cursor-relative operations here, which keep the
//! cursor and the dirty counter consistent with every change.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::row::Row;
use crate::types::Position;

/// The row-structured document model.
///
/// The buffer maintains:
/// - Content storage as one [`Row`] per line
/// - Cursor position as (line, column), clamped to valid bounds
/// - The associated filename, if any
/// - A dirty counter: the number of content mutations since the last
///   successful load or save (not a boolean, so no mutation is ever lost
///   to flag saturation)
///
/// A brand-new or just-loaded buffer is clean (`dirty() == 0`).
#[derive(Debug, Default)]
pub struct TextBuffer {
    rows: Vec<Row>,
    cursor: Position,
    filename: Option<PathBuf>,
    dirty: u64,
}

impl TextBuffer {
    /// Creates a new empty, unnamed buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer from in-memory text, splitting on `\n`.
    ///
    /// Trailing `\r` on each line is stripped, the same normalization
    /// [`TextBuffer::open`] applies to file content.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.load_bytes(text.as_bytes());
        buffer
    }

    /// Opens a file, replacing the buffer contents with one row per line.
    ///
    /// Line terminators are normalized: `\n` separates lines and any
    /// preceding `\r` is stripped. The normalization is deliberately lossy —
    /// CRLF input does not round-trip, because [`TextBuffer::serialize`]
    /// always emits bare `\n`.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let mut buffer = Self::new();
        buffer.load_bytes(&bytes);
        buffer.filename = Some(path.to_path_buf());
        Ok(buffer)
    }

    /// Replaces buffer contents from raw bytes and resets the dirty counter.
    fn load_bytes(&mut self, bytes: &[u8]) {
        let mut rows: Vec<Row> = bytes
            .split(|&b| b == b'\n')
            .map(|line| {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                Row::new(line.to_vec())
            })
            .collect();
        // A trailing newline terminates the last line rather than opening
        // an empty one.
        if bytes.is_empty() || bytes.ends_with(b"\n") {
            rows.pop();
        }
        self.rows = rows;
        self.cursor = Position::default();
        self.dirty = 0;
    }

    // ==================== Accessors ====================

    /// Returns the associated filename, if the buffer has one.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Associates the buffer with a filename (the save-as flow).
    pub fn set_filename(&mut self, path: PathBuf) {
        self.filename = Some(path);
    }

    /// Returns the number of rows in the buffer.
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at the given line, if it exists.
    pub fn row(&self, line: usize) -> Option<&Row> {
        self.rows.get(line)
    }

    /// Returns all rows in document order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the length of the given line, or 0 past end-of-file.
    pub fn row_len(&self, line: usize) -> usize {
        self.rows.get(line).map(Row::len).unwrap_or(0)
    }

    /// Returns the current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor, clamping to valid bounds.
    ///
    /// The line is clamped to `0..=line_count()` (the cursor may rest on the
    /// virtual row past end-of-file) and the column to the target row's
    /// length. This is the single clamping point that keeps the cursor
    /// invariant true after every vertical move across rows of different
    /// lengths.
    pub fn set_cursor(&mut self, pos: Position) {
        let line = pos.line.min(self.rows.len());
        let col = pos.col.min(self.row_len(line));
        self.cursor = Position::new(line, col);
    }

    /// Returns the number of unsaved content mutations.
    pub fn dirty(&self) -> u64 {
        self.dirty
    }

    /// Returns true if the buffer has unsaved mutations.
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Resets the dirty counter after a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = 0;
    }

    // ==================== Row operations ====================

    /// Inserts a new row at `at` (0..=line_count), shifting later rows down.
    ///
    /// Out-of-range positions are a silent no-op.
    pub fn insert_row(&mut self, at: usize, text: Vec<u8>) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(text));
        self.dirty += 1;
    }

    /// Removes the row at `at`. Out-of-range positions are a silent no-op.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    // ==================== Cursor-relative editing ====================

    /// Inserts a byte at the cursor and advances the cursor one column.
    ///
    /// When the cursor rests on the virtual row past end-of-file, an empty
    /// row is appended first so there is a row to insert into.
    pub fn insert_char(&mut self, byte: u8) {
        if self.cursor.line == self.rows.len() {
            self.insert_row(self.rows.len(), Vec::new());
        }
        self.rows[self.cursor.line].insert_byte(self.cursor.col, byte);
        self.cursor.col += 1;
        self.dirty += 1;
    }

    /// Deletes the byte before the cursor.
    ///
    /// At the document start (or on the virtual row past end-of-file) this
    /// is a no-op. At column 0 the current row's content is joined onto the
    /// end of the previous row and the cursor lands at the join point —
    /// the one operation that reduces the row count.
    pub fn delete_char_before(&mut self) {
        if self.cursor.line == self.rows.len() {
            return;
        }
        if self.cursor.col == 0 && self.cursor.line == 0 {
            return;
        }

        if self.cursor.col > 0 {
            self.rows[self.cursor.line].delete_byte(self.cursor.col - 1);
            self.cursor.col -= 1;
            self.dirty += 1;
        } else {
            // Join onto the previous row at its old end
            let join_col = self.rows[self.cursor.line - 1].len();
            let removed = self.rows.remove(self.cursor.line);
            self.cursor.line -= 1;
            self.rows[self.cursor.line].append(removed.chars());
            self.cursor.col = join_col;
            self.dirty += 1;
        }
    }

    /// Inserts a newline at the cursor.
    ///
    /// At column 0 an empty row is inserted above the current row;
    /// otherwise the current row is split at the cursor. Either way the
    /// cursor moves to column 0 of the next row.
    pub fn insert_newline(&mut self) {
        if self.cursor.col == 0 {
            self.insert_row(self.cursor.line, Vec::new());
        } else {
            let tail = self.rows[self.cursor.line].split_off(self.cursor.col);
            self.rows.insert(self.cursor.line + 1, Row::new(tail));
            self.dirty += 1;
        }
        self.cursor.line += 1;
        self.cursor.col = 0;
    }

    // ==================== Serialization & search ====================

    /// Serializes the buffer to its on-disk form.
    ///
    /// Every row is followed by a single `\n`, including the last. This
    /// round-trips with [`TextBuffer::open`] for files using bare `\n`
    /// endings; CR bytes stripped on load are never restored.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for row in &self.rows {
            out.extend_from_slice(row.chars());
            out.push(b'\n');
        }
        out
    }

    /// Searches the **render** forms of rows for `query`, starting at
    /// `from_line` and scanning forward without wrapping.
    ///
    /// Searching render text means tab-containing lines match by their
    /// visual form. Returns the first `(line, render_col)` hit, or `None`.
    pub fn find(&self, query: &[u8], from_line: usize) -> Option<(usize, usize)> {
        if query.is_empty() {
            return None;
        }
        for (offset, row) in self.rows.iter().skip(from_line).enumerate() {
            let render = row.render();
            if let Some(render_col) = render
                .windows(query.len())
                .position(|window| window == query)
            {
                return Some((from_line + offset, render_col));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_lines() -> TextBuffer {
        TextBuffer::from_text("abc\ndef\nghi\n")
    }

    // ==================== Loading ====================

    #[test]
    fn from_text_splits_lines() {
        let buffer = three_lines();
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.row(0).unwrap().chars(), b"abc");
        assert_eq!(buffer.row(2).unwrap().chars(), b"ghi");
        assert_eq!(buffer.dirty(), 0);
    }

    #[test]
    fn from_text_without_trailing_newline() {
        let buffer = TextBuffer::from_text("abc\ndef");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.row(1).unwrap().chars(), b"def");
    }

    #[test]
    fn from_text_empty_has_no_rows() {
        let buffer = TextBuffer::from_text("");
        assert_eq!(buffer.line_count(), 0);
    }

    #[test]
    fn from_text_strips_carriage_returns() {
        let buffer = TextBuffer::from_text("abc\r\ndef\r\n");
        assert_eq!(buffer.row(0).unwrap().chars(), b"abc");
        assert_eq!(buffer.row(1).unwrap().chars(), b"def");
    }

    // ==================== Serialization ====================

    #[test]
    fn serialize_appends_newline_after_every_row() {
        assert_eq!(three_lines().serialize(), b"abc\ndef\nghi\n");
    }

    #[test]
    fn serialize_is_idempotent_after_cr_normalization() {
        let first = TextBuffer::from_text("abc\r\ndef\r\n");
        let once = first.serialize();
        let second = TextBuffer::from_text(std::str::from_utf8(&once).unwrap());
        assert_eq!(second.serialize(), once);
    }

    #[test]
    fn serialize_empty_buffer_is_empty() {
        assert_eq!(TextBuffer::new().serialize(), b"");
    }

    // ==================== Cursor clamping ====================

    #[test]
    fn set_cursor_clamps_col_to_row_len() {
        let mut buffer = three_lines();
        buffer.set_cursor(Position::new(1, 99));
        assert_eq!(buffer.cursor(), Position::new(1, 3));
    }

    #[test]
    fn set_cursor_allows_virtual_row_past_end() {
        let mut buffer = three_lines();
        buffer.set_cursor(Position::new(99, 99));
        assert_eq!(buffer.cursor(), Position::new(3, 0));
    }

    // ==================== Row operations ====================

    #[test]
    fn insert_row_shifts_later_rows_down() {
        let mut buffer = three_lines();
        buffer.insert_row(1, b"new".to_vec());
        assert_eq!(buffer.line_count(), 4);
        assert_eq!(buffer.row(1).unwrap().chars(), b"new");
        assert_eq!(buffer.row(2).unwrap().chars(), b"def");
        assert!(buffer.is_dirty());
    }

    #[test]
    fn delete_row_out_of_range_is_noop() {
        let mut buffer = three_lines();
        buffer.delete_row(3);
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.dirty(), 0);
    }

    // ==================== Editing ====================

    #[test]
    fn insert_char_mid_row() {
        let mut buffer = three_lines();
        buffer.set_cursor(Position::new(1, 2));
        buffer.insert_char(b'X');
        assert_eq!(buffer.row(1).unwrap().chars(), b"deXf");
        assert_eq!(buffer.cursor(), Position::new(1, 3));
        assert!(buffer.dirty() > 0);
    }

    #[test]
    fn insert_char_past_end_appends_row() {
        let mut buffer = TextBuffer::new();
        buffer.insert_char(b'a');
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.row(0).unwrap().chars(), b"a");
        assert_eq!(buffer.cursor(), Position::new(0, 1));
    }

    #[test]
    fn delete_at_document_start_is_noop() {
        let mut buffer = three_lines();
        buffer.delete_char_before();
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.dirty(), 0);
    }

    #[test]
    fn delete_mid_row_removes_preceding_byte() {
        let mut buffer = three_lines();
        buffer.set_cursor(Position::new(0, 2));
        buffer.delete_char_before();
        assert_eq!(buffer.row(0).unwrap().chars(), b"ac");
        assert_eq!(buffer.cursor(), Position::new(0, 1));
    }

    #[test]
    fn delete_at_col_zero_joins_rows() {
        let mut buffer = three_lines();
        buffer.set_cursor(Position::new(1, 0));
        buffer.delete_char_before();
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.row(0).unwrap().chars(), b"abcdef");
        assert_eq!(buffer.cursor(), Position::new(0, 3));
    }

    #[test]
    fn newline_at_col_zero_inserts_row_above() {
        let mut buffer = three_lines();
        buffer.set_cursor(Position::new(1, 0));
        buffer.insert_newline();
        assert_eq!(buffer.line_count(), 4);
        assert!(buffer.row(1).unwrap().is_empty());
        assert_eq!(buffer.row(2).unwrap().chars(), b"def");
        assert_eq!(buffer.cursor(), Position::new(2, 0));
    }

    #[test]
    fn newline_mid_row_splits() {
        let mut buffer = three_lines();
        buffer.set_cursor(Position::new(1, 1));
        buffer.insert_newline();
        assert_eq!(buffer.row(1).unwrap().chars(), b"d");
        assert_eq!(buffer.row(2).unwrap().chars(), b"ef");
        assert_eq!(buffer.cursor(), Position::new(2, 0));
    }

    #[test]
    fn split_then_join_reconstructs_row_exactly() {
        let mut buffer = TextBuffer::from_text("abcdef\n");
        buffer.set_cursor(Position::new(0, 3));
        buffer.insert_newline();
        assert_eq!(buffer.cursor(), Position::new(1, 0));
        buffer.delete_char_before();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.row(0).unwrap().chars(), b"abcdef");
        assert_eq!(buffer.cursor(), Position::new(0, 3));
    }

    #[test]
    fn enter_then_char_on_empty_document() {
        let mut buffer = TextBuffer::new();
        buffer.insert_newline();
        buffer.insert_char(b'a');
        assert_eq!(buffer.line_count(), 2);
        assert!(buffer.row(0).unwrap().is_empty());
        assert_eq!(buffer.row(1).unwrap().chars(), b"a");
        assert_eq!(buffer.cursor(), Position::new(1, 1));
    }

    // ==================== Search ====================

    #[test]
    fn find_returns_first_match_from_start() {
        let buffer = three_lines();
        assert_eq!(buffer.find(b"ef", 0), Some((1, 1)));
    }

    #[test]
    fn find_respects_start_line_and_does_not_wrap() {
        let buffer = three_lines();
        assert_eq!(buffer.find(b"abc", 1), None);
        assert_eq!(buffer.find(b"ghi", 2), Some((2, 0)));
    }

    #[test]
    fn find_searches_render_form_of_tab_lines() {
        let buffer = TextBuffer::from_text("a\tef\n");
        // The tab expands to column 8, so "ef" sits at render column 8
        assert_eq!(buffer.find(b"ef", 0), Some((0, 8)));
    }

    #[test]
    fn find_empty_query_matches_nothing() {
        assert_eq!(three_lines().find(b"", 0), None);
    }
}
