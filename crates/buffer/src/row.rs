//! A single document line with its derived display form.
//!
//! Each `Row` holds the raw bytes of one line (`chars`, no trailing newline)
//! and a derived `render` form in which every tab is expanded to spaces up
//! to the next multiple of [`TAB_STOP`]. The render form is rebuilt on every
//! content mutation and is never mutated independently — it is always a pure
//! function of the raw bytes.
//!
//! Columns come in two coordinate systems:
//! - *content columns* (`col`): byte offsets into `chars`
//! - *render columns* (`render_col`): visual offsets into `render`
//!
//! [`Row::render_col_of`] and [`Row::col_at_render_col`] convert between the
//! two; they only differ for rows containing tabs.

/// Number of columns a tab advances to (next multiple of this width).
pub const TAB_STOP: usize = 8;

/// One logical line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The authoritative content, without any line terminator.
    chars: Vec<u8>,
    /// `chars` with tabs expanded to spaces. Derived, never edited directly.
    render: Vec<u8>,
}

impl Row {
    /// Creates a row from raw content bytes.
    pub fn new(chars: Vec<u8>) -> Self {
        let mut row = Self {
            chars,
            render: Vec::new(),
        };
        row.rebuild_render();
        row
    }

    /// Creates an empty row.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the raw content bytes.
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Returns the tab-expanded display bytes.
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Returns the content length in bytes.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the row has no content.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Inserts a byte at the given content column, clamped to the row end.
    pub fn insert_byte(&mut self, at: usize, byte: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, byte);
        self.rebuild_render();
    }

    /// Deletes the byte at the given content column.
    ///
    /// Out-of-range columns are a silent no-op.
    pub fn delete_byte(&mut self, at: usize) {
        if at < self.chars.len() {
            self.chars.remove(at);
            self.rebuild_render();
        }
    }

    /// Appends raw bytes to the end of the row (used when joining lines).
    pub fn append(&mut self, bytes: &[u8]) {
        self.chars.extend_from_slice(bytes);
        self.rebuild_render();
    }

    /// Splits the row at the given content column.
    ///
    /// Content before `at` stays in this row; the remainder is returned
    /// (used when a newline is inserted mid-line). `at` is clamped to the
    /// row end, in which case the returned tail is empty.
    pub fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.rebuild_render();
        tail
    }

    /// Maps a content column to its render column.
    ///
    /// Walks the content up to `col`, advancing by one per byte except for
    /// tabs, which advance to the next multiple of [`TAB_STOP`].
    pub fn render_col_of(&self, col: usize) -> usize {
        let mut render_col = 0;
        for &byte in &self.chars[..col.min(self.chars.len())] {
            if byte == b'\t' {
                render_col += (TAB_STOP - 1) - (render_col % TAB_STOP);
            }
            render_col += 1;
        }
        render_col
    }

    /// Maps a render column back to the content column containing it.
    ///
    /// This is the inverse walk of [`Row::render_col_of`]: the first content
    /// column whose render position passes `render_col` wins. A render
    /// column past the end of the row maps to the row length.
    pub fn col_at_render_col(&self, render_col: usize) -> usize {
        let mut current = 0;
        for (col, &byte) in self.chars.iter().enumerate() {
            if byte == b'\t' {
                current += (TAB_STOP - 1) - (current % TAB_STOP);
            }
            current += 1;
            if current > render_col {
                return col;
            }
        }
        self.chars.len()
    }

    /// Rebuilds `render` from `chars`, expanding tabs to spaces.
    fn rebuild_render(&mut self) {
        self.render.clear();
        for &byte in &self.chars {
            if byte == b'\t' {
                self.render.push(b' ');
                while self.render.len() % TAB_STOP != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(byte);
            }
        }
    }
}
