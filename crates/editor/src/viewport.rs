//! Viewport mapping between buffer coordinates and the visible screen.
//!
//! The viewport tracks the top-left visible buffer coordinate
//! (`row_off`, `col_off`) and the text-area dimensions, and derives the
//! cursor's render column from its content column (tab expansion). The one
//! mutating operation is [`Viewport::scroll`], a pure correction step run
//! once per frame: it clamps the offsets so the cursor is inside the
//! visible window. Scrolling is never incremental — calling `scroll` twice
//! with unchanged cursor and screen state is a no-op.
//!
//! Screen dimensions are injected at construction, so viewport behavior is
//! fully testable without a terminal. Two rows are reserved for the status
//! bar and the message line.

use slate_buffer::TextBuffer;

/// Rows reserved at the bottom of the screen (status bar + message line).
const CHROME_ROWS: usize = 2;

/// The rectangular window of buffer coordinates currently on screen.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// First visible buffer row.
    row_off: usize,
    /// First visible render column.
    col_off: usize,
    /// Text-area height (screen rows minus the two chrome rows).
    text_rows: usize,
    /// Text-area width in columns.
    cols: usize,
    /// Cursor render column, derived by the last `scroll` call.
    render_col: usize,
}

impl Viewport {
    /// Creates a viewport for a `screen_rows` × `screen_cols` terminal.
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            row_off: 0,
            col_off: 0,
            text_rows: screen_rows.saturating_sub(CHROME_ROWS),
            cols: screen_cols,
            render_col: 0,
        }
    }

    /// Text-area height in rows.
    pub fn text_rows(&self) -> usize {
        self.text_rows
    }

    /// Text-area width in columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// First visible buffer row.
    pub fn row_off(&self) -> usize {
        self.row_off
    }

    /// First visible render column.
    pub fn col_off(&self) -> usize {
        self.col_off
    }

    /// The cursor's render column as of the last `scroll`.
    pub fn render_col(&self) -> usize {
        self.render_col
    }

    /// Forces the next `scroll` to land the given row at the top of the
    /// window (used by search to jump the view to a match).
    ///
    /// Setting `row_off` past the cursor row makes the upward clamp in
    /// `scroll` pull the offset back to exactly the cursor row.
    pub fn force_row_to_top(&mut self, row: usize) {
        self.row_off = row;
    }

    /// Restores saved offsets (cancelling a search puts the view back).
    pub fn restore_offsets(&mut self, row_off: usize, col_off: usize) {
        self.row_off = row_off;
        self.col_off = col_off;
    }

    /// Recomputes the render column and clamps the offsets so the cursor
    /// lies inside the visible window.
    ///
    /// Idempotent: a second call with the same cursor and dimensions
    /// changes nothing.
    pub fn scroll(&mut self, buffer: &TextBuffer) {
        let cursor = buffer.cursor();
        self.render_col = buffer
            .row(cursor.line)
            .map(|row| row.render_col_of(cursor.col))
            .unwrap_or(0);

        if cursor.line < self.row_off {
            self.row_off = cursor.line;
        }
        if cursor.line >= self.row_off + self.text_rows {
            self.row_off = cursor.line + 1 - self.text_rows;
        }
        if self.render_col < self.col_off {
            self.col_off = self.render_col;
        }
        if self.render_col >= self.col_off + self.cols {
            self.col_off = self.render_col + 1 - self.cols;
        }
    }
}
