//! Full-frame composition.
//!
//! The renderer builds exactly one output buffer per refresh cycle and the
//! caller flushes it to the terminal in a single write — repainting the
//! whole screen every frame, with no output diffing. The frame hides the
//! cursor while it paints and repositions it at the end, and every text row
//! ends with erase-to-end-of-line instead of a whole-screen clear, which is
//! what keeps the repaint flicker-free.
//!
//! Composition is a pure function of buffer + viewport + message state and
//! returns the frame bytes, so it is testable without a terminal. A partial
//! terminal write cannot be recovered mid-escape-sequence; the caller
//! treats a failed flush as fatal.

use slate_buffer::TextBuffer;
use slate_terminal::ansi;

use crate::viewport::Viewport;

/// Version shown in the empty-buffer banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Composes one full terminal frame.
///
/// Layout: text rows (file content, or banner/`~` filler), one inverted
/// status bar, one message line. The cursor lands at the viewport-relative
/// position of the buffer cursor.
pub fn frame(buffer: &TextBuffer, viewport: &Viewport, message: Option<&str>) -> Vec<u8> {
    let mut out = Vec::with_capacity(4096);

    out.extend_from_slice(ansi::HIDE_CURSOR);
    out.extend_from_slice(ansi::CURSOR_HOME);

    draw_rows(&mut out, buffer, viewport);
    draw_status_bar(&mut out, buffer, viewport);
    draw_message_line(&mut out, message, viewport.cols());

    // Cursor back to its buffer position, translated into the window
    let cursor = buffer.cursor();
    let screen_row = cursor.line - viewport.row_off() + 1;
    let screen_col = viewport.render_col() - viewport.col_off() + 1;
    out.extend_from_slice(&ansi::cursor_position(screen_row, screen_col));

    out.extend_from_slice(ansi::SHOW_CURSOR);
    out
}

/// Draws the text area: visible render slices, the version banner on an
/// empty document, and `~` markers past end-of-file.
fn draw_rows(out: &mut Vec<u8>, buffer: &TextBuffer, viewport: &Viewport) {
    for y in 0..viewport.text_rows() {
        let file_row = y + viewport.row_off();
        if let Some(row) = buffer.row(file_row) {
            let render = row.render();
            let start = viewport.col_off().min(render.len());
            let end = (viewport.col_off() + viewport.cols()).min(render.len());
            out.extend_from_slice(&render[start..end]);
        } else if buffer.line_count() == 0 && y == viewport.text_rows() / 3 {
            draw_banner(out, viewport.cols());
        } else {
            out.push(b'~');
        }
        out.extend_from_slice(ansi::ERASE_LINE);
        out.extend_from_slice(b"\r\n");
    }
}

/// Centers the version banner, keeping the `~` gutter marker on its left.
fn draw_banner(out: &mut Vec<u8>, cols: usize) {
    let mut banner = format!("slate editor -- version {}", VERSION);
    banner.truncate(cols);
    let mut padding = (cols - banner.len()) / 2;
    if padding > 0 {
        out.push(b'~');
        padding -= 1;
    }
    for _ in 0..padding {
        out.push(b' ');
    }
    out.extend_from_slice(banner.as_bytes());
}

/// Draws the inverted-video status bar: filename, line count, modified
/// flag on the left; cursor-row/total on the right.
fn draw_status_bar(out: &mut Vec<u8>, buffer: &TextBuffer, viewport: &Viewport) {
    let name = buffer
        .filename()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("[No Name]"));
    let mut left = format!(
        "{:.20} - {} lines{}",
        name,
        buffer.line_count(),
        if buffer.is_dirty() { " (modified)" } else { "" },
    );
    let right = format!("{}/{}", buffer.cursor().line + 1, buffer.line_count());

    let cols = viewport.cols();
    left.truncate(cols);

    out.extend_from_slice(ansi::INVERT_VIDEO);
    out.extend_from_slice(left.as_bytes());
    let mut filled = left.len();
    while filled < cols {
        if cols - filled == right.len() {
            out.extend_from_slice(right.as_bytes());
            filled += right.len();
        } else {
            out.push(b' ');
            filled += 1;
        }
    }
    out.extend_from_slice(ansi::RESET_ATTRIBUTES);
    out.extend_from_slice(b"\r\n");
}

/// Draws the message line; an expired or absent message leaves it blank.
fn draw_message_line(out: &mut Vec<u8>, message: Option<&str>, cols: usize) {
    out.extend_from_slice(ansi::ERASE_LINE);
    if let Some(message) = message {
        let mut message = message.to_string();
        message.truncate(cols);
        out.extend_from_slice(message.as_bytes());
    }
}
