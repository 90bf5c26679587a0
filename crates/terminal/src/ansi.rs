//! The ANSI/VT100 control vocabulary the editor emits.
//!
//! Kept in one place so the renderer composes frames from named sequences
//! instead of scattered byte literals. Only the standard subset is used;
//! no alternate-screen-buffer save/restore.

/// Makes the cursor invisible while a frame is painted.
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
/// Makes the cursor visible again at the end of a frame.
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
/// Moves the cursor to the top-left corner.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Erases from the cursor to the end of the line.
pub const ERASE_LINE: &[u8] = b"\x1b[K";
/// Erases the entire screen.
pub const ERASE_SCREEN: &[u8] = b"\x1b[2J";
/// Switches to inverted video (used for the status bar).
pub const INVERT_VIDEO: &[u8] = b"\x1b[7m";
/// Resets all text attributes.
pub const RESET_ATTRIBUTES: &[u8] = b"\x1b[m";

/// Absolute cursor positioning; `row` and `col` are 1-indexed.
pub fn cursor_position(row: usize, col: usize) -> Vec<u8> {
    format!("\x1b[{};{}H", row, col).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_position_is_one_indexed_csi() {
        assert_eq!(cursor_position(1, 1), b"\x1b[1;1H");
        assert_eq!(cursor_position(24, 80), b"\x1b[24;80H");
    }
}
