//! Terminal window size query.
//!
//! The primary path is the `TIOCGWINSZ` ioctl. Some terminals report a zero
//! size (or lack the ioctl entirely), so there is a fallback that walks the
//! cursor to the bottom-right corner with large forward/down moves and asks
//! the terminal where the cursor ended up via the Device Status Report
//! query (`ESC [ 6 n`). The fallback requires raw mode to already be active
//! on stdin, which is how the editor calls it.

use std::io::{self, Read, Write};
use std::mem;

/// Returns the terminal size as `(rows, cols)`.
pub fn window_size() -> io::Result<(usize, usize)> {
    // SAFETY: winsize is a plain C struct the ioctl fills in on success.
    let mut ws: libc::winsize = unsafe { mem::zeroed() };
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };
    if rc == -1 || ws.ws_col == 0 {
        return cursor_position_fallback();
    }
    Ok((ws.ws_row as usize, ws.ws_col as usize))
}

/// Measures the window by moving the cursor to the corner and querying it.
///
/// `ESC [ 999 C` / `ESC [ 999 B` move right/down but stop at the screen
/// edge, so the subsequent cursor-position report gives the dimensions.
fn cursor_position_fallback() -> io::Result<(usize, usize)> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x1b[999C\x1b[999B\x1b[6n")?;
    stdout.flush()?;

    // The reply is `ESC [ <rows> ; <cols> R`
    let mut reply = Vec::with_capacity(16);
    let mut stdin = io::stdin();
    let mut byte = [0u8; 1];
    while reply.len() < 32 {
        if stdin.read(&mut byte)? == 0 {
            break;
        }
        if byte[0] == b'R' {
            break;
        }
        reply.push(byte[0]);
    }

    parse_cursor_report(&reply)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "bad cursor position report"))
}

fn parse_cursor_report(reply: &[u8]) -> Option<(usize, usize)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}
