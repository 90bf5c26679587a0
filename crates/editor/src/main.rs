//! slate binary: terminal bracket and the main loop.
//!
//! All editor logic lives in the library; this file owns the process
//! boundary. It parses the single optional file argument, sets up file
//! logging, switches the terminal into raw mode for the process lifetime,
//! and runs the {scroll → render → read key → apply} loop. Only the
//! OS-facing setup calls and the read loop may terminate the process:
//! every fatal path restores the terminal, prints a diagnostic, and exits
//! non-zero, while user-initiated quit exits zero.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::process;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use slate::config::Config;
use slate::renderer;
use slate::Editor;
use slate_buffer::TextBuffer;
use slate_terminal::{ansi, window_size, KeyDecoder, RawMode};

fn main() {
    init_logging();
    let config = Config::load();
    let path = env::args().nth(1);
    tracing::info!(
        version = renderer::VERSION,
        file = path.as_deref().unwrap_or("<unnamed>"),
        "starting"
    );

    if let Err(error) = run(path, config) {
        tracing::error!(%error, "fatal");
        eprintln!("slate: {}", error);
        process::exit(1);
    }
}

/// Brackets the session in raw mode and reports the first fatal error.
fn run(path: Option<String>, config: Config) -> io::Result<()> {
    let mut raw = RawMode::enable(io::stdin().as_raw_fd())?;
    tracing::debug!("raw mode enabled");

    let result = session(path, config);

    // Leave a clean screen behind regardless of how the session ended
    let mut stdout = io::stdout();
    let _ = stdout.write_all(ansi::ERASE_SCREEN);
    let _ = stdout.write_all(ansi::CURSOR_HOME);
    let _ = stdout.flush();

    // Explicit restore so a failure is reported; Drop is only the backstop
    raw.restore()?;
    tracing::debug!("raw mode restored");
    result
}

/// The editing session: one controller, one loop, one frame per iteration.
fn session(path: Option<String>, config: Config) -> io::Result<()> {
    let buffer = match &path {
        Some(path) => {
            let buffer = TextBuffer::open(path)?;
            tracing::info!(path, lines = buffer.line_count(), "opened");
            buffer
        }
        None => TextBuffer::new(),
    };

    // Window size comes after raw mode: the fallback measurement needs
    // raw reads from stdin
    let (rows, cols) = window_size()?;
    let mut editor = Editor::new(buffer, rows, cols, config);
    editor.set_status("HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find");

    let mut decoder = KeyDecoder::new(io::stdin());
    let mut stdout = io::stdout();

    loop {
        let frame = editor.frame();
        stdout.write_all(&frame)?;
        stdout.flush()?;

        // A timed-out read is a tick: fall through and repaint so
        // time-based state (message expiry) stays fresh
        if let Some(key) = decoder.read_key()? {
            editor.handle_key(key);
        }
        if editor.should_quit() {
            tracing::info!("quit");
            return Ok(());
        }
    }
}

/// Sets up file logging, gated by `SLATE_LOG`.
///
/// stdout is the editor surface, so log output goes to
/// `<data_dir>/slate/slate.log`. The env var doubles as the filter
/// directive (e.g. `SLATE_LOG=debug`). Any setup failure silently
/// disables logging; the editor must come up regardless.
fn init_logging() {
    if env::var_os("SLATE_LOG").is_none() {
        return;
    }
    let Some(dir) = dirs::data_dir().map(|dir| dir.join("slate")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("slate.log"))
    else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("SLATE_LOG"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
