//! slate: a minimal terminal text editor for Unix-like systems.
//!
//! One file, one screen, raw VT100: open a file, page through it, edit,
//! incrementally search, save. The library half of this crate holds all
//! editor logic — the [`Editor`] controller, viewport and frame
//! composition, prompt sub-states, and configuration — with screen
//! dimensions injected so every piece runs under test without a terminal.
//! The binary half (`main.rs`) brackets it with raw mode and the real
//! stdin/stdout.
//!
//! # Architecture
//!
//! ```text
//! stdin bytes → KeyDecoder → Key events → Editor ─┬→ TextBuffer (edits)
//! (slate-terminal)          (slate-input)         ├→ Viewport (scroll)
//!                                                 └→ Renderer → one frame write
//! ```
//!
//! The loop is single-threaded and synchronous; the only scheduling
//! primitive is the decoder's bounded read tick, which returns control to
//! the loop even with no input so time-based state (status message
//! expiry) stays accurate.

pub mod config;
pub mod editor;
pub mod file;
pub mod prompt;
pub mod renderer;
pub mod status;
pub mod viewport;

pub use config::Config;
pub use editor::{Editor, Focus};
pub use viewport::Viewport;
