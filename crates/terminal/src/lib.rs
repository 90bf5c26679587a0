//! slate-terminal: the OS-facing terminal layer for the slate editor.
//!
//! This crate owns everything that touches the terminal device directly:
//!
//! - [`RawMode`]: the termios raw-mode guard with restore-on-drop
//! - [`window_size`]: terminal dimensions via ioctl, with a
//!   cursor-position-query fallback
//! - [`KeyDecoder`]: raw byte stream → logical [`Key`](slate_input::Key)
//!   events, escape sequences included
//! - [`ansi`]: the control-sequence vocabulary the renderer emits
//!
//! Everything above this crate (buffer, viewport, renderer composition,
//! controller) is pure and terminal-free; everything unsafe or
//! platform-specific funnels through here.

pub mod ansi;
mod decoder;
mod raw_mode;
mod window;

pub use decoder::KeyDecoder;
pub use raw_mode::RawMode;
pub use window::window_size;
