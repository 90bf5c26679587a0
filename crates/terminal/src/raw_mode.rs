//! Raw terminal mode via termios.
//!
//! `RawMode` owns the transition between the terminal's default
//! line-buffered discipline and the raw, unbuffered mode the editor needs:
//! no echo, no canonical line assembly, no signal keys, no flow control, no
//! CR/NL translation, no output post-processing, 8-bit characters, and a
//! bounded read tick (`VMIN = 0`, `VTIME = 1`) so a read returns after
//! ~100ms even with no input pending. The bounded tick is the editor's only
//! scheduling primitive; it keeps time-based state (status message expiry)
//! accurate while idle.
//!
//! Restoration is guaranteed on every exit path: `Drop` re-applies the
//! captured attributes as a backstop, and callers that care about reporting
//! a failed restore call [`RawMode::restore`] explicitly before exit.

use std::io;
use std::mem;
use std::os::unix::io::RawFd;

/// Guard over the terminal's saved attributes.
///
/// Constructing one switches the given descriptor into raw mode; dropping
/// it (or calling [`RawMode::restore`]) switches back.
#[derive(Debug)]
pub struct RawMode {
    fd: RawFd,
    original: libc::termios,
    restored: bool,
}

impl RawMode {
    /// Captures the current terminal attributes on `fd` and applies raw mode.
    ///
    /// Fails if the descriptor is not a terminal or the attributes cannot
    /// be read or written. Continuing without raw mode would leave the
    /// editor reading cooked lines, so callers treat this as fatal.
    pub fn enable(fd: RawFd) -> io::Result<RawMode> {
        // SAFETY: termios is a plain C struct; tcgetattr fully initializes
        // it on success, and we only read it after checking the return code.
        let mut original: libc::termios = unsafe { mem::zeroed() };
        if unsafe { libc::tcgetattr(fd, &mut original) } != 0 {
            return Err(io::Error::last_os_error());
        }

        let mut raw = original;
        raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
        raw.c_oflag &= !libc::OPOST;
        raw.c_cflag |= libc::CS8;
        raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
        // Bounded tick: read returns after 1/10s even with zero bytes
        raw.c_cc[libc::VMIN] = 0;
        raw.c_cc[libc::VTIME] = 1;

        if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, &raw) } != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(RawMode {
            fd,
            original,
            restored: false,
        })
    }

    /// Re-applies the originally captured attributes.
    ///
    /// Idempotent; the `Drop` backstop becomes a no-op once this has run.
    /// A failure here means the terminal is being left in raw mode, which
    /// callers report as fatal.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        if unsafe { libc::tcsetattr(self.fd, libc::TCSAFLUSH, &self.original) } != 0 {
            return Err(io::Error::last_os_error());
        }
        self.restored = true;
        Ok(())
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        // Errors cannot be reported from Drop; the explicit restore() path
        // exists for callers that need to surface them.
        let _ = self.restore();
    }
}
