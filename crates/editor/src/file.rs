//! On-disk persistence for the save path.
//!
//! Saving overwrites the target in place: open with truncate, then write
//! the serialized bytes. This is intentionally *not* a transactional
//! write-to-temp-then-rename — a failure partway through can leave the
//! on-disk file clobbered while the in-memory buffer (and its dirty
//! counter) survive intact. The original design accepts that trade and so
//! does this one; callers must not reset the dirty counter unless the
//! whole write succeeded.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Writes `bytes` over the file at `path`, returning the byte count.
///
/// The file is created if missing and truncated to exactly the serialized
/// length otherwise. Any error — open, partial write, flush — is the
/// caller's signal that the save failed and dirty state must be kept.
pub fn save(path: &Path, bytes: &[u8]) -> io::Result<usize> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let written = save(&path, b"abc\ndef\n").unwrap();
        assert_eq!(written, 8);
        assert_eq!(std::fs::read(&path).unwrap(), b"abc\ndef\n");
    }

    #[test]
    fn save_truncates_longer_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        save(&path, b"a much longer first version\n").unwrap();
        save(&path, b"short\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"short\n");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        assert!(save(&path, b"x").is_err());
    }
}
