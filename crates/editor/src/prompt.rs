//! Prompt sub-state for save-as and incremental search.
//!
//! While a prompt is active the editor is in a suspended-normal state:
//! keystrokes accumulate into the prompt's input line instead of the
//! document, and the message line shows the prompt text. The prompt is
//! pure interaction state — it handles its own keys and reports an
//! outcome, and the controller translates outcomes into buffer or
//! viewport effects.
//!
//! The Find prompt carries a snapshot of the pre-search cursor and scroll
//! offsets so that cancelling is transactional: Escape puts everything
//! back exactly as it was.

use slate_buffer::Position;
use slate_input::Key;

/// Pre-search cursor and viewport state, restored on a cancelled search.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub cursor: Position,
    pub row_off: usize,
    pub col_off: usize,
}

/// Which prompt is active, with any state it needs to resolve.
#[derive(Debug, Clone, Copy)]
pub enum PromptKind {
    /// Collecting a filename for an unnamed buffer.
    SaveAs,
    /// Collecting an incremental search query.
    Find { snapshot: Snapshot },
}

/// Outcome of handling one key inside a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The prompt stays open. `changed` is true when the input text
    /// changed, which is what triggers a live re-search in Find mode.
    Pending { changed: bool },
    /// User pressed Escape — abandon the prompt.
    Cancelled,
    /// User pressed Enter with non-empty input — resolve the prompt.
    Submitted,
}

/// An active prompt: its kind and the input accumulated so far.
#[derive(Debug)]
pub struct PromptState {
    pub kind: PromptKind,
    pub input: String,
}

impl PromptState {
    /// Starts a save-as prompt.
    pub fn save_as() -> Self {
        Self {
            kind: PromptKind::SaveAs,
            input: String::new(),
        }
    }

    /// Starts a find prompt carrying the pre-search snapshot.
    pub fn find(snapshot: Snapshot) -> Self {
        Self {
            kind: PromptKind::Find { snapshot },
            input: String::new(),
        }
    }

    /// Handles one key of prompt input.
    ///
    /// Printable ASCII accumulates, Backspace (and its aliases) trims,
    /// Escape cancels, and Enter submits — but only once there is input,
    /// so an empty prompt can't resolve to an empty filename or query.
    /// Everything else is ignored.
    pub fn handle_key(&mut self, key: Key) -> PromptOutcome {
        match key {
            Key::Escape => PromptOutcome::Cancelled,
            Key::Enter => {
                if self.input.is_empty() {
                    PromptOutcome::Pending { changed: false }
                } else {
                    PromptOutcome::Submitted
                }
            }
            Key::Backspace | Key::Ctrl(b'h') | Key::Delete => {
                let changed = self.input.pop().is_some();
                PromptOutcome::Pending { changed }
            }
            Key::Char(byte) if (0x20..0x7f).contains(&byte) => {
                self.input.push(byte as char);
                PromptOutcome::Pending { changed: true }
            }
            _ => PromptOutcome::Pending { changed: false },
        }
    }

    /// The text shown on the message line while this prompt is active.
    pub fn message_line(&self) -> String {
        match self.kind {
            PromptKind::SaveAs => format!("Save as: {} (ESC to cancel)", self.input),
            PromptKind::Find { .. } => {
                format!("Search: {} (ESC to cancel, Enter to accept)", self.input)
            }
        }
    }
}
