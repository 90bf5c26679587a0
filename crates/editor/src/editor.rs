//! The editor controller.
//!
//! `Editor` consolidates all mutable state — buffer, viewport, status
//! message, prompt focus, quit confirmation — into a single struct the
//! main loop drives. There is no ambient state: the controller is
//! constructed once with injected screen dimensions, so whole editing
//! sessions can run against scripted key sequences in tests.
//!
//! The state machine has two focus states. In `Focus::Buffer`, keys edit
//! the document and move the cursor. In `Focus::Prompt`, keys accumulate
//! into a [`PromptState`] (save-as filename or find query); the prompt
//! reports an outcome and the controller applies the effects, including
//! restoring the pre-search snapshot when an incremental search is
//! cancelled.

use std::mem;
use std::path::PathBuf;

use slate_buffer::{Position, TextBuffer};
use slate_input::Key;

use crate::config::Config;
use crate::file;
use crate::prompt::{PromptKind, PromptOutcome, PromptState, Snapshot};
use crate::renderer;
use crate::status::StatusMessage;
use crate::viewport::Viewport;

/// Which sub-state currently receives key events.
#[derive(Debug)]
pub enum Focus {
    /// Normal editing: keys mutate the document and move the cursor.
    Buffer,
    /// A prompt is collecting input on the message line.
    Prompt(PromptState),
}

/// The editor state machine tying key events to buffer mutations, cursor
/// motion, prompt sub-loops, and quit-confirmation bookkeeping.
pub struct Editor {
    buffer: TextBuffer,
    viewport: Viewport,
    status: StatusMessage,
    focus: Focus,
    config: Config,
    /// Remaining quit keypresses before a dirty buffer is abandoned.
    quit_presses_left: u32,
    should_quit: bool,
}

impl Editor {
    /// Creates a controller for a `screen_rows` × `screen_cols` terminal.
    pub fn new(buffer: TextBuffer, screen_rows: usize, screen_cols: usize, config: Config) -> Self {
        Self {
            buffer,
            viewport: Viewport::new(screen_rows, screen_cols),
            status: StatusMessage::new(config.message_timeout()),
            focus: Focus::Buffer,
            quit_presses_left: config.quit_confirm_times,
            config,
            should_quit: false,
        }
    }

    /// True once the user has confirmed quitting.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Sets the transient status message.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status.set(text);
    }

    /// Runs the per-frame scroll correction and composes the next frame.
    pub fn frame(&mut self) -> Vec<u8> {
        self.viewport.scroll(&self.buffer);
        let message = self.message_line();
        renderer::frame(&self.buffer, &self.viewport, message.as_deref())
    }

    /// The message line: prompt text while a prompt is active, otherwise
    /// the unexpired status message, if any.
    fn message_line(&self) -> Option<String> {
        match &self.focus {
            Focus::Prompt(prompt) => Some(prompt.message_line()),
            Focus::Buffer => self.status.current().map(str::to_string),
        }
    }

    /// Applies one logical key event.
    pub fn handle_key(&mut self, key: Key) {
        if matches!(self.focus, Focus::Buffer) {
            self.handle_buffer_key(key)
        } else {
            self.handle_prompt_key(key)
        }
    }

    // ==================== Normal-mode dispatch ====================

    fn handle_buffer_key(&mut self, key: Key) {
        // Any key other than the quit trigger re-arms the confirmation
        if key != Key::ctrl('q') {
            self.quit_presses_left = self.config.quit_confirm_times;
        }

        match key {
            Key::Char(byte) => self.buffer.insert_char(byte),
            Key::Enter => self.buffer.insert_newline(),
            Key::Backspace | Key::Ctrl(b'h') => self.buffer.delete_char_before(),
            Key::Delete => {
                // Forward delete is backspace shifted one column right
                self.move_cursor(Key::Right);
                self.buffer.delete_char_before();
            }
            Key::Up | Key::Down | Key::Left | Key::Right => self.move_cursor(key),
            Key::Home => {
                let cursor = self.buffer.cursor();
                self.buffer.set_cursor(Position::new(cursor.line, 0));
            }
            Key::End => {
                let cursor = self.buffer.cursor();
                let len = self.buffer.row_len(cursor.line);
                self.buffer.set_cursor(Position::new(cursor.line, len));
            }
            Key::PageUp | Key::PageDown => self.move_page(key),
            Key::Ctrl(b's') => self.save(),
            Key::Ctrl(b'f') => self.start_find(),
            Key::Ctrl(b'q') => self.request_quit(),
            Key::Escape | Key::Ctrl(_) => {}
        }
    }

    // ==================== Cursor motion ====================

    /// One-step cursor motion. Left at column 0 wraps to the end of the
    /// previous row, Right at row end wraps to the start of the next.
    /// `set_cursor` clamps the column after vertical moves across rows of
    /// different lengths.
    fn move_cursor(&mut self, key: Key) {
        let mut cursor = self.buffer.cursor();
        match key {
            Key::Up => cursor.line = cursor.line.saturating_sub(1),
            Key::Down => {
                if cursor.line < self.buffer.line_count() {
                    cursor.line += 1;
                }
            }
            Key::Left => {
                if cursor.col > 0 {
                    cursor.col -= 1;
                } else if cursor.line > 0 {
                    cursor.line -= 1;
                    cursor.col = self.buffer.row_len(cursor.line);
                }
            }
            Key::Right => {
                if cursor.col < self.buffer.row_len(cursor.line) {
                    cursor.col += 1;
                } else if cursor.line < self.buffer.line_count() {
                    cursor.line += 1;
                    cursor.col = 0;
                }
            }
            _ => {}
        }
        self.buffer.set_cursor(cursor);
    }

    /// Page motion: jump the cursor to the window edge, then step a full
    /// page so the viewport correction scrolls one screenful.
    fn move_page(&mut self, key: Key) {
        let mut cursor = self.buffer.cursor();
        let step = match key {
            Key::PageUp => {
                cursor.line = self.viewport.row_off();
                Key::Up
            }
            _ => {
                cursor.line = (self.viewport.row_off() + self.viewport.text_rows())
                    .saturating_sub(1)
                    .min(self.buffer.line_count());
                Key::Down
            }
        };
        self.buffer.set_cursor(cursor);
        for _ in 0..self.viewport.text_rows() {
            self.move_cursor(step);
        }
    }

    // ==================== Quit confirmation ====================

    /// Counts down the confirmation presses while the buffer is dirty.
    fn request_quit(&mut self) {
        if !self.buffer.is_dirty() {
            self.should_quit = true;
            return;
        }
        self.quit_presses_left = self.quit_presses_left.saturating_sub(1);
        if self.quit_presses_left == 0 {
            self.should_quit = true;
        } else {
            self.status.set(format!(
                "WARNING! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                self.quit_presses_left
            ));
        }
    }

    // ==================== Save ====================

    fn save(&mut self) {
        if self.buffer.filename().is_none() {
            self.focus = Focus::Prompt(PromptState::save_as());
            return;
        }
        self.save_to_named_file();
    }

    fn save_to_named_file(&mut self) {
        let Some(path) = self.buffer.filename().map(PathBuf::from) else {
            return;
        };
        let bytes = self.buffer.serialize();
        match file::save(&path, &bytes) {
            Ok(written) => {
                self.buffer.mark_saved();
                tracing::info!(path = %path.display(), bytes = written, "saved");
                self.status.set(format!("{} bytes written to disk", written));
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "save failed");
                self.status.set(format!("Can't save! I/O error: {}", error));
            }
        }
    }

    // ==================== Find ====================

    fn start_find(&mut self) {
        let snapshot = Snapshot {
            cursor: self.buffer.cursor(),
            row_off: self.viewport.row_off(),
            col_off: self.viewport.col_off(),
        };
        self.focus = Focus::Prompt(PromptState::find(snapshot));
    }

    /// Re-runs the search for the live query, moving the cursor to the
    /// first match at or after the pre-search row and forcing the next
    /// scroll correction to land the match at the top of the window.
    fn run_live_search(&mut self, prompt: &PromptState) {
        let PromptKind::Find { snapshot } = prompt.kind else {
            return;
        };
        if let Some((line, render_col)) = self.buffer.find(prompt.input.as_bytes(), snapshot.cursor.line)
        {
            let col = self
                .buffer
                .row(line)
                .map(|row| row.col_at_render_col(render_col))
                .unwrap_or(0);
            self.buffer.set_cursor(Position::new(line, col));
            self.viewport.force_row_to_top(self.buffer.line_count());
        }
    }

    // ==================== Prompt dispatch ====================

    fn handle_prompt_key(&mut self, key: Key) {
        let Focus::Prompt(mut prompt) = mem::replace(&mut self.focus, Focus::Buffer) else {
            return;
        };
        match prompt.handle_key(key) {
            PromptOutcome::Cancelled => match prompt.kind {
                PromptKind::SaveAs => self.status.set("Save aborted"),
                PromptKind::Find { snapshot } => {
                    // Transactional cancel: put cursor and view back exactly
                    self.buffer.set_cursor(snapshot.cursor);
                    self.viewport
                        .restore_offsets(snapshot.row_off, snapshot.col_off);
                }
            },
            PromptOutcome::Submitted => match prompt.kind {
                PromptKind::SaveAs => {
                    self.buffer.set_filename(PathBuf::from(&prompt.input));
                    self.save_to_named_file();
                }
                // The cursor is already sitting on the committed match
                PromptKind::Find { .. } => {}
            },
            PromptOutcome::Pending { changed } => {
                if changed {
                    self.run_live_search(&prompt);
                }
                self.focus = Focus::Prompt(prompt);
            }
        }
    }
}
