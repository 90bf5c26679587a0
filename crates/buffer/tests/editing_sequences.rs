//! Integration tests for realistic editing sequences.
//!
//! These tests verify that the rows, the cursor, and the dirty counter
//! stay consistent through longer editing patterns than the unit tests
//! exercise one operation at a time.

use slate_buffer::{Position, TextBuffer};

fn type_str(buffer: &mut TextBuffer, text: &str) {
    for byte in text.bytes() {
        buffer.insert_char(byte);
    }
}

fn content(buffer: &TextBuffer) -> Vec<u8> {
    buffer.serialize()
}

#[test]
fn type_word_then_delete_entirely() {
    let mut buffer = TextBuffer::new();

    type_str(&mut buffer, "hello");
    assert_eq!(content(&buffer), b"hello\n");
    assert_eq!(buffer.cursor(), Position::new(0, 5));

    for _ in 0..5 {
        buffer.delete_char_before();
    }
    assert_eq!(content(&buffer), b"\n");
    assert_eq!(buffer.cursor(), Position::new(0, 0));
}

#[test]
fn type_multiple_lines_and_edit_the_middle() {
    let mut buffer = TextBuffer::new();

    type_str(&mut buffer, "first line");
    buffer.insert_newline();
    type_str(&mut buffer, "second line");
    buffer.insert_newline();
    type_str(&mut buffer, "third line");

    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.row(1).unwrap().chars(), b"second line");

    buffer.set_cursor(Position::new(1, 7)); // "second |line"
    type_str(&mut buffer, "awesome ");
    assert_eq!(buffer.row(1).unwrap().chars(), b"second awesome line");
}

#[test]
fn split_and_rejoin_lines() {
    let mut buffer = TextBuffer::from_text("helloworld");

    buffer.set_cursor(Position::new(0, 5));
    buffer.insert_newline();

    assert_eq!(buffer.line_count(), 2);
    assert_eq!(buffer.row(0).unwrap().chars(), b"hello");
    assert_eq!(buffer.row(1).unwrap().chars(), b"world");

    buffer.delete_char_before();

    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.row(0).unwrap().chars(), b"helloworld");
    assert_eq!(buffer.cursor(), Position::new(0, 5));
}

#[test]
fn rapid_insert_delete_cycles() {
    let mut buffer = TextBuffer::new();

    type_str(&mut buffer, "teh"); // typo
    buffer.delete_char_before();
    buffer.delete_char_before();
    buffer.delete_char_before();
    type_str(&mut buffer, "the");

    type_str(&mut buffer, " quikc"); // typo
    buffer.delete_char_before();
    buffer.delete_char_before();
    type_str(&mut buffer, "ck");

    type_str(&mut buffer, " brown fox");

    assert_eq!(content(&buffer), b"the quick brown fox\n");
}

#[test]
fn empty_line_runs_survive_editing() {
    let mut buffer = TextBuffer::from_text("first\n\n\nlast\n");

    assert_eq!(buffer.line_count(), 4);
    assert!(buffer.row(1).unwrap().is_empty());
    assert!(buffer.row(2).unwrap().is_empty());

    buffer.set_cursor(Position::new(2, 0));
    type_str(&mut buffer, "middle");
    assert_eq!(buffer.row(2).unwrap().chars(), b"middle");
    assert_eq!(content(&buffer), b"first\n\nmiddle\nlast\n");
}

#[test]
fn line_join_walks_a_document_back_into_one_row() {
    let mut buffer = TextBuffer::from_text("ab\ncd\nef\n");

    // Join from the start of each later line, bottom to top
    buffer.set_cursor(Position::new(2, 0));
    buffer.delete_char_before();
    assert_eq!(buffer.row(1).unwrap().chars(), b"cdef");

    buffer.set_cursor(Position::new(1, 0));
    buffer.delete_char_before();
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.row(0).unwrap().chars(), b"abcdef");
}

#[test]
fn dirty_counter_tracks_every_mutation() {
    let mut buffer = TextBuffer::from_text("abc\n");
    assert_eq!(buffer.dirty(), 0);

    type_str(&mut buffer, "xy");
    buffer.insert_newline();
    buffer.delete_char_before();
    assert_eq!(buffer.dirty(), 4);

    buffer.mark_saved();
    assert_eq!(buffer.dirty(), 0);

    buffer.insert_char(b'z');
    assert!(buffer.is_dirty());
}

#[test]
fn serialization_round_trips_after_mixed_edits() {
    let mut buffer = TextBuffer::from_text("alpha\nbeta\ngamma\n");

    buffer.set_cursor(Position::new(1, 4));
    buffer.insert_newline();
    type_str(&mut buffer, "delta");
    buffer.set_cursor(Position::new(0, 0));
    buffer.delete_row(3);

    let saved = buffer.serialize();
    let reloaded = TextBuffer::from_text(std::str::from_utf8(&saved).unwrap());
    assert_eq!(reloaded.serialize(), saved);
    assert_eq!(reloaded.line_count(), buffer.line_count());
}

#[test]
fn tab_rows_keep_render_in_sync_through_edits() {
    let mut buffer = TextBuffer::new();

    type_str(&mut buffer, "a\tb");
    assert_eq!(buffer.row(0).unwrap().render(), b"a       b");

    // Deleting the tab collapses the render form again
    buffer.set_cursor(Position::new(0, 2));
    buffer.delete_char_before();
    assert_eq!(buffer.row(0).unwrap().chars(), b"ab");
    assert_eq!(buffer.row(0).unwrap().render(), b"ab");
}
