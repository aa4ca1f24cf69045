use crate::common::fixtures::TestFixture;
use crate::common::harness::{keys, EditorTestHarness};

#[test]
fn test_typed_text_appears_on_screen() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("hello").unwrap();

    assert_eq!(harness.screen_row(0), "hello");
    assert_eq!(harness.screen_cursor_position(), (0, 5));
    assert_eq!(harness.buffer_content(), "hello\n");
}

#[test]
fn test_insert_in_the_middle_of_a_row() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("helo").unwrap();
    harness.send_bytes(keys::LEFT).unwrap();
    harness.type_text("l").unwrap();

    assert_eq!(harness.screen_row(0), "hello");
    assert_eq!(harness.screen_cursor_position(), (0, 4));
}

#[test]
fn test_typing_on_the_append_line_adds_a_row() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("one").unwrap();
    harness.send_bytes(keys::DOWN).unwrap();
    assert_eq!(harness.screen_cursor_position(), (1, 0));

    harness.type_text("two").unwrap();
    assert_eq!(harness.screen_row(0), "one");
    assert_eq!(harness.screen_row(1), "two");
    assert_eq!(harness.screen_row(2), "~");
    assert_eq!(harness.buffer_content(), "one\ntwo\n");
    assert!(harness.status_bar().contains("2 lines"));
}

#[test]
fn test_left_and_right_wrap_across_lines() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("one").unwrap();
    harness.send_bytes(keys::DOWN).unwrap();
    harness.type_text("two").unwrap();

    harness.send_bytes(keys::HOME).unwrap();
    harness.send_bytes(keys::LEFT).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 3));

    harness.send_bytes(keys::RIGHT).unwrap();
    assert_eq!(harness.screen_cursor_position(), (1, 0));
}

#[test]
fn test_vertical_moves_clamp_the_column() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("ab").unwrap();
    harness.send_bytes(keys::DOWN).unwrap();
    harness.type_text("abcdef").unwrap();

    harness.send_bytes(keys::UP).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 2));

    // The column is not remembered across moves.
    harness.send_bytes(keys::DOWN).unwrap();
    assert_eq!(harness.screen_cursor_position(), (1, 2));
}

#[test]
fn test_home_and_end() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("some text").unwrap();

    harness.send_bytes(keys::HOME).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 0));
    harness.send_bytes(keys::END).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 9));

    // Alternative encodings
    harness.send_bytes(b"\x1b[1~").unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 0));
    harness.send_bytes(b"\x1bOF").unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 9));
}

#[test]
fn test_end_on_append_line_does_nothing() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("abc").unwrap();
    harness.send_bytes(keys::DOWN).unwrap();
    harness.send_bytes(keys::END).unwrap();
    assert_eq!(harness.screen_cursor_position(), (1, 0));
}

#[test]
fn test_non_editing_keys_leave_buffer_alone() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("abc").unwrap();
    harness.send_bytes(keys::LEFT).unwrap();

    for key in [
        keys::ENTER,
        keys::BACKSPACE,
        keys::DELETE,
        keys::ESCAPE,
        keys::CTRL_L,
    ] {
        harness.send_bytes(key).unwrap();
    }

    assert_eq!(harness.buffer_content(), "abc\n");
    assert_eq!(harness.screen_cursor_position(), (0, 2));
    assert!(!harness.should_quit());
}

#[test]
fn test_arrow_keys_at_document_edges() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.send_bytes(keys::UP).unwrap();
    harness.send_bytes(keys::LEFT).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 0));

    // The empty document only has the append line.
    harness.send_bytes(keys::DOWN).unwrap();
    harness.send_bytes(keys::RIGHT).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 0));
    assert_eq!(harness.buffer_content(), "");
}

#[test]
fn test_split_escape_sequence_in_one_read() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.send_bytes(b"xy\x1b[Dz").unwrap();
    assert_eq!(harness.screen_row(0), "xzy");
}

#[test]
fn test_file_with_carriage_returns_displays_cleanly() {
    let fixture = TestFixture::new("cr.txt", "hello\r").unwrap();
    let harness = EditorTestHarness::with_file(40, 10, &fixture.path).unwrap();

    assert_eq!(harness.screen_row(0), "hello");
    assert_eq!(harness.buffer_content(), "hello\n");
}

#[test]
fn test_file_with_old_mac_line_endings_loads_as_rows() {
    let fixture = TestFixture::new("mac.txt", "one\rtwo\r").unwrap();
    let harness = EditorTestHarness::with_file(40, 10, &fixture.path).unwrap();

    assert_eq!(harness.screen_row(0), "one");
    assert_eq!(harness.screen_row(1), "two");
    assert_eq!(harness.screen_row(2), "~");
}
