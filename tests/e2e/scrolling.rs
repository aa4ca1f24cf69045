use crate::common::fixtures::TestFixture;
use crate::common::harness::{keys, EditorTestHarness};

/// 20x6 terminal: 5 text rows plus the status bar
fn harness_with_lines(count: usize) -> (EditorTestHarness, TestFixture) {
    let fixture = TestFixture::numbered_lines("lines.txt", count).unwrap();
    let harness = EditorTestHarness::with_file(20, 6, &fixture.path).unwrap();
    (harness, fixture)
}

#[test]
fn test_file_rows_fill_the_screen() {
    let (harness, _fixture) = harness_with_lines(30);
    assert_eq!(
        harness.text_rows(),
        vec!["line 0", "line 1", "line 2", "line 3", "line 4"]
    );
    assert!(harness.status_bar().contains("30 lines"));
}

#[test]
fn test_moving_down_scrolls_one_row_at_a_time() {
    let (mut harness, _fixture) = harness_with_lines(30);
    harness.send_repeated(keys::DOWN, 4).unwrap();
    assert_eq!(harness.screen_row(0), "line 0");
    assert_eq!(harness.screen_cursor_position(), (4, 0));

    harness.send_bytes(keys::DOWN).unwrap();
    assert_eq!(harness.screen_row(0), "line 1");
    assert_eq!(harness.screen_row(4), "line 5");
    assert_eq!(harness.screen_cursor_position(), (4, 0));
}

#[test]
fn test_moving_up_scrolls_back() {
    let (mut harness, _fixture) = harness_with_lines(30);
    harness.send_repeated(keys::DOWN, 7).unwrap();
    assert_eq!(harness.screen_row(0), "line 3");

    harness.send_repeated(keys::UP, 4).unwrap();
    assert_eq!(harness.screen_row(0), "line 3");
    assert_eq!(harness.screen_cursor_position(), (0, 0));

    harness.send_bytes(keys::UP).unwrap();
    assert_eq!(harness.screen_row(0), "line 2");
    assert_eq!(harness.screen_cursor_position(), (0, 0));
}

#[test]
fn test_page_down_and_page_up() {
    let (mut harness, _fixture) = harness_with_lines(30);

    // Bottom of the screen (line 4), then one screenful down (line 9).
    harness.send_bytes(keys::PAGE_DOWN).unwrap();
    assert_eq!(harness.screen_row(0), "line 5");
    assert_eq!(harness.screen_row(4), "line 9");
    assert_eq!(harness.screen_cursor_position(), (4, 0));

    // Top of the screen (line 5), then one screenful up (line 0).
    harness.send_bytes(keys::PAGE_UP).unwrap();
    assert_eq!(harness.screen_row(0), "line 0");
    assert_eq!(harness.screen_cursor_position(), (0, 0));
}

#[test]
fn test_page_down_stops_at_the_append_line() {
    let (mut harness, _fixture) = harness_with_lines(12);
    harness.send_repeated(keys::PAGE_DOWN, 5).unwrap();

    // Line 12 is the append line, drawn as a marker on the last text row.
    assert_eq!(harness.screen_row(4), "~");
    assert_eq!(harness.screen_row(3), "line 11");
    assert_eq!(harness.screen_cursor_position(), (4, 0));
}

#[test]
fn test_typing_past_the_end_extends_the_document() {
    let (mut harness, fixture) = harness_with_lines(8);
    harness.send_repeated(keys::DOWN, 8).unwrap();
    harness.type_text("tail").unwrap();

    assert_eq!(harness.screen_row(4), "tail");
    assert!(harness.status_bar().contains("9 lines"));
    assert!(harness.buffer_content().ends_with("line 7\ntail\n"));
    // Nothing is written until a save.
    assert!(!fixture.read_content().unwrap().contains("tail"));
}

#[test]
fn test_horizontal_scrolling() {
    let mut harness = EditorTestHarness::new(10, 4).unwrap();
    harness.type_text("abcdefghijklmno").unwrap();

    // Cursor at column 15 sits in the last screen column.
    assert_eq!(harness.screen_row(0), "ghijklmno");
    assert_eq!(harness.screen_cursor_position(), (0, 9));

    harness.send_bytes(keys::HOME).unwrap();
    assert!(harness.screen_row(0).starts_with("abcdefghi"));
    assert_eq!(harness.screen_cursor_position(), (0, 0));

    harness.send_bytes(keys::END).unwrap();
    assert_eq!(harness.screen_row(0), "ghijklmno");
}

#[test]
fn test_short_rows_blank_while_scrolled_right() {
    let mut harness = EditorTestHarness::new(10, 4).unwrap();
    harness.type_text("ab").unwrap();
    harness.send_bytes(keys::DOWN).unwrap();
    harness.type_text("0123456789abcd").unwrap();

    assert_eq!(harness.screen_row(0), "");
    assert_eq!(harness.screen_row(1), "56789abcd");
    assert_eq!(harness.screen_row(2), "~");
}
