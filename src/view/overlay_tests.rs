//! Tests for header and footer overlays.

use super::*;
use crate::model::{ColorBucket, Emphasis, Extent, GlyphBuffer, GlyphCell, KeyAction};
use crate::state::{SessionSettings, TerminalSize};
use ratatui::style::Modifier;

fn session(width: usize, height: usize, terminal: TerminalSize) -> Session {
    let native = GlyphBuffer::filled(
        Extent::new(width, height),
        GlyphCell::new('#', Emphasis::Bold, ColorBucket::White),
    );
    let mut session = Session::new("cat.png", native, SessionSettings::default()).unwrap();
    session.set_terminal_size(terminal);
    session
}

fn footer(left: &str, center: &str, right: &str) -> FooterText {
    FooterText {
        left: left.to_string(),
        center: center.to_string(),
        right: right.to_string(),
    }
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

// ===== Text content =====

#[test]
fn header_names_file_and_native_size() {
    let session = session(10, 10, TerminalSize::new(80, 24));
    insta::assert_snapshot!(header_text(&session), @"Displaying: cat.png size: 10x10");
}

#[test]
fn footer_reports_terminal_position_zoom_and_color() {
    let session = session(40, 30, TerminalSize::new(20, 12));
    let text = FooterText::for_session(&session);
    insta::assert_snapshot!(text.left, @"Terminal resolution: 20x12");
    insta::assert_snapshot!(text.center, @"x: 20/40 | y: 10/30 | zoom: 100% | color: off");
    insta::assert_snapshot!(text.right, @"PRESS q TO QUIT");
}

#[test]
fn footer_position_caps_at_buffer_edge() {
    let session = session(10, 10, TerminalSize::new(100, 24));
    let text = FooterText::for_session(&session);
    assert_eq!(text.center, "x: 10/10 | y: 10/10 | zoom: 100% | color: off");
}

#[test]
fn footer_tracks_pan_zoom_and_color_changes() {
    let mut session = session(40, 30, TerminalSize::new(20, 12));
    session.apply(KeyAction::PanRight).unwrap();
    session.apply(KeyAction::PanDown).unwrap();
    session.apply(KeyAction::ToggleColor).unwrap();
    session.apply(KeyAction::ZoomOut).unwrap();

    let text = FooterText::for_session(&session);
    assert!(text.center.ends_with("zoom: 99% | color: on"), "{}", text.center);
    assert!(text.center.contains("/39 "), "{}", text.center);
}

// ===== Width helpers =====

#[test]
fn truncate_keeps_prefix_within_width() {
    assert_eq!(truncate_to_width("Terminal", 4), "Term");
    assert_eq!(truncate_to_width("abc", 10), "abc");
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn truncate_never_splits_wide_characters() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(truncate_to_width("日本語", 4), "日本");
    assert_eq!(truncate_to_width("日本語", 3), "日");
}

// ===== Placement policy =====

#[test]
fn wide_row_places_all_three_segments() {
    let text = footer(
        "Terminal resolution: 100x24",
        "x: 10/10 | y: 10/10 | zoom: 100% | color: off",
        QUIT_HINT,
    );
    let placed = place_footer(&text, 100);
    assert_eq!(
        placed,
        vec![
            Placement { col: 0, text: "Terminal resolution: 100x24" },
            Placement { col: 28, text: "x: 10/10 | y: 10/10 | zoom: 100% | color: off" },
            Placement { col: 85, text: QUIT_HINT },
        ]
    );
}

#[test]
fn center_is_dropped_when_it_cannot_fit_between_neighbours() {
    let text = footer(
        "Terminal resolution: 80x24",
        "x: 10/10 | y: 10/10 | zoom: 100% | color: off",
        QUIT_HINT,
    );
    let placed = place_footer(&text, 80);
    assert_eq!(
        placed,
        vec![
            Placement { col: 0, text: "Terminal resolution: 80x24" },
            Placement { col: 65, text: QUIT_HINT },
        ]
    );
}

#[test]
fn center_shifts_right_of_long_left_segment() {
    let text = footer("left-segment-is-long", "mid", "R");
    let placed = place_footer(&text, 30);
    // Centered start would be 14, inside the left segment.
    assert_eq!(placed[1], Placement { col: 21, text: "mid" });
    assert_eq!(placed[2], Placement { col: 29, text: "R" });
}

#[test]
fn right_is_dropped_when_it_would_overlap_left() {
    let text = footer("Terminal resolution: 30x24", "center", QUIT_HINT);
    let placed = place_footer(&text, 30);
    assert_eq!(
        placed,
        vec![Placement { col: 0, text: "Terminal resolution: 30x24" }]
    );
}

#[test]
fn left_is_truncated_on_tiny_rows() {
    let text = footer("Terminal resolution: 10x24", "c", QUIT_HINT);
    let placed = place_footer(&text, 10);
    assert_eq!(placed, vec![Placement { col: 0, text: "Terminal r" }]);
}

#[test]
fn zero_width_row_places_nothing() {
    let text = footer("left", "center", "right");
    assert!(place_footer(&text, 0).is_empty());
}

// ===== Widgets =====

#[test]
fn footer_row_renders_segments_in_reverse_video() {
    let session = session(10, 10, TerminalSize::new(100, 24));
    let area = Rect::new(0, 0, 100, 1);
    let mut buf = Buffer::empty(area);
    Footer::new(&session).render(area, &mut buf);

    insta::assert_snapshot!(
        row_text(&buf, 0),
        @"Terminal resolution: 100x24 x: 10/10 | y: 10/10 | zoom: 100% | color: off            PRESS q TO QUIT"
    );
    for x in 0..area.width {
        assert!(
            buf[(x, 0)].modifier.contains(Modifier::REVERSED),
            "cell {x} is not reverse video"
        );
    }
}

#[test]
fn footer_overwrites_stale_content() {
    let session = session(10, 10, TerminalSize::new(40, 3));
    let area = Rect::new(0, 0, 40, 1);
    let mut buf = Buffer::filled(area, ratatui::buffer::Cell::new("X"));
    Footer::new(&session).render(area, &mut buf);

    assert!(!row_text(&buf, 0).contains('X'));
}

#[test]
fn header_is_truncated_to_row() {
    let session = session(10, 10, TerminalSize::new(12, 24));
    let area = Rect::new(0, 0, 12, 1);
    let mut buf = Buffer::empty(area);
    Header::new(&session).render(area, &mut buf);

    assert_eq!(row_text(&buf, 0), "Displaying: ");
    assert!(buf[(0, 0)].modifier.contains(Modifier::REVERSED));
}
