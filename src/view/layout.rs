//! Screen layout: header row, image pane, footer row.

use crate::state::Session;
use crate::view::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::view::image_pane::ImagePane;
use crate::view::overlay::{Footer, Header};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Areas of one frame. Rows the terminal is too short for are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Top row
    pub header: Option<Rect>,
    /// Everything between the overlays, possibly zero rows tall
    pub pane: Rect,
    /// Bottom row, absent below two rows
    pub footer: Option<Rect>,
}

/// Split the frame into header, pane and footer.
///
/// A one-row terminal shows only the header; an empty one shows nothing.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    match area.height {
        0 => ScreenAreas {
            header: None,
            pane: Rect::new(area.x, area.y, area.width, 0),
            footer: None,
        },
        1 => ScreenAreas {
            header: Some(area),
            pane: Rect::new(area.x, area.bottom(), area.width, 0),
            footer: None,
        },
        _ => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(HEADER_HEIGHT),
                    Constraint::Min(0),
                    Constraint::Length(FOOTER_HEIGHT),
                ])
                .split(area);
            ScreenAreas {
                header: Some(chunks[0]),
                pane: chunks[1],
                footer: Some(chunks[2]),
            }
        }
    }
}

/// Draw the whole frame for `session`.
pub fn render_layout(frame: &mut Frame, session: &Session) {
    let areas = calculate_areas(frame.area());
    let state = session.viewport();

    frame.render_widget(
        ImagePane::new(session.scaled(), state.offset, state.color_mode),
        areas.pane,
    );
    if let Some(header) = areas.header {
        frame.render_widget(Header::new(session), header);
    }
    if let Some(footer) = areas.footer {
        frame.render_widget(Footer::new(session), footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{TerminalSize, OVERLAY_ROWS};

    #[test]
    fn regular_terminal_reserves_top_and_bottom_rows() {
        let areas = calculate_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header, Some(Rect::new(0, 0, 80, 1)));
        assert_eq!(areas.pane, Rect::new(0, 1, 80, 22));
        assert_eq!(areas.footer, Some(Rect::new(0, 23, 80, 1)));
    }

    #[test]
    fn overlay_rows_are_what_the_layout_reserves() {
        let areas = calculate_areas(Rect::new(0, 0, 12, 20));
        let reserved = 20 - areas.pane.height;
        assert_eq!(reserved, OVERLAY_ROWS);
        assert_eq!(HEADER_HEIGHT + FOOTER_HEIGHT, OVERLAY_ROWS);
    }

    #[test]
    fn pane_matches_viewport_extent() {
        for rows in 2..10u16 {
            let areas = calculate_areas(Rect::new(0, 0, 7, rows));
            let viewport = TerminalSize::new(7, rows).viewport();
            assert_eq!(usize::from(areas.pane.width), viewport.width);
            assert_eq!(usize::from(areas.pane.height), viewport.height);
        }
    }

    #[test]
    fn two_rows_leave_empty_pane() {
        let areas = calculate_areas(Rect::new(0, 0, 10, 2));
        assert_eq!(areas.pane.height, 0);
        assert_eq!(areas.footer, Some(Rect::new(0, 1, 10, 1)));
    }

    #[test]
    fn single_row_shows_header_only() {
        let areas = calculate_areas(Rect::new(0, 0, 10, 1));
        assert_eq!(areas.header, Some(Rect::new(0, 0, 10, 1)));
        assert_eq!(areas.pane.height, 0);
        assert_eq!(areas.footer, None);
    }

    #[test]
    fn empty_terminal_has_no_overlays() {
        let areas = calculate_areas(Rect::new(0, 0, 0, 0));
        assert_eq!(areas.header, None);
        assert_eq!(areas.footer, None);
    }
}
