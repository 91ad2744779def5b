//! Scrolling support for the table body.
//!
//! Keeps the cursor row on screen and draws a scrollbar beside the rows when
//! they overflow the viewport.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Lines inside a bordered table that are not body rows: two borders and the header
const NON_BODY_LINES: u16 = 3;

pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Number of body rows that fit in a bordered table of `rect`
    #[must_use]
    pub fn body_height(rect: Rect) -> usize {
        rect.height.saturating_sub(NON_BODY_LINES) as usize
    }

    /// Split `rect` into the table area and, when `total_rows` overflow the
    /// body, a one column scrollbar track alongside the rows.
    #[must_use]
    pub fn calculate_areas(rect: Rect, total_rows: usize) -> (Rect, Option<Rect>) {
        if total_rows <= Self::body_height(rect) {
            return (rect, None);
        }

        let table_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 2, // Below top border and header
            width: 1,
            height: rect.height.saturating_sub(NON_BODY_LINES),
        };
        (table_area, Some(scrollbar_area))
    }

    /// Smallest change to `offset` that keeps `cursor` within a viewport of
    /// `viewport` rows.
    #[must_use]
    pub fn follow_cursor(offset: usize, cursor: usize, viewport: usize, total_rows: usize) -> usize {
        if viewport == 0 || total_rows == 0 {
            return 0;
        }

        let max_offset = total_rows.saturating_sub(viewport);
        let offset = if cursor < offset {
            cursor
        } else if cursor >= offset + viewport {
            cursor + 1 - viewport
        } else {
            offset
        };
        offset.min(max_offset)
    }

    pub fn update_state(&mut self, total_rows: usize, position: usize, viewport: usize) {
        self.state = self
            .state
            .content_length(total_rows.saturating_sub(viewport) + 1)
            .viewport_content_length(viewport)
            .position(position);
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            // Needs room for both arrows and at least one track cell
            if area.height < 3 {
                return;
            }

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
