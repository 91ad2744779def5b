//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;

/// Width of the leading selection column ("[x]")
pub const SELECTION_COLUMN_WIDTH: u16 = 3;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the table area and a one line status bar below it
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Width of each data column: the widest of its title (plus room for a
    /// sort indicator) and its cells, capped at `max_width`.
    #[must_use]
    pub fn column_widths(titles: &[&str], rows: &[Vec<String>], max_width: u16) -> Vec<u16> {
        titles
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let widest_cell = rows
                    .iter()
                    .filter_map(|cells| cells.get(index))
                    .map(|cell| display_width(cell))
                    .max()
                    .unwrap_or(0);
                let widest = widest_cell.max(display_width(title) + 2);
                u16::try_from(widest).unwrap_or(u16::MAX).clamp(1, max_width)
            })
            .collect()
    }

    /// Horizontal spans `(x, width)` of consecutive columns laid out from `x`,
    /// clipped to `right`.
    #[must_use]
    pub fn column_spans(x: u16, right: u16, widths: &[u16], spacing: u16) -> Vec<(u16, u16)> {
        let mut spans = Vec::with_capacity(widths.len());
        let mut cursor = x;
        for width in widths {
            let visible = (*width).min(right.saturating_sub(cursor));
            spans.push((cursor, visible));
            cursor = cursor.saturating_add(*width).saturating_add(spacing);
        }
        spans
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

/// Terminal cell width of `text`
fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// What a screen position falls on within a rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A data column's header cell
    Header(usize),
    /// A body row, as an index into the derived view
    Row(usize),
}

/// Geometry of the last rendered table, kept for mouse hit testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableGeometry {
    /// Table interior (inside the border)
    pub inner: Rect,
    /// Spans of the data columns, selection column excluded
    pub columns: Vec<(u16, u16)>,
    /// Index of the first visible row
    pub row_offset: usize,
    /// Rows actually drawn
    pub visible_rows: usize,
}

impl TableGeometry {
    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.inner.x
            && column < self.inner.x + self.inner.width
            && row >= self.inner.y
            && row < self.inner.y + self.inner.height
    }

    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        if !self.contains(column, row) {
            return None;
        }

        // Header occupies the first interior line
        if row == self.inner.y {
            return self
                .columns
                .iter()
                .position(|(x, width)| column >= *x && column < x + width)
                .map(Hit::Header);
        }

        let local = (row - self.inner.y - 1) as usize;
        (local < self.visible_rows).then(|| Hit::Row(self.row_offset + local))
    }
}
