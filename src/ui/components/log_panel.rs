//! Log panel for displaying the demo's recent log entries

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Modal list of log entries, newest first
pub struct LogPanel;

impl LogPanel {
    /// Area covered by the panel: 80% of `area`, centered
    #[must_use]
    pub fn area(area: Rect) -> Rect {
        let width = area.width.saturating_mul(8) / 10;
        let height = area.height.saturating_mul(8) / 10;
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    pub fn render(f: &mut Frame, area: Rect, logs: &[String]) {
        let modal_area = Self::area(area);
        f.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(" Log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        f.render_widget(block, modal_area);

        let inner_area = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner_area);

        let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(Color::Gray);
        let header = Paragraph::new(Line::from(vec![
            Span::styled("D", key),
            Span::styled("/", hint),
            Span::styled("Esc", key),
            Span::styled(" close, ", hint),
            Span::styled("c", key),
            Span::styled(" clear", hint),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        if logs.is_empty() {
            let empty = Paragraph::new("No log entries")
                .style(hint)
                .alignment(Alignment::Center);
            f.render_widget(empty, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = logs
            .iter()
            .take(chunks[1].height as usize)
            .map(|entry| match entry.find("] ") {
                Some(end) => ListItem::new(Line::from(vec![
                    Span::styled(entry[..=end].to_string(), Style::default().fg(Color::DarkGray)),
                    Span::raw(entry[end + 1..].to_string()),
                ])),
                None => ListItem::new(entry.clone()),
            })
            .collect();

        f.render_widget(List::new(items), chunks[1]);
    }
}
