//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::STATUS_KEY_HINTS;

/// Snapshot of what the status bar reports
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub story: String,
    pub sort: String,
    pub selected: usize,
    pub message: Option<String>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo) {
        let mut spans = vec![
            Span::styled(format!(" {} ", info.story), Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(format!(" sort: {} • selected: {} ", info.sort, info.selected)),
        ];

        match &info.message {
            Some(message) => spans.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow))),
            None => spans.push(Span::styled(STATUS_KEY_HINTS, Style::default().fg(Color::Gray))),
        }

        let status_bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
        f.render_widget(status_bar, area);
    }
}
