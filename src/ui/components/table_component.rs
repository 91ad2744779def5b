use crate::config::Config;
use crate::icons::IconService;
use crate::table::{DataTable, HeaderCell, Record, RowView, TableView, ViewState};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component};
use crate::ui::layout::{Hit, LayoutManager, TableGeometry, SELECTION_COLUMN_WIDTH};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Terminal front end for a [`DataTable`].
///
/// Features:
/// - Click a sortable header (or press `s`/`1`-`9`) to sort
/// - Click a row (or press Space/Enter) to toggle its selection
/// - Row and column cursor with j/k/h/l and arrow keys
/// - Scrolling with a scrollbar once rows overflow
pub struct TableComponent<R: Record> {
    table: DataTable<R>,
    title: String,
    icons: IconService,
    loading_text: String,
    empty_text: String,
    max_column_width: u16,
    column_spacing: u16,
    mouse_enabled: bool,
    cursor_row: usize,
    cursor_column: usize,
    row_offset: usize,
    geometry: Option<TableGeometry>,
    scrollbar: ScrollbarHelper,
}

impl<R: Record + Clone> TableComponent<R> {
    pub fn new(table: DataTable<R>) -> Self {
        let defaults = Config::default();
        Self {
            table,
            title: String::new(),
            icons: IconService::default(),
            loading_text: defaults.table.loading_text,
            empty_text: defaults.table.empty_text,
            max_column_width: defaults.table.max_column_width,
            column_spacing: defaults.table.column_spacing,
            mouse_enabled: defaults.ui.mouse_enabled,
            cursor_row: 0,
            cursor_column: 0,
            row_offset: 0,
            geometry: None,
            scrollbar: ScrollbarHelper::new(),
        }
    }

    /// Apply presentation settings from the configuration
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.icons = IconService::new(config.ui.icon_theme);
        self.loading_text = config.table.loading_text.clone();
        self.empty_text = config.table.empty_text.clone();
        self.max_column_width = config.table.max_column_width;
        self.column_spacing = config.table.column_spacing;
        self.mouse_enabled = config.ui.mouse_enabled;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn table(&self) -> &DataTable<R> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable<R> {
        &mut self.table
    }

    /// Replace the table's records, keeping the cursor in range
    pub fn set_data(&mut self, data: Vec<R>) {
        self.table.set_data(data);
        self.clamp_cursor();
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    pub fn cursor_column(&self) -> usize {
        self.cursor_column
    }

    /// Geometry of the last populated render, used for mouse hit testing
    pub fn geometry(&self) -> Option<&TableGeometry> {
        self.geometry.as_ref()
    }

    /// Rows currently on screen; zero while loading or empty
    fn row_count(&self) -> usize {
        match self.table.view_state() {
            ViewState::Populated => self.table.data().len(),
            ViewState::Loading | ViewState::Empty => 0,
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor_row = self.cursor_row.min(self.row_count().saturating_sub(1));
        self.cursor_column = self
            .cursor_column
            .min(self.table.columns().len().saturating_sub(1));
    }

    /// Human readable sort state for the status bar
    pub fn sort_summary(&self) -> String {
        let sort = self.table.sort_state();
        let column = sort
            .field()
            .and_then(|field| self.table.columns().iter().find(|column| column.field == field));

        match column {
            Some(column) => format!(
                "{} {}",
                column.title,
                self.table.sort_state().aria_sort(&column.field).as_str()
            ),
            None => crate::constants::STATUS_NOT_SORTED.to_string(),
        }
    }

    fn header_row(&self, header: &[HeaderCell], selection_column: bool) -> Row<'static> {
        let mut cells = Vec::with_capacity(header.len() + 1);
        if selection_column {
            cells.push(Cell::from(""));
        }

        for (index, cell) in header.iter().enumerate() {
            let mut spans = vec![Span::raw(cell.title.clone())];
            if let Some(direction) = cell.indicator {
                spans.push(Span::raw(format!(" {}", self.icons.sort_indicator(direction))));
            }

            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if cell.indicator.is_some() {
                style = style.fg(Color::Yellow);
            } else if !cell.sortable {
                style = style.fg(Color::Gray);
            }
            if index == self.cursor_column {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            cells.push(Cell::from(Line::from(spans)).style(style));
        }

        Row::new(cells)
    }

    fn body_row(&self, row: &RowView<'_, R>, is_cursor: bool) -> Row<'static> {
        let mut cells = Vec::with_capacity(row.cells.len() + 1);
        if let Some(checked) = row.checkbox {
            cells.push(Cell::from(self.icons.checkbox(checked)));
        }
        cells.extend(row.cells.iter().map(|text| Cell::from(text.clone())));

        let style = match (row.selected, is_cursor) {
            (true, true) => Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().bg(Color::Blue).fg(Color::White),
            (false, true) => Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            (false, false) => Style::default(),
        };

        Row::new(cells).style(style)
    }

    fn render_placeholder(f: &mut Frame, rect: Rect, block: Block<'_>, text: &str) {
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let message_area = LayoutManager::centered_rect_lines(100, 1, inner);
        let message = Paragraph::new(text.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(message, message_area);
    }
}

impl<R: Record + Clone> Component for TableComponent<R> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextRow,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousRow,
            KeyCode::Char('g') | KeyCode::Home => Action::FirstRow,
            KeyCode::Char('G') | KeyCode::End => Action::LastRow,
            KeyCode::Char('l') | KeyCode::Right => Action::NextColumn,
            KeyCode::Char('h') | KeyCode::Left => Action::PreviousColumn,
            KeyCode::Char('s') => Action::SortColumn(self.cursor_column),
            KeyCode::Char(c @ '1'..='9') => {
                // Digits are 1-based column numbers
                Action::SortColumn(c as usize - '1' as usize)
            }
            KeyCode::Char(' ') | KeyCode::Enter if self.table.is_selectable() => {
                Action::ToggleRow(self.cursor_row)
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(geometry) = &self.geometry else {
                    return Action::None;
                };

                match geometry.hit_test(mouse.column, mouse.row) {
                    Some(Hit::Header(index)) => Action::SortColumn(index),
                    Some(Hit::Row(index)) => {
                        if self.table.is_selectable() {
                            Action::ToggleRow(index)
                        } else {
                            // Without selection a click only moves the cursor
                            self.cursor_row = index;
                            Action::None
                        }
                    }
                    None => Action::None,
                }
            }
            MouseEventKind::ScrollDown => Action::NextRow,
            MouseEventKind::ScrollUp => Action::PreviousRow,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let last_row = self.row_count().saturating_sub(1);
        let last_column = self.table.columns().len().saturating_sub(1);

        match action {
            Action::NextRow => {
                self.cursor_row = (self.cursor_row + 1).min(last_row);
                Action::None
            }
            Action::PreviousRow => {
                self.cursor_row = self.cursor_row.saturating_sub(1);
                Action::None
            }
            Action::FirstRow => {
                self.cursor_row = 0;
                Action::None
            }
            Action::LastRow => {
                self.cursor_row = last_row;
                Action::None
            }
            Action::NextColumn => {
                self.cursor_column = (self.cursor_column + 1).min(last_column);
                Action::None
            }
            Action::PreviousColumn => {
                self.cursor_column = self.cursor_column.saturating_sub(1);
                Action::None
            }
            Action::SortColumn(index) => {
                if !self.table.toggle_sort_column(index) {
                    return Action::None;
                }
                self.cursor_column = index;

                let sort = self.table.sort_state();
                match sort.field() {
                    Some(field) => Action::SortChanged {
                        field: field.to_string(),
                        direction: sort.direction(),
                    },
                    None => Action::None,
                }
            }
            Action::ToggleRow(index) => match self.table.toggle_row_at(index) {
                Some(_) => {
                    self.cursor_row = index;
                    Action::SelectionChanged(self.table.selection().len())
                }
                None => Action::None,
            },
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.clone())
            .title_alignment(Alignment::Center);

        let view = self.table.view();
        let (selection_column, header, rows) = match view {
            TableView::Loading => {
                self.geometry = None;
                Self::render_placeholder(f, rect, block, &self.loading_text);
                return;
            }
            TableView::Empty => {
                self.geometry = None;
                Self::render_placeholder(f, rect, block, &self.empty_text);
                return;
            }
            TableView::Populated {
                selection_column,
                header,
                rows,
            } => (selection_column, header, rows),
        };

        let total = rows.len();
        let (table_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total);
        let inner = block.inner(table_area);
        let viewport = ScrollbarHelper::body_height(table_area);

        self.cursor_row = self.cursor_row.min(total.saturating_sub(1));
        self.row_offset = ScrollbarHelper::follow_cursor(self.row_offset, self.cursor_row, viewport, total);
        let visible = viewport.min(total - self.row_offset);

        // Size columns from the title and every row, not just the visible ones,
        // so widths stay put while scrolling
        let titles: Vec<&str> = header.iter().map(|cell| cell.title.as_str()).collect();
        let texts: Vec<Vec<String>> = rows.iter().map(|row| row.cells.clone()).collect();
        let widths = LayoutManager::column_widths(&titles, &texts, self.max_column_width);

        let data_x = if selection_column {
            inner.x + SELECTION_COLUMN_WIDTH + self.column_spacing
        } else {
            inner.x
        };
        let spans = LayoutManager::column_spans(data_x, inner.x + inner.width, &widths, self.column_spacing);

        let mut constraints = Vec::with_capacity(spans.len() + 1);
        if selection_column {
            constraints.push(Constraint::Length(SELECTION_COLUMN_WIDTH));
        }
        constraints.extend(spans.iter().map(|(_, width)| Constraint::Length(*width)));

        let body: Vec<Row> = rows
            .iter()
            .enumerate()
            .skip(self.row_offset)
            .take(visible)
            .map(|(index, row)| self.body_row(row, index == self.cursor_row))
            .collect();

        let table = Table::new(body, constraints)
            .header(self.header_row(&header, selection_column))
            .block(block)
            .column_spacing(self.column_spacing);
        f.render_widget(table, table_area);

        self.scrollbar.update_state(total, self.row_offset, viewport);
        self.scrollbar.render(f, scrollbar_area);

        self.geometry = Some(TableGeometry {
            inner,
            columns: spans,
            row_offset: self.row_offset,
            visible_rows: visible,
        });
    }
}
