//! The demo application: one table, a status bar, and switchable stories.

use crate::config::Config;
use crate::demo::{Dataset, JsonRecord, Story};
use crate::logger::Logger;
use crate::table::{DataTable, Record};
use crate::ui::components::{LogPanel, StatusBar, StatusInfo, TableComponent};
use crate::ui::core::{Action, Component, EventType};
use crate::ui::layout::LayoutManager;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DemoApp {
    dataset: Dataset,
    config: Config,
    story: Story,
    table: TableComponent<JsonRecord>,
    logger: Logger,
    message: Option<String>,
    show_log: bool,
    should_quit: bool,
}

impl DemoApp {
    pub fn new(dataset: Dataset, story: Story, config: Config, logger: Logger) -> Result<Self> {
        let table = Self::build_table(&dataset, story, &config, &logger)?;
        logger.log(format!("Showing story '{}'", story));

        Ok(Self {
            dataset,
            config,
            story,
            table,
            logger,
            message: None,
            show_log: false,
            should_quit: false,
        })
    }

    /// A fresh table for `story`; sort and selection start empty
    fn build_table(
        dataset: &Dataset,
        story: Story,
        config: &Config,
        logger: &Logger,
    ) -> Result<TableComponent<JsonRecord>> {
        let props = story.props(&dataset.rows);
        let mut table = DataTable::new(dataset.columns.clone())?
            .with_data(props.data)
            .loading(props.loading)
            .selectable(props.selectable);

        if props.selectable {
            let logger = logger.clone();
            table = table.on_row_select(move |rows: &[JsonRecord]| {
                let keys: Vec<String> = rows.iter().map(|row| row.row_key()).collect();
                logger.log(format!("Selected rows: [{}]", keys.join(", ")));
            });
        }

        Ok(TableComponent::new(table)
            .with_config(config)
            .with_title(format!(" {} ", dataset.title)))
    }

    pub fn story(&self) -> Story {
        self.story
    }

    pub fn table(&self) -> &TableComponent<JsonRecord> {
        &self.table
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn is_log_open(&self) -> bool {
        self.show_log
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Switch stories, re-initializing the table
    pub fn set_story(&mut self, story: Story) -> Result<()> {
        self.table = Self::build_table(&self.dataset, story, &self.config, &self.logger)?;
        self.story = story;
        self.message = None;
        self.logger.log(format!("Showing story '{}'", story));
        Ok(())
    }

    pub fn status_info(&self) -> StatusInfo {
        StatusInfo {
            story: self.story.name().to_string(),
            sort: self.table.sort_summary(),
            selected: self.table.table().selection().len(),
            message: self.message.clone(),
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event: EventType) -> Result<()> {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(_) if self.show_log => Action::None,
            EventType::Mouse(mouse) => self.table.handle_mouse_events(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let outcome = self.table.update(action);
        self.handle_app_action(outcome)
    }

    fn handle_global_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Tab => Action::NextStory,
            KeyCode::Char('L') => Action::ToggleLoading,
            KeyCode::Char('D') => Action::ToggleLogPanel,
            _ => Action::None,
        }
    }

    /// Keys while the log panel covers the table
    fn handle_log_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('D') | KeyCode::Esc => Action::ToggleLogPanel,
            KeyCode::Char('c') => Action::ClearLogs,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    /// Handle actions the table passed through or reported back
    fn handle_app_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextStory => self.set_story(self.story.next())?,
            Action::ToggleLoading => {
                let loading = !self.table.table().is_loading();
                self.table.table_mut().set_loading(loading);
                self.message = Some(format!("loading = {loading}"));
            }
            Action::ToggleLogPanel => self.show_log = !self.show_log,
            Action::ClearLogs => self.logger.clear(),
            Action::SortChanged { field, direction } => {
                self.logger.log(format!("Sorted by '{}' {:?}", field, direction));
                self.message = None;
            }
            Action::SelectionChanged(count) => {
                self.message = Some(format!("{count} row(s) selected"));
            }
            _ => {}
        }
        Ok(())
    }
}

impl Component for DemoApp {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.show_log {
            return self.handle_log_key(key);
        }

        // Table keys first, then global keys
        match self.table.handle_key_events(key) {
            Action::None => self.handle_global_key(key),
            action => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (table_area, status_area) = LayoutManager::main_layout(rect);
        self.table.render(f, table_area);
        StatusBar::render(f, status_area, &self.status_info());

        if self.show_log {
            LogPanel::render(f, table_area, &self.logger.get_logs());
        }
    }
}
