//! Demo data and stories.
//!
//! A story is a named scenario that sets up the table props a particular way,
//! so each state of the component can be viewed on its own.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::table::Column;

/// Records loaded from JSON are plain objects
pub type JsonRecord = Map<String, Value>;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Story {
    /// Populated table, selection disabled
    Default,
    /// Loading placeholder
    Loading,
    /// Empty placeholder
    Empty,
    /// Populated table with row selection
    #[default]
    Selectable,
}

impl Story {
    pub const ALL: [Story; 4] = [Story::Default, Story::Loading, Story::Empty, Story::Selectable];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Story::Default => "default",
            Story::Loading => "loading",
            Story::Empty => "empty",
            Story::Selectable => "selectable",
        }
    }

    /// Cycle through the stories in declaration order
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|story| *story == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Table props for this story over `rows`
    #[must_use]
    pub fn props(self, rows: &[JsonRecord]) -> StoryProps {
        match self {
            Story::Default => StoryProps {
                data: rows.to_vec(),
                loading: false,
                selectable: false,
            },
            Story::Loading => StoryProps {
                data: Vec::new(),
                loading: true,
                selectable: false,
            },
            Story::Empty => StoryProps {
                data: Vec::new(),
                loading: false,
                selectable: false,
            },
            Story::Selectable => StoryProps {
                data: rows.to_vec(),
                loading: false,
                selectable: true,
            },
        }
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct StoryProps {
    pub data: Vec<JsonRecord>,
    pub loading: bool,
    pub selectable: bool,
}

/// A titled set of columns and rows
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    #[serde(default = "default_title")]
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<JsonRecord>,
}

fn default_title() -> String {
    "Data".to_string()
}

impl Dataset {
    /// The built-in users table
    #[must_use]
    pub fn users() -> Self {
        Self {
            title: "Users Table".to_string(),
            columns: vec![
                Column::new("id", "ID", "id").sortable(),
                Column::new("name", "Name", "name").sortable(),
                Column::new("email", "Email", "email"),
            ],
            rows: sample_users(),
        }
    }

    /// Load a dataset from a JSON file of the form
    /// `{ "title": ..., "columns": [...], "rows": [...] }`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read data file: {}", path.as_ref().display()))?;

        let dataset: Dataset = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse data file: {}", path.as_ref().display()))?;

        log::info!(
            "Loaded {} rows and {} columns from {}",
            dataset.rows.len(),
            dataset.columns.len(),
            path.as_ref().display()
        );
        Ok(dataset)
    }
}

#[must_use]
pub fn sample_users() -> Vec<JsonRecord> {
    let users = json!([
        { "id": 1, "name": "Alice", "email": "alice@example.com" },
        { "id": 2, "name": "Bob", "email": "bob@example.com" },
        { "id": 3, "name": "Charlie", "email": "charlie@example.com" },
    ]);

    match users {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
