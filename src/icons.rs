//! Icon service for sort indicators and selection checkboxes
//!
//! Glyphs come in a Unicode flavour and an ASCII fallback for terminals
//! with limited fonts.

use serde::{Deserialize, Serialize};

use crate::table::SortDirection;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub sort_ascending: &'static str,
    pub sort_descending: &'static str,
    pub checkbox_checked: &'static str,
    pub checkbox_unchecked: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Unicode => IconSet {
                sort_ascending: "▲",
                sort_descending: "▼",
                checkbox_checked: "[x]",
                checkbox_unchecked: "[ ]",
            },
            IconTheme::Ascii => IconSet {
                sort_ascending: "^",
                sort_descending: "v",
                checkbox_checked: "[x]",
                checkbox_unchecked: "[ ]",
            },
        }
    }

    #[must_use]
    pub fn sort_indicator(&self, direction: SortDirection) -> &'static str {
        let icons = self.icons();
        match direction {
            SortDirection::Ascending => icons.sort_ascending,
            SortDirection::Descending => icons.sort_descending,
        }
    }

    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let icons = self.icons();
        if checked {
            icons.checkbox_checked
        } else {
            icons.checkbox_unchecked
        }
    }
}
