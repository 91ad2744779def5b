//! Constants used throughout the application
//!
//! This module centralizes placeholder texts, key hints, and layout limits.

// Placeholder views
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";
pub const DEFAULT_EMPTY_TEXT: &str = "No data available";

/// Shown in a cell whose record lacks the column's field
pub const MISSING_CELL: &str = "-";

// Status bar
pub const STATUS_KEY_HINTS: &str = "j/k rows • h/l columns • s/1-9 sort • Space select • Tab story • L loading • D log • q quit";
pub const STATUS_NOT_SORTED: &str = "unsorted";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "datatable.toml";
pub const APP_DIR_NAME: &str = "datatable";
pub const LOG_FILE_NAME: &str = "datatable.log";
/// Entries kept by the in-memory logger; older ones are discarded
pub const MAX_LOG_ENTRIES: usize = 200;

// Table layout
/// Minimum width a column may be limited to
pub const COLUMN_MIN_WIDTH: u16 = 4;
/// Maximum configurable column width
pub const COLUMN_MAX_WIDTH: u16 = 200;
/// Default cap on a column's width
pub const COLUMN_DEFAULT_WIDTH: u16 = 40;
/// Default gap between columns
pub const COLUMN_DEFAULT_SPACING: u16 = 1;
/// Largest configurable gap between columns
pub const COLUMN_MAX_SPACING: u16 = 8;
