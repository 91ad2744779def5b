//! A sortable, selectable data table for terminal user interfaces.
//!
//! Given records and column descriptors, the table renders a header and one
//! row per record, sorts on designated columns when their header is clicked,
//! optionally tracks a row selection reported through a callback, and shows
//! placeholders while loading or when there is no data.
//!
//! # Modules
//!
//! * [`table`] - Table state, sorting, selection and the render model
//! * [`ui`] - Ratatui component and the demo application
//! * [`cli`] - Demo command line arguments
//! * [`demo`] - Sample data and demo stories
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup

/// Command line arguments for the demo binary
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Sample data and named demo scenarios
pub mod demo;

/// Table configuration errors
pub mod error;

/// Glyphs for sort indicators and checkboxes
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Table state and behavior, independent of any terminal
pub mod table;

/// Terminal user interface components and rendering
pub mod ui;

pub use error::TableError;
pub use table::{Column, DataTable, Record};
