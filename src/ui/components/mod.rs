//! Reusable UI components

pub mod log_panel;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod table_component;

// Component exports
pub use log_panel::LogPanel;
pub use status_bar::{StatusBar, StatusInfo};
pub use table_component::TableComponent;
