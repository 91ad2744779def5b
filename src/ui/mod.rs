//! UI module for the table demo
//!
//! This module handles the terminal front end: the table component, the demo
//! application around it, layout, and the event loop.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::DemoApp;
pub use layout::LayoutManager;
pub use renderer::run_app;
