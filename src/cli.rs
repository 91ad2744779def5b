//! Command line arguments for the demo binary.

use std::path::PathBuf;

use clap::Parser;

use crate::demo::Story;

#[derive(Parser, Debug)]
#[command(
    name = "datatable-demo",
    version,
    about = "Interactive demo of the sortable, selectable data table."
)]
pub struct Cli {
    /// Demo scenario to open with.
    #[arg(value_enum, default_value_t = Story::Selectable)]
    pub story: Story,

    /// JSON file of the form { "title": ..., "columns": [...], "rows": [...] }.
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Write a default configuration file and exit. Defaults to the user config directory.
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<Option<PathBuf>>,
}
