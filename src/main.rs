use anyhow::Result;
use clap::Parser;
use datatable::cli::Cli;
use datatable::config::Config;
use datatable::demo::Dataset;
use datatable::logger::Logger;
use datatable::ui::{run_app, DemoApp};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;

    let dataset = match cli.data {
        Some(path) => Dataset::load(path)?,
        None => Dataset::users(),
    };

    let mouse_enabled = config.ui.mouse_enabled;
    let app = DemoApp::new(dataset, cli.story, config, logger)?;
    run_app(app, mouse_enabled).await
}
