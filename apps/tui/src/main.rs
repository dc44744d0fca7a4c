mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use agro_news_tui::config::{init_logging, DashboardConfig};
use agro_news_tui::data::Dataset;
use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use tracing::info;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = DashboardConfig::from_env();
    init_logging(&config)?;

    // Reject a bad month window before touching any file
    let criteria = args.criteria()?;

    let dataset = Dataset::load(&config)?;

    // Headless when asked to, or when stdout is not a terminal
    if args.headless || args.json || !is_terminal() {
        return event::run_headless(&dataset, &criteria, args.json);
    }

    let mut app = App::with_criteria(dataset, &criteria);

    let mut terminal = terminal::setup()?;
    info!("dashboard started");

    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
