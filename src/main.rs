use clap::{CommandFactory, FromArgMatches, ValueHint};

use crate::config::get_config_path;

mod action;
mod app;
mod cli;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod panic;
mod tui;
mod utils;
mod widgets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    panic::init()?;

    // Enhance the help message for the config argument
    let def = get_config_path()?;
    let help = format!("Path to config file (default: {})", def.display());
    let cmd = cli::Args::command()
        .mut_arg("config", |a| a.help(help).value_hint(ValueHint::FilePath).next_line_help(true));
    let args = cli::Args::from_arg_matches(&cmd.get_matches())?;

    let config_path = args.config.clone().unwrap_or(def);
    let config = config::Config::new(args.config)?;
    logging::init(&config)?;
    tracing::info!("config loaded from {}", config_path.display());

    let mut app =
        app::App::new(&config, config_path.display().to_string(), args.tick_rate, args.frame_rate);
    app.run().await?;

    Ok(())
}
