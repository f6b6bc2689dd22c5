//! Taskdeck - terminal task manager

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;

use taskdeck::cli::{Cli, Commands};
use taskdeck::config::Config;
use taskdeck::tui::{self, Theme};

fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion generation works without any app state.
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "tdk", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;

    let theme_name = cli.theme.unwrap_or_else(|| config.theme.name.clone());
    let theme = if theme_name.is_empty() {
        Theme::default()
    } else {
        match Theme::by_name(&theme_name) {
            Some(theme) => theme,
            None => bail!(
                "Unknown theme '{}' (available: {})",
                theme_name,
                Theme::NAMES.join(", ")
            ),
        }
    };

    tui::run(&config, theme)
}
