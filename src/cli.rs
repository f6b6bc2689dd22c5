//! Command-line interface definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "tdk",
    about = "Terminal task manager with search, filters, and status boards",
    version
)]
pub struct Cli {
    /// Color theme (overrides the config file)
    #[arg(long, env = "TASKDECK_THEME")]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
