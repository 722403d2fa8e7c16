//! Core CLI definitions

use clap::{Parser, Subcommand};

use super::equipment::EquipmentCommand;
use super::raids::RaidsCommand;
use super::sets::SetsCommand;

#[derive(Parser)]
#[command(name = "raidgear")]
#[command(about = "Raid equipment tracker", long_about = None)]
pub struct Cli {
    /// API base URL (overrides config file)
    #[arg(long, global = true, env = "RAIDGEAR_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Equipment catalog operations (list, show, add, deactivate)
    #[command(visible_alias = "e")]
    Equipment {
        #[command(subcommand)]
        command: EquipmentCommand,
    },

    /// Equipment set operations (list, show)
    #[command(visible_alias = "s")]
    Sets {
        #[command(subcommand)]
        command: SetsCommand,
    },

    /// Raid and raid group operations
    #[command(visible_alias = "r")]
    Raids {
        #[command(subcommand)]
        command: RaidsCommand,
    },

    /// Configure defaults
    #[command(visible_alias = "c")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Set the default API URL
    SetUrl {
        /// Base URL, e.g. http://localhost:8000/api
        url: String,
    },

    /// Remove the configured API URL
    ClearUrl,
}
