//! Equipment set command CLI definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub enum SetsCommand {
    /// List your equipment sets
    List {
        /// Only sets belonging to this raid group
        #[arg(long)]
        raid_group: Option<i64>,
    },

    /// Show a set with its per-slot items
    Show {
        /// Set id
        id: i64,
    },
}
