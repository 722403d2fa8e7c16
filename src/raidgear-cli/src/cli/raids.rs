//! Raid command CLI definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub enum RaidsCommand {
    /// List raids
    List {
        /// Include inactive raids
        #[arg(long)]
        all: bool,
    },

    /// List the groups running a raid
    Groups {
        /// Raid id
        raid_id: i64,
    },

    /// List the raid groups you belong to
    MyGroups,
}
