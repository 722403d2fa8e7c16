//! Equipment command CLI definitions

use clap::Subcommand;
use raidgear::{EquipmentSlot, EquipmentType};

use super::core::OutputFormat;

#[derive(Subcommand)]
pub enum EquipmentCommand {
    /// List equipment, optionally filtered
    List {
        /// Filter by slot (e.g. "weapon", "head")
        #[arg(long)]
        slot: Option<EquipmentSlot>,

        /// Filter by type (e.g. "raid_hero", "tome")
        #[arg(long = "type")]
        equipment_type: Option<EquipmentType>,

        /// Minimum item level (inclusive)
        #[arg(long)]
        min_level: Option<i32>,

        /// Maximum item level (inclusive)
        #[arg(long)]
        max_level: Option<i32>,

        /// Substring match against name or source
        #[arg(long)]
        search: Option<String>,

        /// Output format: table (default), csv, json
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show details for a piece of equipment
    Show {
        /// Equipment id
        id: i64,
    },

    /// Add equipment to the catalog
    Add {
        /// Equipment name
        #[arg(long)]
        name: String,

        /// Slot (e.g. "weapon", "head")
        #[arg(long)]
        slot: EquipmentSlot,

        /// Type (e.g. "raid_hero", "tome")
        #[arg(long = "type")]
        equipment_type: EquipmentType,

        /// Item level
        #[arg(long, default_value_t = 730)]
        item_level: i32,

        /// Job category (e.g. "Tanks")
        #[arg(long)]
        job: Option<String>,

        /// Raid id for raid-sourced equipment
        #[arg(long)]
        raid: Option<i64>,

        /// Where the equipment drops
        #[arg(long)]
        source: Option<String>,

        /// Tome cost for tome-sourced equipment
        #[arg(long, default_value_t = 0)]
        tome_cost: i32,
    },

    /// Deactivate a piece of equipment
    Deactivate {
        /// Equipment id
        id: i64,
    },
}
