//! CLI argument definitions for raidgear
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod equipment;
mod raids;
mod sets;

pub use core::{Cli, Commands, ConfigCommand, OutputFormat};
pub use equipment::EquipmentCommand;
pub use raids::RaidsCommand;
pub use sets::SetsCommand;
