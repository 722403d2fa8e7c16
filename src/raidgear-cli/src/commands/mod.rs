//! Command handlers for raidgear

pub mod configure;
pub mod equipment;
pub mod helpers;
pub mod raids;
pub mod sets;
