//! HTTP client for the raidgear backend.
//!
//! Thin blocking wrapper over the REST API. Connection details resolve
//! through [`Config`]: an explicit override wins, then the
//! `RAIDGEAR_API_URL` environment variable, then the config file, then
//! the localhost default.
//!
//! ```no_run
//! use raidgear_api::{ApiClient, Config, EquipmentService};
//! use raidgear::EquipmentQuery;
//!
//! # fn main() -> anyhow::Result<()> {
//! let url = Config::load()?.resolve_api_url(None);
//! let equipment = EquipmentService::new(ApiClient::new(&url));
//! let items = equipment.list(&EquipmentQuery::default())?;
//! println!("{} items", items.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod equipment;
pub mod error;
pub mod raids;

pub use client::{Ack, ApiClient};
pub use config::{Config, API_URL_ENV, DEFAULT_API_URL};
pub use equipment::EquipmentService;
pub use error::{ApiError, ApiResult};
pub use raids::RaidService;
