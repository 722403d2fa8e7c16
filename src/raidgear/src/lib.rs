//! # raidgear
//!
//! Domain types and pure logic for raid equipment tracking: the equipment
//! and equipment-set wire models, item-level tier classification, in-memory
//! list filtering, typed form validation, and the planning logic behind
//! set edits and duplication.
//!
//! Everything here is synchronous and I/O-free; the HTTP layer lives in
//! `raidgear-api` and the user interfaces in `raidgear-cli`/`raidgear-gui`.
//!
//! ## Example
//!
//! ```
//! use raidgear::{tier_for_level, EquipmentListFilter, EquipmentSlot};
//!
//! assert_eq!(tier_for_level(732).name, "Legendary");
//!
//! let filter = EquipmentListFilter {
//!     slot: Some(EquipmentSlot::Weapon),
//!     min_level: Some(700),
//!     ..Default::default()
//! };
//! assert!(filter.apply(&[]).is_empty());
//! ```

pub mod edits;
pub mod filter;
pub mod forms;
pub mod models;
pub mod stats;
pub mod tiers;
pub mod types;

// Re-export the common vocabulary
pub use edits::{diff_assignments, plan_duplicate, DuplicatePlan, SlotEdit};
pub use filter::EquipmentListFilter;
pub use forms::{EquipmentForm, EquipmentFormErrors, SetForm, SetFormErrors, SlotRow};
pub use models::{
    Equipment, EquipmentCreate, EquipmentQuery, EquipmentSet, EquipmentSetCreate,
    EquipmentSetItem, EquipmentSetUpdate, EquipmentUpdate, Raid, RaidCreate, RaidGroup,
    RaidGroupCreate, RaidGroupUpdate, RaidMember, RaidMemberCreate, RaidMemberUpdate, RaidUpdate,
    SetItemCreate, SetItemUpdate,
};
pub use stats::{average_item_level, progress_percent};
pub use tiers::{tier_for_level, ItemLevelTier, ITEM_LEVEL_TIERS};
pub use types::{DistributionMethod, EquipmentSlot, EquipmentType, ParseError, SetKind};
