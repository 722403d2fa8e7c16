//! Raid command handlers

use anyhow::Result;
use raidgear_api::RaidService;

use super::helpers::{truncate, yes_no};

/// Handle `raids list`
pub fn list(service: &RaidService, all: bool) -> Result<()> {
    let is_active = if all { None } else { Some(true) };
    let raids = service.raids(is_active)?;
    if raids.is_empty() {
        println!("No raids found");
        return Ok(());
    }

    let header = format!(
        "{:<6} {:<30} {:<12} {:>6} {:>7} {:<7}",
        "id", "name", "tier", "floors", "min IL", "active"
    );
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));
    for raid in &raids {
        println!(
            "{:<6} {:<30} {:<12} {:>6} {:>7} {:<7}",
            raid.id,
            truncate(&raid.name, 30),
            truncate(&raid.tier, 12),
            raid.total_floors,
            raid.min_item_level
                .map(|level| level.to_string())
                .unwrap_or_else(|| "-".to_string()),
            yes_no(raid.is_active),
        );
    }
    Ok(())
}

/// Handle `raids groups`
pub fn groups(service: &RaidService, raid_id: i64) -> Result<()> {
    let groups = service.groups(raid_id, None, None)?;
    if groups.is_empty() {
        println!("No groups found for raid {}", raid_id);
        return Ok(());
    }
    print_groups(&groups);
    Ok(())
}

/// Handle `raids my-groups`
pub fn my_groups(service: &RaidService) -> Result<()> {
    let groups = service.my_groups()?;
    if groups.is_empty() {
        println!("You are not in any raid groups");
        return Ok(());
    }
    print_groups(&groups);
    Ok(())
}

fn print_groups(groups: &[raidgear::RaidGroup]) {
    let header = format!(
        "{:<6} {:<28} {:<12} {:>9} {:<11} {:<7}",
        "id", "name", "loot", "target IL", "recruiting", "active"
    );
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));
    for group in groups {
        println!(
            "{:<6} {:<28} {:<12} {:>9} {:<11} {:<7}",
            group.id,
            truncate(&group.name, 28),
            group.distribution_method.display_name(),
            group
                .target_item_level
                .map(|level| level.to_string())
                .unwrap_or_else(|| "-".to_string()),
            yes_no(group.is_recruiting),
            yes_no(group.is_active),
        );
    }
}
