//! Equipment set command handlers

use anyhow::Result;
use raidgear::{progress_percent, tier_for_level, EquipmentSlot};
use raidgear_api::{EquipmentService, RaidService};

use super::helpers::truncate;

/// Handle `sets list`
pub fn list(
    equipment: &EquipmentService,
    raids: &RaidService,
    raid_group: Option<i64>,
) -> Result<()> {
    let sets = equipment.my_sets(raid_group)?;
    if sets.is_empty() {
        println!("No sets found");
        return Ok(());
    }
    let groups = raids.my_groups()?;

    let header = format!(
        "{:<6} {:<28} {:<9} {:<20} {:>7} {:>10}",
        "id", "name", "purpose", "group", "avg IL", "obtained"
    );
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));
    for set in &sets {
        let group = groups
            .iter()
            .find(|group| group.id == set.raid_group_id)
            .map(|group| group.name.as_str())
            .unwrap_or("-");
        let items = set.items();
        println!(
            "{:<6} {:<28} {:<9} {:<20} {:>7.0} {:>10}",
            set.id,
            truncate(&set.name, 28),
            set.kind().display_name(),
            truncate(group, 20),
            set.total_item_level,
            format!("{}/{}", set.obtained_count(), items.len()),
        );
    }
    Ok(())
}

/// Handle `sets show`
pub fn show(service: &EquipmentService, id: i64) -> Result<()> {
    let set = service.get_set(id)?;
    let items = set.items();

    println!("Name:       {}", set.name);
    println!("Purpose:    {}", set.kind().display_name());
    println!(
        "Average IL: {:.0} ({})",
        set.total_item_level,
        tier_for_level(set.total_item_level.round() as i32).name
    );
    println!(
        "Progress:   {}/{} obtained ({}%)",
        set.obtained_count(),
        items.len(),
        progress_percent(set.obtained_count(), items.len()),
    );
    println!();

    for &slot in EquipmentSlot::ALL {
        let label = format!("{}:", slot.display_name());
        match items.iter().find(|item| item.slot == slot) {
            Some(item) => {
                let mark = if item.is_obtained { "x" } else { " " };
                match &item.equipment {
                    Some(equipment) => println!(
                        "  [{}] {:<11} {} (IL {})",
                        mark, label, equipment.name, equipment.item_level
                    ),
                    None => println!("  [{}] {:<11} equipment {}", mark, label, item.equipment_id),
                }
            }
            None => println!("  [ ] {:<11} -", label),
        }
    }
    Ok(())
}
