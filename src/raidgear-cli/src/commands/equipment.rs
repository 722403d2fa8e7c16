//! Equipment catalog command handlers

use anyhow::{bail, Result};
use raidgear::{
    tier_for_level, EquipmentForm, EquipmentListFilter, EquipmentQuery, EquipmentSlot,
    EquipmentType,
};
use raidgear_api::EquipmentService;

use super::helpers::{escape_csv, truncate, yes_no};
use crate::cli::OutputFormat;

/// Handle `equipment list`
///
/// Slot and type narrow the request server-side; search and level bounds
/// filter the response locally.
pub fn list(
    service: &EquipmentService,
    slot: Option<EquipmentSlot>,
    equipment_type: Option<EquipmentType>,
    min_level: Option<i32>,
    max_level: Option<i32>,
    search: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let query = EquipmentQuery {
        slot,
        equipment_type,
        ..Default::default()
    };
    let items = service.list(&query)?;

    let filter = EquipmentListFilter {
        search: search.unwrap_or_default(),
        min_level,
        max_level,
        ..Default::default()
    };
    let items = filter.apply(&items);

    if items.is_empty() {
        println!("No equipment found");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Csv => {
            println!("id,name,slot,type,item_level,source,job_category");
            for item in &items {
                let row = [
                    item.id.to_string(),
                    escape_csv(&item.name),
                    item.slot.to_string(),
                    item.equipment_type.to_string(),
                    item.item_level.to_string(),
                    escape_csv(item.source.as_deref().unwrap_or("")),
                    escape_csv(item.job_category.as_deref().unwrap_or("")),
                ];
                println!("{}", row.join(","));
            }
        }
        OutputFormat::Table => {
            let header = format!(
                "{:<6} {:<30} {:<10} {:<15} {:>4} {:<24}",
                "id", "name", "slot", "type", "IL", "source"
            );
            println!("{}", header);
            println!("{}", "-".repeat(header.len()));
            for item in &items {
                println!(
                    "{:<6} {:<30} {:<10} {:<15} {:>4} {:<24}",
                    item.id,
                    truncate(&item.name, 30),
                    item.slot.display_name(),
                    item.equipment_type.display_name(),
                    item.item_level,
                    truncate(item.source.as_deref().unwrap_or("-"), 24),
                );
            }
            println!("\n{} items", items.len());
        }
    }
    Ok(())
}

/// Handle `equipment show`
pub fn show(service: &EquipmentService, id: i64) -> Result<()> {
    let item = service.get(id)?;

    println!("Name:       {}", item.name);
    println!("Slot:       {}", item.slot.display_name());
    println!("Type:       {}", item.equipment_type.display_name());
    println!(
        "Item level: {} ({})",
        item.item_level,
        tier_for_level(item.item_level).name
    );
    println!("Job:        {}", item.job_category.as_deref().unwrap_or("-"));
    println!("Source:     {}", item.source.as_deref().unwrap_or("-"));
    if let Some(raid_id) = item.raid_id {
        println!("Raid:       {}", raid_id);
    }
    if item.tome_cost > 0 {
        println!("Tome cost:  {}", item.tome_cost);
    }
    println!("Active:     {}", yes_no(item.is_active));
    println!("Created:    {}", item.created_at);
    Ok(())
}

/// Handle `equipment add`
pub fn add(
    service: &EquipmentService,
    name: String,
    slot: EquipmentSlot,
    equipment_type: EquipmentType,
    item_level: i32,
    job: Option<String>,
    raid: Option<i64>,
    source: Option<String>,
    tome_cost: i32,
) -> Result<()> {
    let mut form = EquipmentForm {
        name,
        slot,
        item_level,
        job_category: job.unwrap_or_default(),
        raid_id: raid,
        source: source.unwrap_or_default(),
        tome_cost,
        ..Default::default()
    };
    form.set_equipment_type(equipment_type);

    let errors = form.validate();
    if !errors.is_empty() {
        for message in [&errors.name, &errors.item_level, &errors.tome_cost]
            .into_iter()
            .flatten()
        {
            eprintln!("error: {}", message);
        }
        bail!("Equipment not added");
    }

    let created = service.create(&form.to_create())?;
    println!("Added equipment: {} (id {})", created.name, created.id);
    Ok(())
}

/// Handle `equipment deactivate`
pub fn deactivate(service: &EquipmentService, id: i64) -> Result<()> {
    let ack = service.delete(id)?;
    println!("{}", ack.message);
    Ok(())
}
