mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use raidgear_api::{ApiClient, Config, EquipmentService, RaidService};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Equipment { command } => {
            let service = EquipmentService::new(connect(cli.api_url.as_deref())?);
            match command {
                EquipmentCommand::List {
                    slot,
                    equipment_type,
                    min_level,
                    max_level,
                    search,
                    format,
                } => {
                    commands::equipment::list(
                        &service,
                        slot,
                        equipment_type,
                        min_level,
                        max_level,
                        search,
                        format,
                    )?;
                }

                EquipmentCommand::Show { id } => {
                    commands::equipment::show(&service, id)?;
                }

                EquipmentCommand::Add {
                    name,
                    slot,
                    equipment_type,
                    item_level,
                    job,
                    raid,
                    source,
                    tome_cost,
                } => {
                    commands::equipment::add(
                        &service,
                        name,
                        slot,
                        equipment_type,
                        item_level,
                        job,
                        raid,
                        source,
                        tome_cost,
                    )?;
                }

                EquipmentCommand::Deactivate { id } => {
                    commands::equipment::deactivate(&service, id)?;
                }
            }
        }

        Commands::Sets { command } => {
            let client = connect(cli.api_url.as_deref())?;
            let equipment = EquipmentService::new(client.clone());
            match command {
                SetsCommand::List { raid_group } => {
                    let raids = RaidService::new(client);
                    commands::sets::list(&equipment, &raids, raid_group)?;
                }

                SetsCommand::Show { id } => {
                    commands::sets::show(&equipment, id)?;
                }
            }
        }

        Commands::Raids { command } => {
            let service = RaidService::new(connect(cli.api_url.as_deref())?);
            match command {
                RaidsCommand::List { all } => {
                    commands::raids::list(&service, all)?;
                }

                RaidsCommand::Groups { raid_id } => {
                    commands::raids::groups(&service, raid_id)?;
                }

                RaidsCommand::MyGroups => {
                    commands::raids::my_groups(&service)?;
                }
            }
        }

        Commands::Config { command } => {
            commands::configure::handle(command)?;
        }
    }

    Ok(())
}

/// Build an API client from the resolved base URL
fn connect(override_url: Option<&str>) -> Result<ApiClient> {
    let config = Config::load()?;
    Ok(ApiClient::new(config.resolve_api_url(override_url)))
}
