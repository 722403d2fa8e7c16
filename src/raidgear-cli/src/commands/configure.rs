//! Configuration command handlers

use anyhow::Result;
use raidgear_api::{Config, API_URL_ENV, DEFAULT_API_URL};

use crate::cli::ConfigCommand;

/// Handle the config command
pub fn handle(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => show(),
        ConfigCommand::SetUrl { url } => set_url(url),
        ConfigCommand::ClearUrl => clear_url(),
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    match config.get_api_url() {
        Some(url) => println!("API URL: {}", url),
        None => println!("API URL: {} (default)", DEFAULT_API_URL),
    }
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            println!("{} is set: {}", API_URL_ENV, url);
        }
    }
    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
    Ok(())
}

fn set_url(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_api_url(url.clone());
    config.save()?;
    println!("API URL configured: {}", url);
    Ok(())
}

fn clear_url() -> Result<()> {
    let mut config = Config::load()?;
    config.clear_api_url();
    config.save()?;
    println!("API URL cleared; using {}", DEFAULT_API_URL);
    Ok(())
}
