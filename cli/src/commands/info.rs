//! Show configuration and key info

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::secure_storage::SecureKeyStorage;
use crate::world::WorldStore;

pub fn run(config: &Config) -> Result<()> {
    println!();
    println!("{}", "StealthNFT Configuration".yellow().bold());
    println!();

    println!("{}:", "Home Directory".cyan());
    println!("  {}", config.home().display());
    println!();

    let storage = SecureKeyStorage::new(config.keys_file());
    let world = WorldStore::new(config.state_file()).load()?;

    match storage.read_header() {
        Ok(header) => {
            println!("{}", "Wallet Key: CONFIGURED".green());
            println!("  Created: {}", header.created_at);
            println!("  Address: {}", header.address);
            if world.registry().is_registered(&header.address) {
                println!("  Registry: {}", "registered".green());
            } else {
                println!("  Registry: {}", "not registered".yellow());
                println!("  Run 'stealthnft register' to publish your public key");
            }
        }
        Err(_) => {
            println!("{}", "Wallet Key: NOT CONFIGURED".red());
            println!("  Run 'stealthnft keygen' to generate a key");
        }
    }
    println!();

    println!("{}:", "World State".cyan());
    println!("  Registered keys: {}", world.registry().len());
    println!("  Tokens minted:   {}", world.ledger().total_minted());
    println!("  Next token id:   {}", world.ledger().next_token_id());
    println!("  Announcements:   {}", world.announcements().len());
    println!();

    println!("{}:", "File Locations".cyan());
    println!("  Key:   {}", config.keys_file().display());
    println!("  State: {}", config.state_file().display());

    Ok(())
}
