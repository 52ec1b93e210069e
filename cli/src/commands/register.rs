//! Register the wallet's public key in the key registry

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::secure_storage::SecureKeyStorage;
use crate::world::WorldStore;

pub fn run(config: &Config) -> Result<()> {
    println!("{}", "Registering public key...".cyan());

    let wallet = SecureKeyStorage::new(config.keys_file()).unlock()?;
    let caller = wallet.address();
    let key = *wallet.public_key();

    let store = WorldStore::new(config.state_file());
    store
        .apply(|world| world.provide_public_key(caller, key.x, key.y))
        .context("Registration rejected")?;

    println!();
    println!("{}", "Public key registered successfully!".green().bold());
    println!();
    println!("Address:    {}", caller);
    println!("Public key: 0x{}", hex::encode(key.to_uncompressed()));
    println!();
    println!(
        "{}",
        "Minters can now send tokens to one-time addresses bound to this key.".dimmed()
    );

    Ok(())
}
