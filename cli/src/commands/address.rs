//! Display the wallet address and public key

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::secure_storage::SecureKeyStorage;

pub fn run(config: &Config) -> Result<()> {
    let header = SecureKeyStorage::new(config.keys_file()).read_header()?;

    println!();
    println!("{}", "Your StealthNFT Address".yellow().bold());
    println!();
    println!("{}", header.address);
    println!();
    println!("{}:", "Public key".dimmed());
    println!("  x: 0x{}", hex::encode(header.public_key.x));
    println!("  y: 0x{}", hex::encode(header.public_key.y));
    println!();
    println!(
        "{}",
        "Register this key, then share the address to receive stealth mints.".dimmed()
    );

    Ok(())
}
