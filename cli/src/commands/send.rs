//! Mint a token to a fresh stealth address of a registered recipient

use anyhow::{Context, Result};
use colored::Colorize;
use zeroize::Zeroize;

use crate::config::{parse_address, parse_secret, Config};
use crate::crypto::random_secret;
use crate::world::WorldStore;

pub fn run(config: &Config, to: &str, secret: Option<&str>, secret_hex: Option<&str>) -> Result<()> {
    let recipient = parse_address(to)?;

    let mut secret = match parse_secret(secret, secret_hex)? {
        Some(secret) => secret,
        None => random_secret().to_vec(),
    };

    println!("{}", "Minting to a stealth address...".cyan());

    let store = WorldStore::new(config.state_file());
    let minted = store.apply(|world| world.mint_stealthily(&recipient, &secret));
    secret.zeroize();
    let minted = minted.with_context(|| format!("Stealth mint to {} failed", recipient))?;

    println!();
    println!("{}", "Stealth mint complete!".green().bold());
    println!();
    println!("Token:          #{}", minted.token_id);
    println!("Recipient:      {}", recipient);
    println!("Stealth owner:  {}", minted.stealth_address);
    println!("Ephemeral R.x:  0x{}", hex::encode(minted.ephemeral.x));
    println!("Ephemeral R.y:  0x{}", hex::encode(minted.ephemeral.y));
    println!();
    println!(
        "{}",
        "R has been announced; the recipient finds this token with 'stealthnft scan'.".dimmed()
    );

    Ok(())
}
