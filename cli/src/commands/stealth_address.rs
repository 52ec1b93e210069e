//! Preview the stealth address for a recipient and secret (read-only)

use anyhow::{bail, Result};
use colored::Colorize;

use crate::config::{parse_address, parse_secret, Config};
use crate::world::WorldStore;

pub fn run(config: &Config, recipient: &str, secret: Option<&str>, secret_hex: Option<&str>) -> Result<()> {
    let recipient = parse_address(recipient)?;
    let Some(secret) = parse_secret(secret, secret_hex)? else {
        bail!("A secret is required: pass --secret or --secret-hex");
    };

    let world = WorldStore::new(config.state_file()).load()?;
    let derivation = world.get_stealth_address(&recipient, &secret)?;

    println!();
    println!("{}", "Stealth Address".yellow().bold());
    println!();
    println!("Recipient:      {}", recipient);
    println!("Stealth:        {}", derivation.stealth_address);
    println!("Ephemeral R.x:  0x{}", hex::encode(derivation.ephemeral.x));
    println!("Ephemeral R.y:  0x{}", hex::encode(derivation.ephemeral.y));
    println!();
    println!("{}", "Nothing was minted; the same secret always gives this address.".dimmed());

    Ok(())
}
