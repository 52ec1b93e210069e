//! Mint a token directly to an address

use anyhow::Result;
use colored::Colorize;

use crate::config::{parse_address, Config};
use crate::world::WorldStore;

pub fn run(config: &Config, to: &str) -> Result<()> {
    let to = parse_address(to)?;

    let store = WorldStore::new(config.state_file());
    let token_id = store.apply(|world| world.mint(to))?;

    println!("{}", "Token minted!".green().bold());
    println!();
    println!("Token: #{}", token_id);
    println!("Owner: {}", to);

    Ok(())
}
