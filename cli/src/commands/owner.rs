//! Look up the owner of a token

use anyhow::Result;

use crate::config::{parse_token_id, Config};
use crate::world::WorldStore;

pub fn run(config: &Config, token: &str) -> Result<()> {
    let token_id = parse_token_id(token)?;
    let world = WorldStore::new(config.state_file()).load()?;

    println!("{}", world.owner_of(token_id)?);

    Ok(())
}
