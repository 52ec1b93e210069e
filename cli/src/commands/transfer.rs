//! Transfer a token, acting as the wallet or as one of its stealth keys

use anyhow::{Context, Result};
use colored::Colorize;
use stealth_nft::{Address, StealthNft, TokenId};
use tracing::debug;

use crate::config::{parse_address, parse_token_id, Config};
use crate::crypto::WalletKey;
use crate::secure_storage::SecureKeyStorage;
use crate::world::WorldStore;

/// The address this wallet can act as for `token_id`.
///
/// That is the wallet address itself, unless the token sits at a stealth
/// address announced for this wallet, in which case the recovered stealth key
/// is the caller. The token need not be the one minted with that
/// announcement. Falls back to the wallet address so the ledger reports the
/// ownership error.
pub fn acting_address(world: &StealthNft, wallet: &WalletKey, token_id: TokenId) -> Address {
    let own = wallet.address();
    let Ok(owner) = world.owner_of(token_id) else {
        return own;
    };
    if owner == own {
        return own;
    }

    world
        .announcements()
        .entries()
        .iter()
        .filter(|entry| entry.stealth_address == owner)
        .find_map(|entry| wallet.scan(&entry.ephemeral, &entry.stealth_address))
        .map(|key| {
            debug!(token = %token_id, stealth = %key.address(), "acting as recovered stealth key");
            key.address()
        })
        .unwrap_or(own)
}

pub fn run(config: &Config, token: &str, to: &str) -> Result<()> {
    let token_id = parse_token_id(token)?;
    let to = parse_address(to)?;

    let wallet = SecureKeyStorage::new(config.keys_file()).unlock()?;
    let store = WorldStore::new(config.state_file());

    let mut caller = wallet.address();
    store
        .apply(|world| {
            caller = acting_address(world, &wallet, token_id);
            world.transfer(caller, to, token_id)
        })
        .with_context(|| format!("Transfer of token #{} failed", token_id))?;

    println!("{}", "Transfer complete!".green().bold());
    println!();
    println!("Token: #{}", token_id);
    println!("From:  {}", caller);
    println!("To:    {}", to);
    if caller != wallet.address() {
        println!();
        println!("{}", "Signed with the recovered stealth key.".dimmed());
    }

    Ok(())
}
