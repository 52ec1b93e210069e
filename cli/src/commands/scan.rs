//! Scan the announcement log for tokens minted to this wallet's stealth addresses

use anyhow::Result;
use colored::Colorize;
use stealth_nft::{AnnouncementEntry, StealthKey};

use crate::config::{short_address, Config};
use crate::secure_storage::SecureKeyStorage;
use crate::world::WorldStore;

pub fn run(config: &Config, from_sequence: Option<u64>, reveal_keys: bool) -> Result<()> {
    println!("{}", "Scanning announcements for stealth mints...".cyan());

    let wallet = SecureKeyStorage::new(config.keys_file()).unlock()?;
    let world = WorldStore::new(config.state_file()).load()?;

    let log = world.announcements();
    let start = from_sequence.unwrap_or(0);
    println!("Checking {} of {} announcement(s)...", log.since(start).len(), log.len());

    let found: Vec<(AnnouncementEntry, StealthKey)> = log.scan_since(wallet.secret(), start);

    println!();

    if found.is_empty() {
        println!("{}", "No stealth tokens found.".yellow());
        if from_sequence.is_some() {
            println!(
                "{}",
                "Try without --from-sequence to scan all announcements.".dimmed()
            );
        }
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} stealth token(s):", found.len()).green().bold()
    );
    println!();

    let mut held = 0;
    for (i, (entry, key)) in found.iter().enumerate() {
        let owner = world.owner_of(entry.token_id)?;
        let status = if owner == entry.stealth_address {
            held += 1;
            "HELD".green()
        } else {
            "MOVED".dimmed()
        };

        println!("{}. {} #{} [{}]", i + 1, "Token".yellow(), entry.token_id, status);
        println!("   Stealth:  {}", entry.stealth_address);
        println!("   Owner:    {}", short_address(&owner));
        println!("   Sequence: {}", entry.sequence);
        if reveal_keys {
            println!("   Key:      0x{}", hex::encode(key.secret_bytes()));
        }
        println!();
    }

    println!(
        "{}",
        format!("{} token(s) still held at stealth addresses", held).green().bold()
    );
    println!();
    println!(
        "{}",
        "Use 'stealthnft transfer --token <id> --to <address>' to move them.".dimmed()
    );

    Ok(())
}
