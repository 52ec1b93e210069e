//! Key generation command with encrypted storage and mnemonic support

use anyhow::{bail, Result};
use colored::Colorize;
use tracing::info;

use crate::config::Config;
use crate::crypto::WalletKey;
use crate::secure_storage::{prompt_new_password, KeyData, SecureKeyStorage};

/// Options for key generation
pub struct KeygenOptions {
    /// Force overwrite existing keys
    pub force: bool,
    /// Use mnemonic for key generation (allows recovery)
    pub with_mnemonic: bool,
    /// Import from existing mnemonic
    pub import_mnemonic: Option<String>,
    /// Passphrase for mnemonic (optional extra security)
    pub passphrase: Option<String>,
    /// Import a raw hex private key
    pub import_key: Option<String>,
}

pub fn run(config: &Config, options: KeygenOptions) -> Result<()> {
    let storage = SecureKeyStorage::new(config.keys_file());

    if storage.exists() && !options.force {
        bail!(
            "A wallet key already exists. Use --force to overwrite.\n\
             Warning: Overwriting the key makes tokens at its stealth addresses unrecoverable!"
        );
    }
    if options.import_mnemonic.is_some() && options.import_key.is_some() {
        bail!("Pass either --import-mnemonic or --import-key, not both");
    }

    println!("{}", "=== StealthNFT Key Generation ===".cyan().bold());
    println!();

    let (key, mnemonic) = if let Some(ref phrase) = options.import_mnemonic {
        println!("{}", "Importing key from mnemonic phrase...".cyan());
        let passphrase = options.passphrase.as_deref().unwrap_or("");
        (WalletKey::from_mnemonic(phrase, passphrase)?, None)
    } else if let Some(ref encoded) = options.import_key {
        println!("{}", "Importing raw private key...".cyan());
        (WalletKey::from_hex(encoded)?, None)
    } else if options.with_mnemonic {
        println!("{}", "Generating key with recovery phrase...".cyan());
        let (key, phrase) = WalletKey::generate_with_mnemonic()?;
        (key, Some(phrase))
    } else {
        println!("{}", "Generating random key (no recovery phrase)...".cyan());
        println!(
            "{}",
            "Warning: Without a recovery phrase, losing your password means losing your tokens!"
                .yellow()
        );
        (WalletKey::generate(), None)
    };

    println!();
    println!("{}", "Choose a strong password to encrypt your key.".cyan());
    println!("{}", "Requirements: 8+ chars, uppercase, lowercase, and numbers".dimmed());
    println!();

    let password = prompt_new_password("Enter password: ")?;

    config.ensure_home()?;
    storage.save(&KeyData::from_wallet(&key), &password)?;
    info!(address = %key.address(), "wallet key stored");

    println!();
    println!("{}", "Key generated and encrypted successfully!".green().bold());
    println!();

    if let Some(ref phrase) = mnemonic {
        println!("{}", "=== RECOVERY PHRASE - WRITE THIS DOWN! ===".red().bold());
        println!();
        println!("{}", "┌────────────────────────────────────────────────────────────┐".yellow());

        let words: Vec<&str> = phrase.split_whitespace().collect();
        for (i, chunk) in words.chunks(4).enumerate() {
            let line: String = chunk
                .iter()
                .enumerate()
                .map(|(j, word)| format!("{:2}. {:<12}", i * 4 + j + 1, word))
                .collect::<Vec<_>>()
                .join(" ");
            println!("│ {} │", format!("{:<58}", line).yellow());
        }

        println!("{}", "└────────────────────────────────────────────────────────────┘".yellow());
        println!();
        println!("{}", "CRITICAL: Store this phrase securely OFFLINE!".red().bold());
        println!("{}", "You will NOT be shown this phrase again.".red());
        println!();
    }

    println!("{}:", "Address".yellow());
    println!("  {}", key.address());
    println!();
    println!("{}:", "Public Key (uncompressed)".yellow());
    println!("  0x{}", hex::encode(key.public_key().to_uncompressed()));
    println!();
    println!(
        "{}",
        format!("Encrypted key saved to: {}", storage.path().display()).dimmed()
    );
    println!(
        "{}",
        "Next: 'stealthnft register' so others can mint to your stealth addresses.".dimmed()
    );

    Ok(())
}
