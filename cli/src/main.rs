//! StealthNFT CLI - register keys, mint to stealth addresses, recover them

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod crypto;
mod logging;
mod secure_storage;
mod world;


#[cfg(test)]
mod test_vectors;



use commands::*;
use config::Config;
use logging::LogFormat;

#[derive(Parser)]
#[command(name = "stealthnft")]
#[command(version)]
#[command(about = "Stealth address NFT minting over secp256k1")]
#[command(long_about = r#"
StealthNFT lets anyone mint a token to a one-time address bound to your
registered public key. Only you can recognise and move those tokens.

Quick Start:
  1. stealthnft keygen                      Generate your wallet key
  2. stealthnft register                    Publish your public key
  3. stealthnft send --to <address>         Mint to someone's stealth address
  4. stealthnft scan                        Find tokens minted to you
  5. stealthnft transfer --token <id> --to  Move a token you control
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the key file and world state
    #[arg(long, global = true, env = config::HOME_ENV)]
    home: Option<PathBuf>,

    /// Diagnostic log format (stderr)
    #[arg(long, global = true, value_enum, default_value = "human")]
    log_format: LogFormat,

    /// Increase diagnostic verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate or import the wallet key
    Keygen {
        /// Force overwrite existing key
        #[arg(short, long)]
        force: bool,

        /// Generate a random key without a recovery phrase
        #[arg(long)]
        no_mnemonic: bool,

        /// Import from existing recovery phrase
        #[arg(long)]
        import_mnemonic: Option<String>,

        /// Passphrase for mnemonic (optional extra security)
        #[arg(long)]
        passphrase: Option<String>,

        /// Import a raw hex private key
        #[arg(long)]
        import_key: Option<String>,
    },

    /// Show your address and public key
    Address,

    /// Register your public key (self-attested)
    Register,

    /// Preview a recipient's stealth address for a secret, without minting
    StealthAddress {
        /// Recipient address (0x...)
        #[arg(short, long)]
        to: String,

        /// Secret as UTF-8 text
        #[arg(long)]
        secret: Option<String>,

        /// Secret as hex bytes
        #[arg(long)]
        secret_hex: Option<String>,
    },

    /// Mint a token directly to an address
    Mint {
        /// Owner address (0x...)
        #[arg(short, long)]
        to: String,
    },

    /// Mint a token to a fresh stealth address of a registered recipient
    Send {
        /// Recipient address (0x...)
        #[arg(short, long)]
        to: String,

        /// Secret as UTF-8 text (default: 32 random bytes)
        #[arg(long)]
        secret: Option<String>,

        /// Secret as hex bytes
        #[arg(long)]
        secret_hex: Option<String>,
    },

    /// Show the owner of a token
    Owner {
        /// Token id
        token: String,
    },

    /// Transfer a token you control
    Transfer {
        /// Token id
        #[arg(long)]
        token: String,

        /// Destination address (0x...)
        #[arg(short, long)]
        to: String,
    },

    /// Scan announcements for tokens minted to your stealth addresses
    Scan {
        /// Start from this announcement sequence number
        #[arg(long)]
        from_sequence: Option<u64>,

        /// Print the recovered stealth private keys
        #[arg(long)]
        reveal_keys: bool,
    },

    /// Show configuration and key info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, cli.verbose)?;

    let config = Config::resolve(cli.home)?;

    match cli.command {
        Commands::Keygen {
            force,
            no_mnemonic,
            import_mnemonic,
            passphrase,
            import_key,
        } => {
            keygen::run(
                &config,
                keygen::KeygenOptions {
                    force,
                    with_mnemonic: !no_mnemonic,
                    import_mnemonic,
                    passphrase,
                    import_key,
                },
            )?;
        }
        Commands::Address => {
            address::run(&config)?;
        }
        Commands::Register => {
            register::run(&config)?;
        }
        Commands::StealthAddress {
            to,
            secret,
            secret_hex,
        } => {
            stealth_address::run(&config, &to, secret.as_deref(), secret_hex.as_deref())?;
        }
        Commands::Mint { to } => {
            mint::run(&config, &to)?;
        }
        Commands::Send {
            to,
            secret,
            secret_hex,
        } => {
            send::run(&config, &to, secret.as_deref(), secret_hex.as_deref())?;
        }
        Commands::Owner { token } => {
            owner::run(&config, &token)?;
        }
        Commands::Transfer { token, to } => {
            transfer::run(&config, &token, &to)?;
        }
        Commands::Scan {
            from_sequence,
            reveal_keys,
        } => {
            scan::run(&config, from_sequence, reveal_keys)?;
        }
        Commands::Info => {
            info::run(&config)?;
        }
    }

    Ok(())
}
