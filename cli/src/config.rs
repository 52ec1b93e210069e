//! Configuration and file locations for the StealthNFT CLI

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use stealth_nft::{Address, TokenId};

/// Default directory under the user's home
const STEALTH_DIR: &str = ".stealthnft";
const KEYS_FILE: &str = "keys.enc";
const STATE_FILE: &str = "state.json";

/// Environment variable that overrides the home directory
pub const HOME_ENV: &str = "STEALTHNFT_HOME";

/// Resolved CLI paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    home: PathBuf,
}

impl Config {
    /// Resolve the home directory: explicit flag, then `~/.stealthnft`.
    ///
    /// clap fills `home` from `STEALTHNFT_HOME` when the flag is absent.
    pub fn resolve(home: Option<PathBuf>) -> Result<Self> {
        let home = match home {
            Some(path) => path,
            None => dirs::home_dir()
                .context("Could not find home directory; pass --home")?
                .join(STEALTH_DIR),
        };
        Ok(Self { home })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Encrypted wallet key
    pub fn keys_file(&self) -> PathBuf {
        self.home.join(KEYS_FILE)
    }

    /// Persisted world state
    pub fn state_file(&self) -> PathBuf {
        self.home.join(STATE_FILE)
    }

    pub fn ensure_home(&self) -> Result<()> {
        fs::create_dir_all(&self.home)
            .with_context(|| format!("Failed to create {}", self.home.display()))
    }
}

/// Parse a `0x`-prefixed (or bare) 20-byte hex address
pub fn parse_address(input: &str) -> Result<Address> {
    input
        .trim()
        .parse()
        .with_context(|| format!("Invalid address '{}'", input))
}

/// Parse a decimal token id
pub fn parse_token_id(input: &str) -> Result<TokenId> {
    let id: u64 = input
        .trim()
        .parse()
        .with_context(|| format!("Invalid token id '{}'", input))?;
    Ok(TokenId(id))
}

/// Secret material for a stealth derivation: UTF-8 text or hex bytes.
///
/// Returns `None` when neither is given.
pub fn parse_secret(text: Option<&str>, hex_input: Option<&str>) -> Result<Option<Vec<u8>>> {
    match (text, hex_input) {
        (Some(_), Some(_)) => bail!("Pass either --secret or --secret-hex, not both"),
        (Some(text), None) => Ok(Some(text.as_bytes().to_vec())),
        (None, Some(encoded)) => {
            let digits = encoded.trim().trim_start_matches("0x");
            let bytes = hex::decode(digits).context("Invalid --secret-hex value")?;
            Ok(Some(bytes))
        }
        (None, None) => Ok(None),
    }
}

/// Shorten an address for table output
pub fn short_address(address: &Address) -> String {
    let full = address.to_string();
    format!("{}…{}", &full[..8], &full[full.len() - 6..])
}
