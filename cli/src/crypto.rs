//! Wallet key handling for the StealthNFT CLI
//!
//! A participant holds exactly one secp256k1 private key. Its public key is
//! what gets registered, and its address is the caller identity the CLI
//! presents to the program.
//!
//! Security features:
//! - Zeroization of secret bytes on drop
//! - BIP-39 mnemonic support for key recovery
//! - OS entropy for keys and stealth secrets

use k256::SecretKey;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use stealth_nft::crypto::scan_payment;
use stealth_nft::{Address, PublicKey, StealthKey};
use zeroize::Zeroize;

/// Domain separator for deriving the wallet key from a mnemonic seed
const MNEMONIC_DOMAIN: &[u8] = b"stealthnft/account";

/// The participant's private key together with its public key
///
/// Clone is NOT derived to prevent accidental secret duplication.
pub struct WalletKey {
    secret: [u8; 32],
    public_key: PublicKey,
}

impl Drop for WalletKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl WalletKey {
    /// Generate a new random key using OS entropy
    pub fn generate() -> Self {
        loop {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            // Out-of-range draws (zero or >= n) are astronomically rare; redraw
            let key = Self::from_secret(&bytes);
            bytes.zeroize();
            if let Ok(key) = key {
                return key;
            }
        }
    }

    /// Rebuild a key from its raw 32-byte secret
    pub fn from_secret(secret: &[u8; 32]) -> anyhow::Result<Self> {
        SecretKey::from_slice(secret)
            .map_err(|_| anyhow::anyhow!("Private key is zero or not below the curve order"))?;
        let public_key = PublicKey::from_private_key(secret)?;

        Ok(Self {
            secret: *secret,
            public_key,
        })
    }

    /// Parse a hex private key (with or without `0x`)
    pub fn from_hex(input: &str) -> anyhow::Result<Self> {
        let digits = input.trim().trim_start_matches("0x");
        let mut secret = [0u8; 32];
        hex::decode_to_slice(digits, &mut secret)
            .map_err(|e| anyhow::anyhow!("Invalid private key hex: {}", e))?;
        let key = Self::from_secret(&secret);
        secret.zeroize();
        key
    }

    /// Derive the key from a BIP-39 mnemonic phrase
    ///
    /// Derivation: secret = SHA256("stealthnft/account" || seed)
    pub fn from_mnemonic(mnemonic_phrase: &str, passphrase: &str) -> anyhow::Result<Self> {
        use bip39::Mnemonic;

        let mnemonic: Mnemonic = mnemonic_phrase
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid mnemonic: {}", e))?;

        let mut seed = mnemonic.to_seed(passphrase);

        let mut hasher = Sha256::new();
        hasher.update(MNEMONIC_DOMAIN);
        hasher.update(seed);
        let mut secret: [u8; 32] = hasher.finalize().into();
        seed.zeroize();

        let key = Self::from_secret(&secret);
        secret.zeroize();
        key
    }

    /// Generate a new random mnemonic and derive the key from it
    pub fn generate_with_mnemonic() -> anyhow::Result<(Self, String)> {
        use bip39::Mnemonic;

        // 256 bits of entropy for a 24-word mnemonic
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy(&entropy)
            .map_err(|e| anyhow::anyhow!("Failed to generate mnemonic: {}", e))?;
        entropy.zeroize();

        let phrase = mnemonic.to_string();
        let key = Self::from_mnemonic(&phrase, "")?;

        Ok((key, phrase))
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The account address this key controls
    pub fn address(&self) -> Address {
        self.public_key.address()
    }

    /// Export the secret (for encrypted storage)
    ///
    /// WARNING: Handle these bytes with extreme care!
    pub fn export_secret(&self) -> [u8; 32] {
        self.secret
    }

    /// Check whether a stealth payment belongs to this key
    pub fn scan(&self, ephemeral: &PublicKey, stealth_address: &Address) -> Option<StealthKey> {
        scan_payment(&self.secret, ephemeral, stealth_address)
    }

    /// Raw secret for scanning a whole announcement log
    pub(crate) fn secret(&self) -> &[u8; 32] {
        &self.secret
    }
}

impl std::fmt::Debug for WalletKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletKey")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

/// Fresh random secret material for a stealth mint
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}
