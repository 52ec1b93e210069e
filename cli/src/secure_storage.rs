//! Secure key storage with encryption at rest
//!
//! Uses AES-256-GCM for encryption and Argon2id for key derivation.
//! The private key is never stored in plaintext; the public key and address
//! are kept alongside in the clear so read-only commands need no password.

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use anyhow::{bail, Context, Result};
use argon2::{
    password_hash::{rand_core::RngCore, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stealth_nft::{Address, PublicKey};
use zeroize::Zeroize;

use crate::crypto::WalletKey;

/// Argon2 parameters for key derivation
const ARGON2_M_COST: u32 = 65536; // 64 MB memory
const ARGON2_T_COST: u32 = 3; // 3 iterations
const ARGON2_P_COST: u32 = 4; // 4 parallel lanes

/// Environment variable consulted before prompting for a password
pub const PASSWORD_ENV: &str = "STEALTHNFT_PASSWORD";

/// Encrypted key file format
#[derive(Serialize, Deserialize)]
pub struct EncryptedKeyFile {
    /// Version for future compatibility
    pub version: u8,
    /// Account address of the stored key (plaintext)
    pub address: Address,
    /// Public key of the stored key (plaintext)
    pub public_key: PublicKey,
    /// Salt for Argon2 (base64)
    pub salt: String,
    /// Nonce for AES-GCM (base64)
    pub nonce: String,
    /// Encrypted data (base64)
    pub ciphertext: String,
    /// Password hash for verification (optional, using Argon2)
    pub password_hash: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

/// Unencrypted key data (internal use only)
#[derive(Serialize, Deserialize, Zeroize)]
#[zeroize(drop)]
pub struct KeyData {
    pub secret: [u8; 32],
}

impl KeyData {
    pub fn from_wallet(key: &WalletKey) -> Self {
        Self {
            secret: key.export_secret(),
        }
    }

    pub fn to_wallet(&self) -> Result<WalletKey> {
        WalletKey::from_secret(&self.secret)
    }
}

fn argon2_instance() -> Result<Argon2<'static>> {
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2::Params::new(ARGON2_M_COST, ARGON2_T_COST, ARGON2_P_COST, Some(32))
            .map_err(|e| anyhow::anyhow!("Argon2 params error: {}", e))?,
    ))
}

impl EncryptedKeyFile {
    /// Encrypt key data with a password
    pub fn encrypt(data: &KeyData, password: &str) -> Result<Self> {
        let wallet = data.to_wallet()?;

        // Generate random salt
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = argon2_instance()?;

        // Derive 32-byte key
        let mut key_bytes = [0u8; 32];
        argon2
            .hash_password_into(password.as_bytes(), salt.as_str().as_bytes(), &mut key_bytes)
            .map_err(|e| anyhow::anyhow!("Key derivation failed: {}", e))?;

        let cipher = Aes256Gcm::new_from_slice(&key_bytes)
            .map_err(|e| anyhow::anyhow!("Cipher creation failed: {}", e))?;

        // Generate random nonce
        let mut nonce_bytes = [0u8; 12];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from(nonce_bytes);

        let mut plaintext = serde_json::to_vec(data)?;

        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_ref())
            .map_err(|e| anyhow::anyhow!("Encryption failed: {}", e))?;

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .ok()
            .map(|h| h.to_string());

        // Clear sensitive data
        key_bytes.zeroize();
        plaintext.zeroize();

        Ok(Self {
            version: 1,
            address: wallet.address(),
            public_key: *wallet.public_key(),
            salt: salt.as_str().to_string(),
            nonce: b64::encode(&nonce_bytes),
            ciphertext: b64::encode(&ciphertext),
            password_hash,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Decrypt key data with a password
    pub fn decrypt(&self, password: &str) -> Result<KeyData> {
        // Verify password if hash is present
        if let Some(ref hash) = self.password_hash {
            let parsed_hash = argon2::PasswordHash::new(hash)
                .map_err(|e| anyhow::anyhow!("Invalid password hash: {}", e))?;

            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .map_err(|_| anyhow::anyhow!("Invalid password"))?;
        }

        let argon2 = argon2_instance()?;
        let mut key_bytes = [0u8; 32];
        argon2
            .hash_password_into(password.as_bytes(), self.salt.as_bytes(), &mut key_bytes)
            .map_err(|e| anyhow::anyhow!("Key derivation failed: {}", e))?;

        let cipher = Aes256Gcm::new_from_slice(&key_bytes)
            .map_err(|e| anyhow::anyhow!("Cipher creation failed: {}", e))?;

        let nonce_bytes = b64::decode(&self.nonce).context("Invalid nonce encoding")?;
        let ciphertext = b64::decode(&self.ciphertext).context("Invalid ciphertext encoding")?;

        let nonce_array: [u8; 12] = nonce_bytes
            .try_into()
            .map_err(|_| anyhow::anyhow!("Invalid nonce length"))?;
        let nonce = Nonce::from(nonce_array);

        let mut plaintext = cipher
            .decrypt(&nonce, ciphertext.as_ref())
            .map_err(|_| anyhow::anyhow!("Decryption failed - wrong password or corrupted data"))?;

        key_bytes.zeroize();

        let data: KeyData = serde_json::from_slice(&plaintext)
            .context("Failed to parse decrypted key data")?;
        plaintext.zeroize();

        // The plaintext header must describe the encrypted key
        if data.to_wallet()?.address() != self.address {
            bail!("Key file is inconsistent: stored address does not match the encrypted key");
        }

        Ok(data)
    }
}

/// Secure key storage manager
pub struct SecureKeyStorage {
    path: PathBuf,
}

impl SecureKeyStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if encrypted keys exist
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Save encrypted keys
    pub fn save(&self, data: &KeyData, password: &str) -> Result<()> {
        let encrypted = EncryptedKeyFile::encrypt(data, password)?;
        let json = serde_json::to_string_pretty(&encrypted)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write with restrictive permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::write(&self.path, &json)?;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, &json)?;
        }

        Ok(())
    }

    /// Read the key file without decrypting it
    pub fn read_header(&self) -> Result<EncryptedKeyFile> {
        if !self.exists() {
            bail!("No wallet key found. Run 'stealthnft keygen' first.");
        }

        let json = fs::read_to_string(&self.path).context("Failed to read encrypted key file")?;
        serde_json::from_str(&json).context("Failed to parse encrypted key file")
    }

    /// Load and decrypt keys
    pub fn load(&self, password: &str) -> Result<KeyData> {
        self.read_header()?.decrypt(password)
    }

    /// Decrypt and rebuild the wallet key, prompting for the password
    pub fn unlock(&self) -> Result<WalletKey> {
        let password = prompt_password("Enter password to decrypt wallet key: ")?;
        self.load(&password)
            .context("Failed to decrypt wallet key. Wrong password?")?
            .to_wallet()
    }
}

/// Password strength validation
pub fn validate_password_strength(password: &str) -> Result<()> {
    if password.len() < 8 {
        bail!("Password must be at least 8 characters");
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());

    if !has_upper || !has_lower || !has_digit {
        bail!("Password must contain uppercase, lowercase, and numeric characters");
    }

    Ok(())
}

/// Password from the environment, or a hidden prompt
pub fn prompt_password(prompt: &str) -> Result<String> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(password);
    }
    rpassword::prompt_password(prompt).context("Failed to read password")
}

/// Prompt for a new password with confirmation
pub fn prompt_new_password(prompt: &str) -> Result<String> {
    let password = match std::env::var(PASSWORD_ENV) {
        Ok(password) => password,
        Err(_) => {
            let password = rpassword::prompt_password(prompt).context("Failed to read password")?;
            let confirm =
                rpassword::prompt_password("Confirm password: ").context("Failed to read password")?;
            if password != confirm {
                bail!("Passwords do not match");
            }
            password
        }
    };

    validate_password_strength(&password)?;

    Ok(password)
}

// Base64 encoding/decoding helpers
mod b64 {
    use base64::{engine::general_purpose::STANDARD, Engine};

    pub fn encode(data: &[u8]) -> String {
        STANDARD.encode(data)
    }

    pub fn decode(s: &str) -> anyhow::Result<Vec<u8>> {
        STANDARD
            .decode(s)
            .map_err(|e| anyhow::anyhow!("Base64 decode error: {}", e))
    }
}
