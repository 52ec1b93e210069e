//! secp256k1 public keys and the account addressing scheme
//!
//! An account address is the low 20 bytes of `keccak256(x || y)`, where `x`
//! and `y` are the 32-byte big-endian affine coordinates of the public point.
//! The same encoding is used for ordinary accounts and for stealth addresses,
//! so a stealth address is indistinguishable from any other account.

use std::fmt;
use std::str::FromStr;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{ProjectivePoint, SecretKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::error::{Result, StealthError};

/// Length of an account address in bytes (160 bits)
pub const ADDRESS_LENGTH: usize = 20;

/// SEC1 tag for an uncompressed point
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Keccak-256 of `data`
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Derive the account address of the point `(x, y)`.
///
/// No curve check is made here; callers that accept untrusted coordinates
/// go through [`validate_public_key`] first.
pub fn address_from_point(x: &[u8; 32], y: &[u8; 32]) -> Address {
    let mut hasher = Keccak256::new();
    hasher.update(x);
    hasher.update(y);
    let hash = hasher.finalize();

    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&hash[32 - ADDRESS_LENGTH..]);
    Address(address)
}

/// Check that `(x, y)` is a point on secp256k1 other than the identity.
pub fn validate_public_key(x: &[u8; 32], y: &[u8; 32]) -> Result<k256::PublicKey> {
    let mut sec1 = [0u8; 65];
    sec1[0] = UNCOMPRESSED_TAG;
    sec1[1..33].copy_from_slice(x);
    sec1[33..].copy_from_slice(y);

    // from_sec1_bytes rejects off-curve coordinates and the identity encoding
    k256::PublicKey::from_sec1_bytes(&sec1).map_err(|_| StealthError::InvalidKey)
}

// ============================================================================
// Address
// ============================================================================

/// A 160-bit account identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    /// The null address. Tokens can never be transferred to it.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Error returned when parsing an [`Address`] from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid address {0:?}: expected 20 hex-encoded bytes")]
pub struct ParseAddressError(String);

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| ParseAddressError(s.to_string()))?;
        Ok(Self(bytes))
    }
}

// Addresses travel as "0x…" strings so they can key JSON maps.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Public key
// ============================================================================

/// A secp256k1 public point as two big-endian coordinates
///
/// Values of this type held by the registry always satisfy the curve
/// equation and are never the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    #[serde(with = "hex")]
    pub x: [u8; 32],
    #[serde(with = "hex")]
    pub y: [u8; 32],
}

impl PublicKey {
    /// Build a validated public key from its coordinates
    pub fn new(x: [u8; 32], y: [u8; 32]) -> Result<Self> {
        validate_public_key(&x, &y)?;
        Ok(Self { x, y })
    }

    /// Public key of a raw 32-byte private scalar
    pub fn from_private_key(private_key: &[u8; 32]) -> Result<Self> {
        let secret = SecretKey::from_slice(private_key).map_err(|_| StealthError::InvalidKey)?;
        Self::from_point(&secret.public_key().to_projective()).ok_or(StealthError::InvalidKey)
    }

    /// Affine coordinates of `point`, or `None` for the identity
    pub fn from_point(point: &ProjectivePoint) -> Option<Self> {
        let encoded = point.to_affine().to_encoded_point(false);
        let (x, y) = (encoded.x()?, encoded.y()?);

        let mut key = Self { x: [0u8; 32], y: [0u8; 32] };
        key.x.copy_from_slice(x);
        key.y.copy_from_slice(y);
        Some(key)
    }

    /// Decode a 65-byte SEC1 uncompressed encoding (`0x04 || x || y`)
    pub fn from_uncompressed(bytes: &[u8; 65]) -> Result<Self> {
        if bytes[0] != UNCOMPRESSED_TAG {
            return Err(StealthError::InvalidKey);
        }
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[1..33]);
        y.copy_from_slice(&bytes[33..]);
        Self::new(x, y)
    }

    /// SEC1 uncompressed encoding (`0x04 || x || y`)
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut bytes = [0u8; 65];
        bytes[0] = UNCOMPRESSED_TAG;
        bytes[1..33].copy_from_slice(&self.x);
        bytes[33..].copy_from_slice(&self.y);
        bytes
    }

    /// Curve point for arithmetic
    pub fn to_point(&self) -> Result<ProjectivePoint> {
        Ok(validate_public_key(&self.x, &self.y)?.to_projective())
    }

    /// Account address controlled by this key
    pub fn address(&self) -> Address {
        address_from_point(&self.x, &self.y)
    }
}
