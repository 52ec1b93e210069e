//! Single-key stealth address derivation over secp256k1
//!
//! ## Protocol Overview
//!
//! ### Recipient Setup
//! 1. Hold a private scalar p with public key P = p·G
//! 2. Register P in the key registry (self-attested against the caller address)
//!
//! ### Sender Flow
//! 1. Ephemeral scalar: r = H(secret) mod n, R = r·G
//! 2. Shared point: S = r·P
//! 3. Blinding scalar: c = H(S.x || S.y) mod n
//! 4. Stealth key: Q = c·G + P, stealth address = address(Q)
//! 5. Publish R next to the asset sent to address(Q)
//!
//! ### Recipient Scanning
//! 1. For each announcement with ephemeral point R:
//! 2. Compute shared point: S = p·R = p·r·G (same as sender!)
//! 3. Derive expected key: Q' = c·G + P
//! 4. If address(Q') matches, the stealth private key is d = p + c

use k256::elliptic_curve::ops::Reduce;
use k256::{FieldBytes, ProjectivePoint, Scalar, SecretKey, U256};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::keys::{keccak256, Address, PublicKey};
use crate::error::{Result, StealthError};

/// Hash arbitrary bytes to a scalar: keccak256(data) reduced mod n
///
/// The whole input is hashed whatever its length.
pub fn hash_to_scalar(data: &[u8]) -> Scalar {
    let digest = keccak256(data);
    <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::clone_from_slice(&digest))
}

/// Blinding scalar c = H(S.x || S.y) for a shared point S
pub fn shared_point_scalar(shared: &PublicKey) -> Scalar {
    let mut packed = [0u8; 64];
    packed[..32].copy_from_slice(&shared.x);
    packed[32..].copy_from_slice(&shared.y);
    let scalar = hash_to_scalar(&packed);
    packed.zeroize();
    scalar
}

pub(crate) fn non_zero(scalar: Scalar) -> Result<Scalar> {
    if scalar == Scalar::ZERO {
        return Err(StealthError::DegenerateScalar);
    }
    Ok(scalar)
}

fn affine(point: &ProjectivePoint) -> Result<PublicKey> {
    PublicKey::from_point(point).ok_or(StealthError::DegenerateScalar)
}

// ============================================================================
// Stealth Address Computation (Sender Side)
// ============================================================================

/// Output of a sender-side derivation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StealthDerivation {
    /// Address of the stealth key Q = c·G + P
    pub stealth_address: Address,
    /// Ephemeral point R = r·G that must be published for the recipient
    pub ephemeral: PublicKey,
}

/// Derive the stealth address for `recipient` from caller-supplied secret material.
///
/// Pure: the same `(recipient, secret)` pair always yields the same output.
///
/// # Errors
/// * `DegenerateScalar` if r or c reduce to zero, or Q is the identity
/// * `InvalidKey` if `recipient` is not a valid point
pub fn derive_stealth_address(recipient: &PublicKey, secret: &[u8]) -> Result<StealthDerivation> {
    let g = ProjectivePoint::GENERATOR;
    let recipient_point = recipient.to_point()?;

    let r = non_zero(hash_to_scalar(secret))?;
    let ephemeral = affine(&(g * r))?;

    // S = r·P
    let shared = affine(&(recipient_point * r))?;
    let c = non_zero(shared_point_scalar(&shared))?;

    // Q = c·G + P
    let stealth = affine(&(g * c + recipient_point))?;

    Ok(StealthDerivation {
        stealth_address: stealth.address(),
        ephemeral,
    })
}

// ============================================================================
// Payment Scanning (Recipient Side)
// ============================================================================

/// A scalar that zeroizes its contents on drop
#[derive(Clone)]
struct SecretScalar {
    bytes: [u8; 32],
}

impl SecretScalar {
    fn from_scalar(scalar: &Scalar) -> Self {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&scalar.to_bytes());
        Self { bytes }
    }
}

impl Drop for SecretScalar {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Private key recovered for a stealth address
///
/// Clone is NOT derived to prevent accidental secret duplication.
pub struct StealthKey {
    secret: SecretScalar,
    public_key: PublicKey,
}

impl StealthKey {
    /// The stealth public key Q = d·G
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The stealth address this key controls
    pub fn address(&self) -> Address {
        self.public_key.address()
    }

    /// Raw private scalar d = p + c (handle with care)
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.secret.bytes
    }
}

impl std::fmt::Debug for StealthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StealthKey")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

fn private_scalar(private_key: &[u8; 32]) -> Result<Scalar> {
    let secret = SecretKey::from_slice(private_key).map_err(|_| StealthError::InvalidKey)?;
    Ok(*secret.to_nonzero_scalar())
}

/// Recompute the stealth key behind an ephemeral point.
///
/// The recipient holding `private_key` (p) computes S = p·R, which equals the
/// sender's r·P, then d = p + c.
pub fn recover_stealth_key(private_key: &[u8; 32], ephemeral: &PublicKey) -> Result<StealthKey> {
    let p = private_scalar(private_key)?;
    let ephemeral_point = ephemeral.to_point()?;

    let shared = affine(&(ephemeral_point * p))?;
    let c = non_zero(shared_point_scalar(&shared))?;

    let d = non_zero(p + c)?;
    let public_key = affine(&(ProjectivePoint::GENERATOR * d))?;

    Ok(StealthKey {
        secret: SecretScalar::from_scalar(&d),
        public_key,
    })
}

/// Scan a payment: returns the stealth key if `stealth_address` belongs to
/// the holder of `private_key`.
pub fn scan_payment(
    private_key: &[u8; 32],
    ephemeral: &PublicKey,
    stealth_address: &Address,
) -> Option<StealthKey> {
    let key = recover_stealth_key(private_key, ephemeral).ok()?;
    let expected = key.address();

    // Use constant-time comparison to prevent timing attacks
    if bool::from(expected.as_bytes()[..].ct_eq(&stealth_address.as_bytes()[..])) {
        Some(key)
    } else {
        None
    }
}
