use tracing::{info, warn};

use crate::crypto::{validate_public_key, Address, PublicKey};
use crate::error::{Result, StealthError};
use crate::StealthNft;

/// Publish the caller's public key so others can derive stealth addresses for it.
///
/// Self-attestation: the key is accepted only when the address it hashes to
/// is the caller's own address.
///
/// Calling again with a new valid key replaces the caller's record.
///
/// # Arguments
/// * `caller` - Address of the account submitting the key
/// * `x`, `y` - Big-endian affine coordinates of the secp256k1 point
pub fn provide_public_key(
    program: &mut StealthNft,
    caller: Address,
    x: [u8; 32],
    y: [u8; 32],
) -> Result<()> {
    // Validate the point is on the curve and not the identity
    validate_public_key(&x, &y)?;

    let key = PublicKey { x, y };
    let derived = key.address();
    if derived != caller {
        warn!(%caller, %derived, "rejected public key not owned by caller");
        return Err(StealthError::InvalidKey);
    }

    let replaced = program.registry.insert(caller, key).is_some();

    info!(%caller, replaced, "public key registered");

    Ok(())
}
