use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::crypto::{derive_stealth_address, Address, PublicKey, StealthDerivation};
use crate::error::Result;
use crate::state::TokenId;
use crate::StealthNft;

/// Result of a stealth mint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealthMint {
    /// One-time address that now owns the token
    pub stealth_address: Address,
    /// The minted token
    pub token_id: TokenId,
    /// Ephemeral point R the recipient needs to recover the stealth key
    pub ephemeral: PublicKey,
}

/// Compute the stealth address of `recipient` for `secret` without minting.
///
/// # Errors
/// * `UnregisteredRecipient` if `recipient` never provided a key
/// * `DegenerateScalar` if the derivation hits a zero scalar
pub fn get_stealth_address(
    program: &StealthNft,
    recipient: &Address,
    secret: &[u8],
) -> Result<StealthDerivation> {
    let public_key = program.registry.lookup(recipient)?;
    let derivation = derive_stealth_address(&public_key, secret)?;

    debug!(
        %recipient,
        stealth_address = %derivation.stealth_address,
        "derived stealth address"
    );

    Ok(derivation)
}

/// Mint the next token directly to `to`.
pub fn mint(program: &mut StealthNft, to: Address) -> Result<TokenId> {
    let token_id = program.ledger.mint(to)?;

    info!(%to, %token_id, "token minted");

    Ok(token_id)
}

/// Mint the next token to a fresh stealth address of `recipient`.
///
/// The derivation runs first, so an unregistered recipient or a degenerate
/// secret leaves the ledger untouched. The ephemeral point is returned and
/// appended to the announcement log.
pub fn mint_stealthily(
    program: &mut StealthNft,
    recipient: &Address,
    secret: &[u8],
) -> Result<StealthMint> {
    let derivation = get_stealth_address(program, recipient, secret)?;
    let token_id = program.ledger.mint(derivation.stealth_address)?;

    let entry = program.announcements.append(
        token_id,
        derivation.stealth_address,
        derivation.ephemeral,
    );

    info!(
        %token_id,
        stealth_address = %derivation.stealth_address,
        ephemeral_x = %hex::encode(derivation.ephemeral.x),
        ephemeral_y = %hex::encode(derivation.ephemeral.y),
        sequence = entry.sequence,
        "token minted to stealth address"
    );

    Ok(StealthMint {
        stealth_address: derivation.stealth_address,
        token_id,
        ephemeral: derivation.ephemeral,
    })
}
