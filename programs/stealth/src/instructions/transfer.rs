use tracing::info;

use crate::crypto::Address;
use crate::error::Result;
use crate::state::TokenId;
use crate::StealthNft;

/// Transfer `token_id` from the caller to `to`.
///
/// # Errors
/// * `UnknownToken` if the token was never minted
/// * `NotOwner` unless `caller` currently owns the token
/// * `InvalidRecipient` if `to` is the zero address
pub fn transfer(program: &mut StealthNft, caller: Address, to: Address, token_id: TokenId) -> Result<()> {
    program.ledger.reassign(caller, to, token_id)?;

    info!(from = %caller, %to, %token_id, "token transferred");

    Ok(())
}
