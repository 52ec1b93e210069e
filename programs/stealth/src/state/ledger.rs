use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crypto::Address;
use crate::error::{Result, StealthError};

/// Sequential token identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub u64);

impl TokenId {
    /// First identifier handed out by a fresh ledger
    pub const FIRST: TokenId = TokenId(0);

    /// 32-byte big-endian encoding (the width of a uint256 word)
    pub fn to_be_bytes32(self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&self.0.to_be_bytes());
        word
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Token ownership ledger
///
/// Tokens are never burned: once minted a token always has exactly one
/// owner, changed only by [`AssetLedger::reassign`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLedger {
    /// Identifier the next mint will receive
    next_token_id: TokenId,

    owners: BTreeMap<TokenId, Address>,
}

impl Default for AssetLedger {
    fn default() -> Self {
        Self {
            next_token_id: TokenId::FIRST,
            owners: BTreeMap::new(),
        }
    }
}

impl AssetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new token owned by `owner` and return its identifier
    pub(crate) fn mint(&mut self, owner: Address) -> Result<TokenId> {
        let token_id = self.next_token_id;
        let next = token_id
            .0
            .checked_add(1)
            .ok_or(StealthError::LedgerExhausted)?;

        self.owners.insert(token_id, owner);
        self.next_token_id = TokenId(next);
        Ok(token_id)
    }

    pub fn owner_of(&self, token_id: TokenId) -> Result<Address> {
        self.owners
            .get(&token_id)
            .copied()
            .ok_or(StealthError::UnknownToken)
    }

    /// Move `token_id` from `from` to `to`.
    ///
    /// All checks run before the owner entry is touched.
    pub(crate) fn reassign(&mut self, from: Address, to: Address, token_id: TokenId) -> Result<()> {
        let owner = self
            .owners
            .get_mut(&token_id)
            .ok_or(StealthError::UnknownToken)?;

        if *owner != from {
            return Err(StealthError::NotOwner);
        }
        if to.is_zero() {
            return Err(StealthError::InvalidRecipient);
        }

        *owner = to;
        Ok(())
    }

    /// Identifier the next mint will receive
    pub fn next_token_id(&self) -> TokenId {
        self.next_token_id
    }

    /// Number of tokens minted so far
    pub fn total_minted(&self) -> usize {
        self.owners.len()
    }
}
