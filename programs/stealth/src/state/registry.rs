use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::crypto::{Address, PublicKey};
use crate::error::{Result, StealthError};

/// Registry of published public keys, one per address
///
/// Anyone can lookup a registered key to derive stealth addresses for its
/// owner. Entries are only ever written under the address the key itself
/// hashes to, so no account can set or clear another account's record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRegistry {
    keys: BTreeMap<Address, PublicKey>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `key` for `owner`, replacing any previous record.
    ///
    /// The caller must have checked that `key.address() == owner`.
    pub(crate) fn insert(&mut self, owner: Address, key: PublicKey) -> Option<PublicKey> {
        debug_assert_eq!(key.address(), owner);
        self.keys.insert(owner, key)
    }

    /// The key registered for `address`
    pub fn lookup(&self, address: &Address) -> Result<PublicKey> {
        self.keys
            .get(address)
            .copied()
            .ok_or(StealthError::UnregisteredRecipient)
    }

    pub fn is_registered(&self, address: &Address) -> bool {
        self.keys.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
