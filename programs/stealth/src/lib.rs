//! StealthNFT - stealth address minting over secp256k1
//!
//! A recipient publishes its public key once. Any minter can then derive a
//! one-time stealth address bound to that key and mint a token to it without
//! further interaction. Only the holder of the matching private key can
//! recover the stealth address's private key.
//!
//! [`StealthNft`] is the whole world state: key registry, asset ledger and
//! announcement log. It is driven by a single serializing executor; every
//! mutating operation takes `&mut self`, validates completely, and only then
//! writes, so a rejected call leaves the state unchanged.

pub mod crypto;
pub mod error;
pub mod instructions;
pub mod state;


use serde::{Deserialize, Serialize};

pub use crypto::{Address, PublicKey, StealthDerivation, StealthKey};
pub use error::{Result, StealthError};
pub use instructions::StealthMint;
pub use state::{AnnouncementEntry, AnnouncementLog, AssetLedger, KeyRegistry, TokenId};

/// World state of the stealth minting program
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealthNft {
    pub(crate) registry: KeyRegistry,
    pub(crate) ledger: AssetLedger,
    pub(crate) announcements: AnnouncementLog,
}

impl StealthNft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the caller's public key (self-attested)
    pub fn provide_public_key(&mut self, caller: Address, x: [u8; 32], y: [u8; 32]) -> Result<()> {
        instructions::provide_public_key(self, caller, x, y)
    }

    /// Key registered for `address`
    pub fn public_key_of(&self, address: &Address) -> Result<PublicKey> {
        self.registry.lookup(address)
    }

    /// Stealth address and ephemeral point for `(recipient, secret)`, read-only
    pub fn get_stealth_address(&self, recipient: &Address, secret: &[u8]) -> Result<StealthDerivation> {
        instructions::get_stealth_address(self, recipient, secret)
    }

    /// Mint a token directly to `to`
    pub fn mint(&mut self, to: Address) -> Result<TokenId> {
        instructions::mint(self, to)
    }

    /// Mint a token to a stealth address of `recipient`
    pub fn mint_stealthily(&mut self, recipient: &Address, secret: &[u8]) -> Result<StealthMint> {
        instructions::mint_stealthily(self, recipient, secret)
    }

    pub fn owner_of(&self, token_id: TokenId) -> Result<Address> {
        self.ledger.owner_of(token_id)
    }

    /// Transfer `token_id` from `caller` to `to`
    pub fn transfer(&mut self, caller: Address, to: Address, token_id: TokenId) -> Result<()> {
        instructions::transfer(self, caller, to, token_id)
    }

    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &AssetLedger {
        &self.ledger
    }

    pub fn announcements(&self) -> &AnnouncementLog {
        &self.announcements
    }
}
