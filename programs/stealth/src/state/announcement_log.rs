//! Announcement Log
//!
//! Every stealth mint appends the ephemeral point R next to the stealth
//! address and token it produced. Without R the recipient cannot recompute
//! the shared point, so this log is what makes stealth tokens recoverable.
//!
//! Recipients scan the log with their private key; a match yields the
//! private key of the stealth address.

use serde::{Deserialize, Serialize};

use super::TokenId;
use crate::crypto::{scan_payment, Address, PublicKey, StealthKey};

/// Single entry in the announcement log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementEntry {
    /// Position of this entry in the log, starting at 0
    pub sequence: u64,

    /// Token minted to the stealth address
    pub token_id: TokenId,

    /// The derived stealth address that received the token
    pub stealth_address: Address,

    /// Ephemeral public point (R = r·G) published for the recipient
    pub ephemeral: PublicKey,
}

/// Append-only log of stealth mint announcements
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementLog {
    entries: Vec<AnnouncementEntry>,
}

impl AnnouncementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(
        &mut self,
        token_id: TokenId,
        stealth_address: Address,
        ephemeral: PublicKey,
    ) -> AnnouncementEntry {
        let entry = AnnouncementEntry {
            sequence: self.entries.len() as u64,
            token_id,
            stealth_address,
            ephemeral,
        };
        self.entries.push(entry);
        entry
    }

    pub fn entries(&self) -> &[AnnouncementEntry] {
        &self.entries
    }

    /// Entries recorded at or after `sequence`
    pub fn since(&self, sequence: u64) -> &[AnnouncementEntry] {
        let start = usize::try_from(sequence)
            .unwrap_or(usize::MAX)
            .min(self.entries.len());
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries addressed to the holder of `private_key`, with the recovered
    /// stealth key for each.
    pub fn scan(&self, private_key: &[u8; 32]) -> Vec<(AnnouncementEntry, StealthKey)> {
        self.scan_since(private_key, 0)
    }

    /// Like [`AnnouncementLog::scan`], trying only entries recorded at or
    /// after `sequence`.
    pub fn scan_since(
        &self,
        private_key: &[u8; 32],
        sequence: u64,
    ) -> Vec<(AnnouncementEntry, StealthKey)> {
        self.since(sequence)
            .iter()
            .filter_map(|entry| {
                scan_payment(private_key, &entry.ephemeral, &entry.stealth_address)
                    .map(|key| (*entry, key))
            })
            .collect()
    }
}
