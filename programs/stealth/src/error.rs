use thiserror::Error;

/// Rejections raised by the registry, the deriver and the ledger.
///
/// Every variant aborts the whole call: state is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StealthError {
    #[error("Invalid public key - off-curve, identity, or not owned by the caller")]
    InvalidKey,

    #[error("Recipient has not registered a public key")]
    UnregisteredRecipient,

    #[error("Degenerate derivation - zero scalar or identity point")]
    DegenerateScalar,

    #[error("Unknown token - it was never minted")]
    UnknownToken,

    #[error("Caller does not own this token")]
    NotOwner,

    #[error("Invalid recipient address - cannot be the zero address")]
    InvalidRecipient,

    #[error("Token counter exhausted")]
    LedgerExhausted,
}

pub type Result<T> = std::result::Result<T, StealthError>;
