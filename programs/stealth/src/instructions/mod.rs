pub mod mint;
pub mod register;
pub mod transfer;

pub use mint::*;
pub use register::*;
pub use transfer::*;
