pub mod dksap;
pub mod keys;

pub use dksap::*;
pub use keys::*;
