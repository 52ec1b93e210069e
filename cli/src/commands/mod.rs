pub mod address;
pub mod info;
pub mod keygen;
pub mod mint;
pub mod owner;
pub mod register;
pub mod scan;
pub mod send;
pub mod stealth_address;
pub mod transfer;
