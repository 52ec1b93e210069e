pub mod announcement_log;
pub mod ledger;
pub mod registry;

pub use announcement_log::*;
pub use ledger::*;
pub use registry::*;
