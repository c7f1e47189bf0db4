pub mod error;
pub mod layout;
pub mod history;
pub mod trace;
pub mod audit;
pub mod fixtures;

pub use audit::{verify_file, AuditOutcome};
pub use error::{HistoryError, Result};
pub use history::DecodedHistory;
