pub mod ledger;
pub mod types;

pub use ledger::{HistoryLedger, CAPACITY};
pub use types::HistoryRecord;
