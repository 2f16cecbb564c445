//! CalcPro History - persisted calculation log
//!
//! Each quantity kind keeps its own newest-first log of the last five
//! conversions, one JSON file per kind. Reads are lenient: missing or
//! corrupt data degrades to an empty log, never an error.

mod entry;
mod store;

pub use entry::HistoryEntry;
pub use store::{HistoryError, HistoryStore, MAX_ENTRIES};
