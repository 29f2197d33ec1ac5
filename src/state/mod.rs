//! Run history persistence.

pub mod history;
pub mod store;

pub use history::RunRecord;
pub use store::HistoryStore;
