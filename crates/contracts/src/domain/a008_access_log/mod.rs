pub mod aggregate;

pub use aggregate::{AccessLog, AccessLogId, EntryType, LogSummary};
