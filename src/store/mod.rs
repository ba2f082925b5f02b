pub mod boards;
pub mod kv;
pub mod log;

pub use boards::{BoardStore, DEFAULT_NAMESPACE};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use log::{AuditLog, LogEntry};
