pub mod config;
pub mod create;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod play;
pub mod show;

use crate::config::Config;
use crate::store::{AuditLog, BoardStore, FileStore};

/// Board store described by the configuration, journaling into the audit log.
pub(crate) fn open_store(cfg: &Config) -> BoardStore<FileStore> {
    BoardStore::new(FileStore::new(cfg.store_path()), &cfg.namespace)
        .with_defaults(cfg.defaults())
        .with_audit(AuditLog::new(cfg.log_path()))
}
