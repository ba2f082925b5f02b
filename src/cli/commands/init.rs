use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{AuditLog, FileStore};
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty board store
pub fn handle(cli: &Cli) -> AppResult<()> {
    let store_path = Config::init_all(cli.store.as_deref(), cli.test)?;

    println!("⚙️  Initializing guesswho…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Store       : {}", store_path.display());

    FileStore::new(&store_path).ensure_exists()?;

    let log = AuditLog::new(store_path.with_extension("log"));
    if let Err(e) = log.record("init", &store_path.to_string_lossy(), "Store initialized") {
        eprintln!("⚠️ Failed to write audit log: {}", e);
    }

    success(format!("Store initialized at {}", store_path.display()));
    Ok(())
}
