use crate::config::Config;
use crate::errors::AppResult;
use crate::store::AuditLog;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// Print the audit journal kept next to the store.
pub fn handle(print: bool, cfg: &Config) -> AppResult<()> {
    if !print {
        info("Use --print to show the audit log.");
        return Ok(());
    }

    let log = AuditLog::new(cfg.log_path());
    let entries = log.entries()?;

    if entries.is_empty() {
        info(format!("The audit log is empty ({}).", log.path().display()));
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Date", 25),
        Column::new("Operation", 10),
        Column::new("Target", 36),
        Column::new("Message", 40),
    ]);
    for e in entries {
        table.add_row(vec![e.date, e.operation, e.target, e.message]);
    }

    print!("{}", table.render());
    Ok(())
}
