use super::kv::KeyValueStore;
use super::log::AuditLog;
use crate::errors::AppResult;
use crate::models::normalize::{Defaults, ParsedBoards, parse_boards};
use crate::models::Board;
use crate::ui::messages::warning;

/// Default namespace key under which the board collection is stored.
pub const DEFAULT_NAMESPACE: &str = "guess-who-boards";

/// Ordered board collection kept under one key of a [`KeyValueStore`].
///
/// Every mutation is a full read-modify-write of the serialized collection.
pub struct BoardStore<S: KeyValueStore> {
    kv: S,
    namespace: String,
    defaults: Defaults,
    audit: Option<AuditLog>,
}

impl<S: KeyValueStore> BoardStore<S> {
    pub fn new(kv: S, namespace: &str) -> Self {
        Self {
            kv,
            namespace: namespace.to_string(),
            defaults: Defaults::default(),
            audit: None,
        }
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_audit(mut self, audit: AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// All saved boards. An absent, unreadable or non-array collection is
    /// reported in the audit log and treated as empty. Inside an array, only
    /// the entries that are not boards are skipped (and journaled).
    pub fn list(&self) -> Vec<Board> {
        match self.read() {
            Ok(parsed) => {
                for reason in &parsed.rejected {
                    warning(format!("Skipping unreadable stored board: {}", reason));
                    self.log("read", &self.namespace, &format!("Skipped {}", reason));
                }
                parsed.boards
            }
            Err(e) => {
                warning(format!("Error reading boards from storage: {}", e));
                self.log("read", &self.namespace, &format!("Unreadable collection: {}", e));
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Board> {
        self.list().into_iter().find(|b| b.id == id)
    }

    /// Insert or replace (by id) and write the whole collection back.
    pub fn save(&mut self, board: &Board) -> AppResult<()> {
        let mut boards = self.list();
        let replaced = match boards.iter().position(|b| b.id == board.id) {
            Some(idx) => {
                boards[idx] = board.clone();
                true
            }
            None => {
                boards.push(board.clone());
                false
            }
        };

        self.write(&boards)?;
        self.log(
            "save",
            &board.id,
            if replaced {
                "Board replaced"
            } else {
                "Board added"
            },
        );
        Ok(())
    }

    /// Remove a board. Returns `false` when no board had that id.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let mut boards = self.list();
        let before = boards.len();
        boards.retain(|b| b.id != id);

        if boards.len() == before {
            return Ok(false);
        }

        if boards.is_empty() {
            self.kv.remove_item(&self.namespace)?;
        } else {
            self.write(&boards)?;
        }
        self.log("delete", id, "Board deleted");
        Ok(true)
    }

    fn read(&self) -> AppResult<ParsedBoards> {
        match self.kv.get_item(&self.namespace)? {
            Some(raw) if !raw.trim().is_empty() => Ok(parse_boards(&raw, &self.defaults)?),
            _ => Ok(ParsedBoards::default()),
        }
    }

    fn write(&mut self, boards: &[Board]) -> AppResult<()> {
        let json = serde_json::to_string(boards)?;
        self.kv.set_item(&self.namespace, &json)
    }

    // Journal failures never abort a store operation.
    fn log(&self, operation: &str, target: &str, message: &str) {
        if let Some(audit) = &self.audit
            && let Err(e) = audit.record(operation, target, message)
        {
            eprintln!("⚠️ Failed to write audit log: {}", e);
        }
    }
}
