//! Identifier and timestamp generation for boards and characters.

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug pattern"));

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn from_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Lowercase slug: runs of anything outside `[a-z0-9]` collapse into `-`,
/// edges are trimmed, and an empty result becomes `board`.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let slug = NON_ALNUM.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "board".to_string()
    } else {
        slug.to_string()
    }
}

/// `<slug>-<stamp>`
pub fn board_id(title: &str, stamp: i64) -> String {
    format!("{}-{}", slugify(title), stamp)
}

/// ISO-8601 UTC with milliseconds, `2025-01-31T09:15:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// ISO form of a millisecond stamp.
pub fn stamp_timestamp(stamp: i64) -> String {
    DateTime::from_timestamp_millis(stamp)
        .map(iso_timestamp)
        .unwrap_or_default()
}

/// Hands out millisecond stamps that strictly increase within the process,
/// so two ids generated by the same generator never collide.
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last: i64,
}

impl IdGenerator {
    pub fn system() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            last: i64::MIN,
        }
    }

    pub fn next_stamp(&mut self) -> i64 {
        let now = self.clock.now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }

    pub fn board_id(&mut self, title: &str) -> String {
        let stamp = self.next_stamp();
        board_id(title, stamp)
    }

    /// Id and creation date of a new board, both taken from one stamp.
    pub fn board_identity(&mut self, title: &str) -> (String, String) {
        let stamp = self.next_stamp();
        (board_id(title, stamp), stamp_timestamp(stamp))
    }

    /// Character ids are `<stamp>-<slot>`.
    pub fn character_id(&mut self, slot: usize) -> String {
        format!("{}-{}", self.next_stamp(), slot)
    }

    pub fn created_at(&mut self) -> String {
        let stamp = self.next_stamp();
        stamp_timestamp(stamp)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::system()
    }
}
