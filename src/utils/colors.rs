/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[36m";

/// Eliminated cards are greyed and struck through, live ones stay plain.
pub fn colorize_card(label: &str, eliminated: bool) -> String {
    if eliminated {
        format!("{GREY}\x1b[9m{label}{RESET}")
    } else {
        label.to_string()
    }
}

/// Greys out empty or placeholder values such as `-`.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
