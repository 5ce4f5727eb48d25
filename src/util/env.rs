//! Environment detection utilities.

use std::io::IsTerminal;

/// Check if stdin is a TTY.
#[must_use]
pub fn stdin_is_tty() -> bool {
    std::io::stdin().is_terminal()
}

/// Check if stdout is a TTY.
#[must_use]
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Interactive prompts need both ends attached to a terminal.
#[must_use]
pub fn is_interactive() -> bool {
    stdin_is_tty() && stdout_is_tty()
}

/// Whether `var` is set to `1`, `true`, `yes` or `on` (any case).
#[must_use]
pub fn is_env_truthy(var: &str) -> bool {
    std::env::var(var).is_ok_and(|v| {
        matches!(
            v.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
