use std::env;

use once_cell::sync::Lazy;

static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("TEXTTOOLS_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

/// Whether debug output was requested through `TEXTTOOLS_DEBUG`
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// Builds a message that only carries its details in debug mode.
///
/// # Arguments
///
/// * `message` - The main message to log.
/// * `details` - Additional details to include in the log.
///
/// # Returns
///
/// A formatted string containing the message and details.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if is_debug_enabled() {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Logs a debug message to stderr with optional formatted arguments.
///
/// Output goes to stderr so it never ends up in the transformed text.
///
/// # Examples
///
/// ```
/// use texttools::debug;
///
/// debug!("Operation completed");
/// debug!("Applied {} operations in {} mode", 3, "multiline");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if $crate::log::is_debug_enabled() {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if $crate::log::is_debug_enabled() {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
