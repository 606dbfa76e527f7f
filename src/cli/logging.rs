// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Console output macros.
//!
//! Output is gated by a global [`Level`]: `Quiet` keeps only errors, `Normal`
//! adds info, warnings and successes, `Verbose` adds per-frame detail.

use std::sync::atomic::{AtomicU8, Ordering};

/// Console verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Errors only.
    Quiet = 0,
    /// Info, warnings, successes and errors.
    Normal = 1,
    /// Everything, including per-frame messages.
    Verbose = 2,
}

impl Level {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Quiet,
            1 => Self::Normal,
            _ => Self::Verbose,
        }
    }
}

/// Global verbosity level.
static LEVEL: AtomicU8 = AtomicU8::new(Level::Verbose as u8);

/// Set the global verbosity level.
pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Current verbosity level.
pub fn level() -> Level {
    Level::from_u8(LEVEL.load(Ordering::Relaxed))
}

/// Toggle between `Verbose` and `Normal`.
pub fn set_verbose(verbose: bool) {
    set_level(if verbose { Level::Verbose } else { Level::Normal });
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    level() >= Level::Verbose
}

/// Check if non-error output is enabled.
pub fn is_enabled() -> bool {
    level() >= Level::Normal
}

/// Macro for standard info messages.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_enabled() {
            println!("{}", format!($($arg)*));
        }
    }
}

/// Macro for warning messages.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        if $crate::cli::logging::is_enabled() {
            eprintln!("{} {}", "WARNING ⚠️".yellow().bold(), format!($($arg)*));
        }
    }}
}

/// Macro for error messages. Printed at every level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), format!($($arg)*));
    }}
}

/// Macro for success messages.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        if $crate::cli::logging::is_enabled() {
            println!("{} {}", "✅".green(), format!($($arg)*));
        }
    }}
}

/// Macro for verbose messages.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!("{}", format!($($arg)*));
        }
    }
}

/// Macro for section headers.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        if $crate::cli::logging::is_verbose() {
            println!();
            println!("{}", format!($($arg)*).cyan().bold());
        }
    }}
}
