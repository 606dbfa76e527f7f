// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for rendering pose sequences.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! console logging and the `render` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Console output macros and verbosity.
pub mod logging;

/// Render command.
pub mod render;
