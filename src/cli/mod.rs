// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for replaying tracked keypoints through the gym.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! console logging, and the `count` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Repetition counting command.
pub mod count;

/// Console logging macros.
pub mod logging;
