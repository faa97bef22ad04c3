// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Console logging.
//!
//! Messages go to stdout, warnings and errors to stderr. `verbose!` and
//! `section!` are silenced by [`set_verbose`]`(false)`. The library core
//! never logs; the `count` command prints its per-frame progress with
//! `verbose!` and turns it off under `--json`.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

/// Global verbosity flag.
static VERBOSE: AtomicBool = AtomicBool::new(true);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn print_warning(args: fmt::Arguments<'_>) {
    eprintln!("{} {args}", "WARNING ⚠️".yellow().bold());
}

#[doc(hidden)]
pub fn print_error(args: fmt::Arguments<'_>) {
    eprintln!("{} {args}", "Error:".red().bold());
}

#[doc(hidden)]
pub fn print_success(args: fmt::Arguments<'_>) {
    println!("{} {args}", "✅".green());
}

#[doc(hidden)]
pub fn print_section(args: fmt::Arguments<'_>) {
    if is_verbose() {
        println!();
        println!("{}", args.to_string().cyan().bold());
    }
}

/// Macro for standard info messages.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("{}", format_args!($($arg)*))
    };
}

/// Macro for warning messages.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::cli::logging::print_warning(format_args!($($arg)*))
    };
}

/// Macro for error messages.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::cli::logging::print_error(format_args!($($arg)*))
    };
}

/// Macro for success messages.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::cli::logging::print_success(format_args!($($arg)*))
    };
}

/// Macro for verbose messages.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!("{}", format_args!($($arg)*));
        }
    };
}

/// Macro for section headers.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {
        $crate::cli::logging::print_section(format_args!($($arg)*))
    };
}
