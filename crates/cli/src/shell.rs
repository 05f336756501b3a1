//! Status output on stderr, kept apart from command results on stdout.

use anstyle::{AnsiColor, Effects, Style};
use std::{
    fmt,
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
};

pub const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
pub const WARN: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);
pub const NOTE: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silences [`sh_note!`](crate::sh_note) and [`sh_warn!`](crate::sh_warn).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Writes `message` to stderr, prefixed with a styled `label`.
///
/// Nothing is written in quiet mode. Write errors are ignored.
pub fn status(label: &str, style: Style, message: fmt::Arguments<'_>) {
    if is_quiet() {
        return;
    }
    let mut stderr = io::stderr().lock();
    let _ = if yansi::is_enabled() {
        writeln!(stderr, "{style}{label}:{style:#} {message}")
    } else {
        writeln!(stderr, "{label}: {message}")
    };
}

/// Writes an error to stderr. Errors are printed even in quiet mode.
pub fn error(message: fmt::Arguments<'_>) {
    let mut stderr = io::stderr().lock();
    let _ = if yansi::is_enabled() {
        writeln!(stderr, "{ERROR}Error:{ERROR:#} {message}")
    } else {
        writeln!(stderr, "Error: {message}")
    };
}

/// Prints a note to stderr unless quiet.
#[macro_export]
macro_rules! sh_note {
    ($($arg:tt)*) => {
        $crate::shell::status("Note", $crate::shell::NOTE, format_args!($($arg)*))
    };
}

/// Prints a warning to stderr unless quiet.
#[macro_export]
macro_rules! sh_warn {
    ($($arg:tt)*) => {
        $crate::shell::status("Warning", $crate::shell::WARN, format_args!($($arg)*))
    };
}
