//! Terminal output.
//!
//! Colors follow TTY detection and the `NO_COLOR` environment variable and
//! can be turned off with `--no-ansi`. Plugin lines go to stderr so stdout
//! only carries command results.

pub mod table;

use override_files_plugin::{Io, Verbosity};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, stderr, stdout};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

static IS_TTY: LazyLock<bool> = LazyLock::new(|| stdout().is_terminal() && stderr().is_terminal());

static NO_COLOR: LazyLock<bool> = LazyLock::new(|| std::env::var("NO_COLOR").is_ok());

/// Initialize output settings from the environment and flags.
pub fn init(no_ansi: bool) {
    let colors = !no_ansi && *IS_TTY && !*NO_COLOR;
    COLOR_ENABLED.store(colors, Ordering::Relaxed);
    console::set_colors_enabled(colors);
    console::set_colors_enabled_stderr(colors);
}

/// Check if colors are enabled.
pub fn colors_enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

/// Print a success message.
pub fn success(text: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green(), text);
    } else {
        eprintln!("OK {text}");
    }
}

/// Print a warning message.
pub fn warning(text: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow(), text.yellow());
    } else {
        eprintln!("Warning: {text}");
    }
}

/// Print an error message.
pub fn error(text: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), text.red());
    } else {
        eprintln!("Error: {text}");
    }
}

/// Print a hint below an error.
pub fn hint(text: &str) {
    if colors_enabled() {
        eprintln!("  {} {}", "help:".cyan(), text.dimmed());
    } else {
        eprintln!("  help: {text}");
    }
}

/// [`Io`] writing to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleIo {
    verbosity: Verbosity,
}

impl ConsoleIo {
    /// Create a console at `verbosity`.
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Io for ConsoleIo {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn write(&mut self, verbosity: Verbosity, message: &str) {
        if !self.is_enabled(verbosity) {
            return;
        }
        if verbosity >= Verbosity::VeryVerbose && colors_enabled() {
            eprintln!("{}", message.dimmed());
        } else {
            eprintln!("{message}");
        }
    }

    fn warning(&mut self, message: &str) {
        if self.is_enabled(Verbosity::Normal) {
            warning(message);
        }
    }

    fn error(&mut self, message: &str) {
        error(message);
    }

    fn write_override(&mut self, vendor_file: &str, override_file: &str) {
        if !self.is_enabled(Verbosity::Normal) {
            return;
        }
        if colors_enabled() {
            eprintln!(
                "Overrode file: {} => {}",
                vendor_file.green(),
                override_file.green()
            );
        } else {
            eprintln!("Overrode file: {vendor_file} => {override_file}");
        }
    }
}
