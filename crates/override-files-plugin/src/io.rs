//! Line-oriented output to the user.

use std::fmt;

/// Output verbosity, ordered from least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Default output.
    #[default]
    Normal,
    /// `-v`.
    Verbose,
    /// `-vv`.
    VeryVerbose,
    /// `-vvv`.
    Debug,
}

impl Verbosity {
    /// Verbosity selected by `-v` flags and `-q`.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::VeryVerbose,
            _ => Self::Debug,
        }
    }
}

/// Where a plugin reports to.
///
/// Implementations decide how lines look; callers only pick the tier.
pub trait Io {
    /// Current verbosity.
    fn verbosity(&self) -> Verbosity;

    /// Write a line shown at `verbosity` and above.
    fn write(&mut self, verbosity: Verbosity, message: &str);

    /// Write a warning.
    fn warning(&mut self, message: &str);

    /// Write an error.
    fn error(&mut self, message: &str);

    /// Report one applied override.
    fn write_override(&mut self, vendor_file: &str, override_file: &str) {
        self.write(
            Verbosity::Normal,
            &format!("Overrode file: {vendor_file} => {override_file}"),
        );
    }

    /// Check if `verbosity` lines are shown.
    fn is_enabled(&self, verbosity: Verbosity) -> bool {
        self.verbosity() >= verbosity
    }
}

/// Kind of a buffered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Regular output.
    Output,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Output => "output",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// [`Io`] that keeps every shown line in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferIo {
    verbosity: Verbosity,
    lines: Vec<(LineKind, String)>,
}

impl BufferIo {
    /// Create a buffer at `verbosity`.
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
        }
    }

    /// All lines in order.
    #[must_use]
    pub fn lines(&self) -> &[(LineKind, String)] {
        &self.lines
    }

    /// Lines of one kind.
    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, line)| line.as_str())
    }

    /// Check whether any line of `kind` contains `needle`.
    #[must_use]
    pub fn contains(&self, kind: LineKind, needle: &str) -> bool {
        self.lines_of(kind).any(|line| line.contains(needle))
    }
}

impl Io for BufferIo {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn write(&mut self, verbosity: Verbosity, message: &str) {
        if self.is_enabled(verbosity) {
            self.lines.push((LineKind::Output, message.to_string()));
        }
    }

    fn warning(&mut self, message: &str) {
        if self.is_enabled(Verbosity::Normal) {
            self.lines.push((LineKind::Warning, message.to_string()));
        }
    }

    fn error(&mut self, message: &str) {
        self.lines.push((LineKind::Error, message.to_string()));
    }
}
