//! The individual ownership demos.
//!
//! Every demo returns a [`DemoReport`] instead of printing, so the binary
//! owns all console output and tests can assert on the lines.

use std::fmt;

use clap::ValueEnum;
use elapsed_timer::TimerError;
use thiserror::Error;

mod alloc_churn;
mod handle;
mod intrusive;
mod scoped;
mod shared;

pub use alloc_churn::DEFAULT_ITERATIONS;

/// Result type alias for demo runs.
pub type DemoResult<T> = Result<T, DemoError>;

/// Failures a demo can surface to the binary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DemoError {
    /// The churn timer could not produce a measurement.
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// An OS resource could not be acquired.
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Lines produced by one demo, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub name: &'static str,
    pub lines: Vec<String>,
}

impl DemoReport {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            lines: Vec::new(),
        }
    }

    /// Append one line.
    pub fn push(&mut self, line: impl ToString) {
        self.lines.push(line.to_string());
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Knobs shared by all demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Number of allocations performed by [`Demo::AllocChurn`].
    pub iterations: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Selectable demos, in the order they run by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Demo {
    /// Single-owner box, re-seated and cleared.
    ScopedBox,
    /// Single-owner fixed-length slice.
    ScopedSlice,
    /// Atomically reference-counted pointer shared by two owners.
    Shared,
    /// Shared value and shared slice constructed in one step.
    MakeShared,
    /// OS resource closed by a custom closer on scope exit.
    ReleaseGuard,
    /// Externally-managed object carrying its own reference count.
    Intrusive,
    /// Re-seat a shared pointer many times and time it.
    AllocChurn,
}

impl Demo {
    pub const ALL: [Self; 7] = [
        Self::ScopedBox,
        Self::ScopedSlice,
        Self::Shared,
        Self::MakeShared,
        Self::ReleaseGuard,
        Self::Intrusive,
        Self::AllocChurn,
    ];

    /// The name used on the command line and in report headers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ScopedBox => "scoped-box",
            Self::ScopedSlice => "scoped-slice",
            Self::Shared => "shared",
            Self::MakeShared => "make-shared",
            Self::ReleaseGuard => "release-guard",
            Self::Intrusive => "intrusive",
            Self::AllocChurn => "alloc-churn",
        }
    }

    pub fn run(self, settings: &Settings) -> DemoResult<DemoReport> {
        tracing::debug!(demo = self.name(), "running demo");
        let report = match self {
            Self::ScopedBox => scoped::scoped_box(),
            Self::ScopedSlice => scoped::scoped_slice(),
            Self::Shared => shared::shared(),
            Self::MakeShared => shared::make_shared(),
            Self::ReleaseGuard => handle::release_guard()?,
            Self::Intrusive => intrusive::intrusive(),
            Self::AllocChurn => alloc_churn::alloc_churn(settings.iterations)?,
        };
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_command_line_values() {
        for demo in Demo::ALL {
            let value = demo.to_possible_value().unwrap();
            assert_eq!(value.get_name(), demo.name());
        }
    }

    #[test]
    fn every_demo_runs_and_reports_under_its_name() {
        let settings = Settings { iterations: 16 };
        for demo in Demo::ALL {
            let report = demo.run(&settings).unwrap();
            assert_eq!(report.name, demo.name());
            assert!(!report.lines.is_empty(), "{} produced no lines", demo.name());
        }
    }

    #[test]
    fn report_display_indents_lines() {
        let mut report = DemoReport::new("example");
        report.push(1);
        report.push(false);
        assert_eq!(report.to_string(), "example\n  1\n  false\n");
    }

    #[test]
    fn timer_error_converts() {
        let err: DemoError = TimerError::NotAvailable.into();
        assert!(matches!(err, DemoError::Timer(TimerError::NotAvailable)));
        assert!(err.to_string().contains("measurement"));
    }
}
