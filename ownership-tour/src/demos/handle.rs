//! An OS file handle released by a custom closer on scope exit.

use std::cell::Cell;
use std::fs::File;

use super::{DemoError, DemoReport, DemoResult};
use crate::release_guard::ReleaseGuard;

/// Open the running executable, then let a [`ReleaseGuard`] close it.
///
/// # Errors
///
/// Returns [`DemoError::Io`] if the executable path cannot be resolved or
/// opened.
pub fn release_guard() -> DemoResult<DemoReport> {
    let mut report = DemoReport::new("release-guard");

    let path = std::env::current_exe().map_err(|source| DemoError::Io {
        context: "locating the running executable",
        source,
    })?;
    let closed = Cell::new(false);

    {
        let file = File::open(&path).map_err(|source| DemoError::Io {
            context: "opening the running executable",
            source,
        })?;
        let guard = ReleaseGuard::new(file, |file| {
            tracing::debug!(path = %path.display(), "closing handle");
            drop(file);
            closed.set(true);
        });

        let len = guard
            .metadata()
            .map_err(|source| DemoError::Io {
                context: "reading executable metadata",
                source,
            })?
            .len();
        tracing::debug!(path = %path.display(), len, "handle opened");
        report.push("opened");
    }

    report.push(format!("closed={}", closed.get()));
    Ok(report)
}
