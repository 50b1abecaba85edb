use thiserror::Error;

/// Result type alias for timer accessors.
pub type TimerResult<T> = Result<T, TimerError>;

/// Misuse conditions reported by [`ElapsedTimer`](crate::ElapsedTimer).
///
/// Both are local ordering mistakes by the caller. Neither is fatal: call
/// [`begin`](crate::ElapsedTimer::begin) and measure again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimerError {
    /// `end()` was called before any `begin()`.
    #[error("timer was stopped before it was started")]
    NotStarted,

    /// A duration accessor was called before a measurement completed.
    #[error("no completed measurement is available")]
    NotAvailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_distinct() {
        let not_started = TimerError::NotStarted.to_string();
        let not_available = TimerError::NotAvailable.to_string();
        assert!(not_started.contains("started"));
        assert!(not_available.contains("available"));
        assert_ne!(not_started, not_available);
    }
}
