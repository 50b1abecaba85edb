//! Clock capability consumed by [`ElapsedTimer`](crate::ElapsedTimer).
//!
//! The timer never calls `Instant::now()` directly. It asks its clock, so
//! tests can script exact instants (including a stop instant that lands
//! before the start instant).

use std::time::Instant;

#[cfg(any(test, feature = "test-support"))]
use mockall::automock;

/// Source of monotonic instants.
///
/// Instants are only meaningful relative to other instants from the same
/// clock.
#[cfg_attr(any(test, feature = "test-support"), automock)]
pub trait Clock {
    /// Read the current instant.
    fn now(&self) -> Instant;
}

/// The host's monotonic clock, via [`Instant::now`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn borrowed_clock_delegates() {
        let fixed = Instant::now();
        let mut mock = MockClock::new();
        mock.expect_now().times(1).return_const(fixed);

        fn read<C: Clock>(clock: C) -> Instant {
            clock.now()
        }
        assert_eq!(read(&mock), fixed);
    }
}
