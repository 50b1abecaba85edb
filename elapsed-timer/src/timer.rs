use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::error::{TimerError, TimerResult};

const MICROS_PER_SEC: f64 = 1_000_000.0;

/// Where a timer is in its `begin`/`end` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Never started.
    Idle,
    /// Started, no completed measurement yet.
    Running,
    /// A measurement is available.
    Stopped,
}

/// Measures the span between a [`begin`](Self::begin) and an
/// [`end`](Self::end) call with microsecond resolution.
///
/// Both captures are optional until they happen, so "never measured" and
/// "measured zero" stay distinguishable. Calling `begin` again re-arms the
/// timer and discards the previous measurement.
///
/// The timer holds no internal synchronization. Share one instance across
/// threads only behind your own lock.
///
/// # Examples
///
/// ```
/// # use elapsed_timer::{ElapsedTimer, TimerError};
/// # fn main() -> Result<(), TimerError> {
/// let mut timer = ElapsedTimer::new();
/// assert_eq!(timer.elapsed_micros(), Err(TimerError::NotAvailable));
///
/// timer.begin();
/// // ... work being measured ...
/// timer.end()?;
///
/// let micros = timer.elapsed_micros()?;
/// assert_eq!(timer.elapsed_secs()?, micros as f64 / 1_000_000.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ElapsedTimer<C = SystemClock> {
    clock: C,
    start: Option<Instant>,
    duration: Option<Duration>,
}

impl ElapsedTimer<SystemClock> {
    /// Create an idle timer reading the host's monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock + Default> Default for ElapsedTimer<C> {
    fn default() -> Self {
        Self::with_clock(C::default())
    }
}

impl<C: Clock> ElapsedTimer<C> {
    /// Create an idle timer reading instants from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            start: None,
            duration: None,
        }
    }

    /// Capture the start instant.
    ///
    /// Overwrites any earlier start and discards any completed measurement.
    pub fn begin(&mut self) {
        self.start = Some(self.clock.now());
        self.duration = None;
        tracing::trace!("timer started");
    }

    /// Capture the stop instant and store the span since the last `begin`.
    ///
    /// A stop instant earlier than the start instant (clock anomaly) yields
    /// a zero span.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotStarted`] if `begin` was never called. The
    /// timer is left without a measurement.
    pub fn end(&mut self) -> TimerResult<Duration> {
        let now = self.clock.now();
        let start = self.start.ok_or(TimerError::NotStarted)?;

        let elapsed = now.saturating_duration_since(start);
        self.duration = Some(elapsed);
        tracing::trace!(?elapsed, "timer stopped");
        Ok(elapsed)
    }

    /// Current position in the `begin`/`end` cycle.
    pub fn state(&self) -> TimerState {
        match (self.start, self.duration) {
            (None, _) => TimerState::Idle,
            (Some(_), None) => TimerState::Running,
            (Some(_), Some(_)) => TimerState::Stopped,
        }
    }

    /// The completed measurement, if any.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Elapsed time in whole microseconds, truncated.
    ///
    /// Saturates at `u64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotAvailable`] until `end` has succeeded since
    /// the last `begin`.
    pub fn elapsed_micros(&self) -> TimerResult<u64> {
        let duration = self.duration.ok_or(TimerError::NotAvailable)?;
        Ok(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX))
    }

    /// Elapsed time in seconds, derived from [`elapsed_micros`](Self::elapsed_micros).
    ///
    /// # Errors
    ///
    /// Propagates [`TimerError::NotAvailable`]; an unmeasured timer never
    /// reports `0.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed_secs(&self) -> TimerResult<f64> {
        self.elapsed_micros()
            .map(|micros| micros as f64 / MICROS_PER_SEC)
    }

    /// The clock this timer reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
