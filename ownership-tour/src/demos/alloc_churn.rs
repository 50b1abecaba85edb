//! Allocation churn: re-seat a shared pointer in a tight loop and time it.

use std::hint::black_box;
use std::sync::Arc;

use elapsed_timer::{Clock, ElapsedTimer, SystemClock};

use super::{DemoReport, DemoResult};

/// Allocations performed when no `--iterations` is given.
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

pub fn alloc_churn(iterations: u64) -> DemoResult<DemoReport> {
    alloc_churn_with_clock(iterations, SystemClock)
}

/// Each iteration allocates a fresh `Arc` and frees the previous one.
///
/// # Errors
///
/// Returns [`DemoError::Timer`](super::DemoError::Timer) if the timer cannot
/// produce a measurement.
pub fn alloc_churn_with_clock<C: Clock>(iterations: u64, clock: C) -> DemoResult<DemoReport> {
    let mut report = DemoReport::new("alloc-churn");
    let mut timer = ElapsedTimer::with_clock(clock);
    let mut slot: Option<Arc<u64>> = None;

    timer.begin();
    for i in 0..iterations {
        slot = Some(Arc::new(i));
        black_box(&slot);
    }
    timer.end()?;

    let elapsed_us = timer.elapsed_micros()?;
    let elapsed_s = timer.elapsed_secs()?;
    tracing::info!(iterations, elapsed_us, last = ?slot, "allocation churn finished");

    report.push(format!("iterations={iterations}"));
    report.push(format!("elapsed_us={elapsed_us}"));
    report.push(format!("elapsed_s={elapsed_s}"));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elapsed_timer::MockClock;
    use mockall::Sequence;
    use std::time::{Duration, Instant};

    fn clock_with_span(span: Duration) -> MockClock {
        let t0 = Instant::now();
        let mut mock = MockClock::new();
        let mut seq = Sequence::new();
        mock.expect_now()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(t0);
        mock.expect_now()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(t0 + span);
        mock
    }

    #[test]
    fn reports_injected_span() {
        let report = alloc_churn_with_clock(100, clock_with_span(Duration::from_micros(2_500)))
            .unwrap();
        assert_eq!(
            report.lines,
            ["iterations=100", "elapsed_us=2500", "elapsed_s=0.0025"]
        );
    }

    #[test]
    fn zero_iterations_still_measures() {
        let report = alloc_churn_with_clock(0, clock_with_span(Duration::ZERO)).unwrap();
        assert_eq!(report.lines, ["iterations=0", "elapsed_us=0", "elapsed_s=0"]);
    }

    #[test]
    fn system_clock_run_reports_all_fields() {
        let report = alloc_churn(1_000).unwrap();
        assert_eq!(report.lines.len(), 3);
        assert_eq!(report.lines[0], "iterations=1000");
        assert!(report.lines[1].starts_with("elapsed_us="));
        assert!(report.lines[2].starts_with("elapsed_s="));
    }
}
