//! # elapsed-timer
//!
//! Start/stop elapsed-time measurement over a monotonic clock.
//!
//! ## Features
//! - `test-support`: Enables `MockClock` via `mockall`

mod clock;
mod error;
mod timer;

// Stable public API
pub use clock::{Clock, SystemClock};
pub use error::{TimerError, TimerResult};
pub use timer::{ElapsedTimer, TimerState};

// Test support re-export
#[cfg(feature = "test-support")]
pub use clock::MockClock;
