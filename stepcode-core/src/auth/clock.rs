//! Time-step clock
//!
//! Converts UTC wall-clock time into the RFC 6238 counter
//! `floor(unix_seconds / 30)`.

use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Length of one TOTP time step in seconds
pub const TIME_STEP_SECONDS: u64 = 30;

/// Source of the current UTC time
pub trait Clock {
    /// Seconds since the Unix epoch, UTC
    fn now_unix_seconds(&self) -> u64;
}

/// The system wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_seconds(&self) -> u64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs(),
            Err(e) => {
                warn!("System clock is before the Unix epoch: {}", e);
                0
            }
        }
    }
}

/// A clock pinned to one instant, for replaying or simulating time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl FixedClock {
    /// A clock reading the first second of the given counter's step
    ///
    /// Counters past the representable range pin the clock to `u64::MAX`.
    pub fn at_counter(counter: u64) -> Self {
        Self(counter.saturating_mul(TIME_STEP_SECONDS))
    }
}

impl Clock for FixedClock {
    fn now_unix_seconds(&self) -> u64 {
        self.0
    }
}

/// Counter for a given unix timestamp
pub fn counter_at(unix_seconds: u64) -> u64 {
    unix_seconds / TIME_STEP_SECONDS
}

/// Counter for the clock's current reading
pub fn current_counter<C: Clock + ?Sized>(clock: &C) -> u64 {
    counter_at(clock.now_unix_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_floors_within_step() {
        assert_eq!(counter_at(0), 0);
        assert_eq!(counter_at(29), 0);
        assert_eq!(counter_at(30), 1);
        assert_eq!(counter_at(59), 1);
        // RFC 6238 Appendix B: T = 59 -> 0x1, T = 1111111109 -> 0x23523EC
        assert_eq!(counter_at(1_111_111_109), 0x023523EC);
    }

    #[test]
    fn test_fixed_clock_at_counter() {
        let clock = FixedClock::at_counter(42);
        assert_eq!(current_counter(&clock), 42);
        assert_eq!(current_counter(&FixedClock(42 * 30 + 29)), 42);
    }

    #[test]
    fn test_fixed_clock_at_huge_counter_saturates() {
        let last = u64::MAX / TIME_STEP_SECONDS;
        assert_eq!(current_counter(&FixedClock::at_counter(last)), last);

        let clock = FixedClock::at_counter(last + 1);
        assert_eq!(clock, FixedClock(u64::MAX));
        assert_eq!(current_counter(&clock), last);

        assert_eq!(FixedClock::at_counter(u64::MAX), FixedClock(u64::MAX));
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01 00:00:00 UTC
        assert!(SystemClock.now_unix_seconds() > 1_577_836_800);
        assert!(current_counter(&SystemClock) > 1_577_836_800 / TIME_STEP_SECONDS);
    }
}
