//! Injectable time source.
//!
//! [`Throttled`](crate::Throttled) and [`time_ago_since`](crate::time_ago_since)
//! read the time through [`Clock`] so tests can drive time by hand with
//! [`ManualClock`] instead of sleeping.

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// A source of both monotonic and wall-clock time.
pub trait Clock: Send + Sync {
    /// Monotonic time, used for measuring intervals.
    fn now(&self) -> Instant;

    /// Wall-clock time, used for calendar arithmetic.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The real clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug)]
struct ManualState {
    instant: Instant,
    utc: DateTime<Utc>,
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the code under test.
///
/// # Examples
///
/// ```rust
/// use utilkit::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
///
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    state: Arc<Mutex<ManualState>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Creates a manual clock frozen at the current wall time.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Creates a manual clock frozen at `utc`.
    #[must_use]
    pub fn starting_at(utc: DateTime<Utc>) -> Self {
        ManualClock {
            state: Arc::new(Mutex::new(ManualState {
                instant: Instant::now(),
                utc,
            })),
        }
    }

    /// Moves both monotonic and wall time forward.
    pub fn advance(&self, by: Duration) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.instant += by;
        if let Some(utc) = chrono::Duration::from_std(by)
            .ok()
            .and_then(|by| state.utc.checked_add_signed(by))
        {
            state.utc = utc;
        }
    }

    /// Sets wall time without touching monotonic time.
    pub fn set_utc(&self, utc: DateTime<Utc>) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.utc = utc;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .instant
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).utc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_is_frozen() {
        let clock = ManualClock::new();
        let first = clock.now();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.now(), first);
    }

    #[test]
    fn test_clones_share_time() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let clock = ManualClock::starting_at(start);
        let other = clock.clone();

        other.advance(Duration::from_secs(90));

        assert_eq!(
            clock.now_utc(),
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 31, 30).unwrap()
        );
    }
}
