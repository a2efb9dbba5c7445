//! Throttled actions: run at most once per interval.
//!
//! A [`Throttled`] runs its action immediately when called, unless the action
//! already ran less than one interval ago, in which case the call is dropped.
//! Dropped calls are not queued and there is no trailing invocation.
//!
//! ## Examples
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use utilkit::throttle;
//!
//! let hits = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&hits);
//! let on_scroll = throttle(move |_offset: f64| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! }, 1_000)?;
//!
//! for offset in 0..100 {
//!     on_scroll.call(offset as f64);
//! }
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//! # Ok::<(), utilkit::Error>(())
//! ```

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// An action that runs at most once per interval.
///
/// The clock defaults to [`SystemClock`]; tests can pass a
/// [`ManualClock`](crate::ManualClock) through [`Throttled::with_clock`].
pub struct Throttled<A, C = SystemClock> {
    action: Box<dyn Fn(A) + Send + Sync>,
    interval: Duration,
    clock: C,
    last_run: Mutex<Option<Instant>>,
}

impl<A> Throttled<A, SystemClock> {
    /// Wraps `action` so it runs at most once per `interval`.
    pub fn new<F>(action: F, interval: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_clock(action, interval, SystemClock)
    }
}

impl<A, C: Clock> Throttled<A, C> {
    /// Wraps `action`, measuring intervals with `clock`.
    pub fn with_clock<F>(action: F, interval: Duration, clock: C) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Throttled {
            action: Box::new(action),
            interval,
            clock,
            last_run: Mutex::new(None),
        }
    }

    /// Runs the action with `args` unless it ran less than one interval ago.
    ///
    /// Returns `true` if the action ran. Ignoring the result is fine.
    pub fn call(&self, args: A) -> bool {
        let now = self.clock.now();
        {
            let mut last_run = self.last_run.lock().unwrap_or_else(PoisonError::into_inner);
            let ready = match *last_run {
                None => true,
                Some(last) => now.saturating_duration_since(last) >= self.interval,
            };
            if !ready {
                tracing::trace!(interval = ?self.interval, "throttle: call dropped during cooldown");
                return false;
            }
            *last_run = Some(now);
        }

        (self.action)(args);
        true
    }

    /// Forgets the last run, so the next call runs immediately.
    pub fn reset(&self) {
        *self.last_run.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The minimum spacing between two runs.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<A, C> fmt::Debug for Throttled<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

/// Wraps `action` so it runs at most once every `interval_ms` milliseconds.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for a negative interval.
pub fn throttle<A, F>(action: F, interval_ms: i64) -> Result<Throttled<A>>
where
    F: Fn(A) + Send + Sync + 'static,
{
    let interval_ms = u64::try_from(interval_ms).map_err(|_| {
        Error::invalid_argument(format!("interval must not be negative, got {interval_ms}ms"))
    })?;
    Ok(Throttled::new(action, Duration::from_millis(interval_ms)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::sync::Arc;

    fn recording(
        interval: Duration,
        clock: ManualClock,
    ) -> (Arc<Mutex<Vec<u32>>>, Throttled<u32, ManualClock>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let throttled = Throttled::with_clock(
            move |value| sink.lock().unwrap().push(value),
            interval,
            clock,
        );
        (seen, throttled)
    }

    #[test]
    fn test_first_call_runs() {
        let (seen, throttled) = recording(Duration::from_secs(1), ManualClock::new());
        assert!(throttled.call(1));
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_calls_inside_window_are_dropped() {
        let clock = ManualClock::new();
        let (seen, throttled) = recording(Duration::from_millis(100), clock.clone());

        assert!(throttled.call(1));
        clock.advance(Duration::from_millis(40));
        assert!(!throttled.call(2));
        clock.advance(Duration::from_millis(59));
        assert!(!throttled.call(3));

        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_exact_interval_runs_again() {
        let clock = ManualClock::new();
        let (seen, throttled) = recording(Duration::from_millis(100), clock.clone());

        throttled.call(1);
        clock.advance(Duration::from_millis(100));
        throttled.call(2);

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_window_restarts_from_last_run_not_last_call() {
        let clock = ManualClock::new();
        let (seen, throttled) = recording(Duration::from_millis(100), clock.clone());

        throttled.call(1);
        clock.advance(Duration::from_millis(90));
        throttled.call(2);
        clock.advance(Duration::from_millis(10));
        throttled.call(3);

        assert_eq!(*seen.lock().unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_concurrent_callers_run_once_per_window() {
        let clock = ManualClock::new();
        let (seen, throttled) = recording(Duration::from_millis(100), clock.clone());
        let throttled = Arc::new(throttled);

        let handles: Vec<_> = (0..16u32)
            .map(|thread| {
                let throttled = Arc::clone(&throttled);
                std::thread::spawn(move || {
                    (0..1000u32)
                        .filter(|i| throttled.call(thread * 1000 + i))
                        .count()
                })
            })
            .collect();
        let ran: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(ran, 1);
        assert_eq!(seen.lock().unwrap().len(), 1);

        clock.advance(Duration::from_millis(100));
        assert!(throttled.call(0));
    }

    #[test]
    fn test_zero_interval_never_drops() {
        let (seen, throttled) = recording(Duration::ZERO, ManualClock::new());
        for value in 0..5 {
            assert!(throttled.call(value));
        }
        assert_eq!(seen.lock().unwrap().len(), 5);
    }

    #[test]
    fn test_reset() {
        let (seen, throttled) = recording(Duration::from_secs(60), ManualClock::new());
        throttled.call(1);
        throttled.reset();
        throttled.call(2);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_negative_interval_rejected() {
        let err = throttle(|_: ()| {}, -10).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
