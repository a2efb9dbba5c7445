//! Debounced actions: run once the calls stop.
//!
//! A [`Debounced`] wraps an action and a delay. Every [`call`](Debounced::call)
//! cancels the invocation scheduled by the previous call and schedules a new
//! one, so the action only runs after the call stream has been quiet for the
//! whole delay, and it runs with the arguments of the last call.
//!
//! Timers run on the Tokio runtime that was current when the wrapper was
//! built. `call` never blocks and never fails.
//!
//! ## Examples
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//! use utilkit::debounce;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> utilkit::Result<()> {
//! let saves = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&saves);
//! let save = debounce(move |_text: String| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! }, 20)?;
//!
//! save.call("h".to_string());
//! save.call("he".to_string());
//! save.call("hello".to_string());
//!
//! tokio::time::sleep(Duration::from_millis(60)).await;
//! assert_eq!(saves.load(Ordering::SeqCst), 1);
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Action<A> = Box<dyn Fn(A) + Send + Sync>;

/// The single pending-invocation slot.
///
/// `generation` is bumped by every call, cancel, and flush; a timer only
/// fires if the generation it was scheduled with is still current.
struct Slot<A> {
    generation: u64,
    args: Option<A>,
    timer: Option<JoinHandle<()>>,
}

struct Shared<A> {
    action: Action<A>,
    slot: Mutex<Slot<A>>,
}

impl<A> Shared<A> {
    fn lock_slot(&self) -> MutexGuard<'_, Slot<A>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fire(&self, generation: u64) {
        let args = {
            let mut slot = self.lock_slot();
            if slot.generation != generation {
                return;
            }
            slot.timer = None;
            slot.args.take()
        };

        if let Some(args) = args {
            tracing::trace!(generation, "debounce: quiet period elapsed, running action");
            (self.action)(args);
        }
    }

    /// Invalidates the pending invocation and hands back its arguments.
    fn take_pending(&self) -> Option<A> {
        let mut slot = self.lock_slot();
        slot.generation = slot.generation.wrapping_add(1);
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.args.take()
    }
}

/// An action that only runs after calls to it stop for a while.
///
/// Built with [`debounce`] or [`Debounced::new`]. Dropping the wrapper
/// cancels any pending invocation.
pub struct Debounced<A> {
    shared: Arc<Shared<A>>,
    delay: Duration,
    runtime: Handle,
}

impl<A> Debounced<A>
where
    A: Send + 'static,
{
    /// Wraps `action` so it runs `delay` after the last call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RuntimeUnavailable`] when called outside a Tokio
    /// runtime. Use [`Debounced::with_handle`] to pass a runtime explicitly.
    pub fn new<F>(action: F, delay: Duration) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let runtime = Handle::try_current().map_err(Error::runtime_unavailable)?;
        Ok(Self::with_handle(action, delay, runtime))
    }

    /// Wraps `action`, scheduling its timers on `runtime`.
    pub fn with_handle<F>(action: F, delay: Duration, runtime: Handle) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Debounced {
            shared: Arc::new(Shared {
                action: Box::new(action),
                slot: Mutex::new(Slot {
                    generation: 0,
                    args: None,
                    timer: None,
                }),
            }),
            delay,
            runtime,
        }
    }

    /// Schedules the action with `args`, replacing any pending invocation.
    ///
    /// If the wrapper's runtime has shut down, the call is dropped and
    /// nothing stays pending.
    pub fn call(&self, args: A) {
        let mut slot = self.shared.lock_slot();
        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;

        if let Some(timer) = slot.timer.take() {
            timer.abort();
            tracing::trace!(generation, "debounce: replaced pending invocation");
        }
        slot.args = Some(args);

        let shared: Weak<Shared<A>> = Arc::downgrade(&self.shared);
        let delay = self.delay;
        let timer = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = shared.upgrade() {
                shared.fire(generation);
            }
        });

        // The timer cannot reach `fire` while the slot is locked, so a finished
        // handle here means the runtime shut down and dropped the task.
        if timer.is_finished() {
            tracing::warn!(generation, "debounce: runtime is shut down, call dropped");
            slot.args = None;
            return;
        }
        slot.timer = Some(timer);
    }

    /// Runs the pending invocation now, if there is one.
    ///
    /// Returns `true` if the action ran.
    pub fn flush(&self) -> bool {
        match self.shared.take_pending() {
            Some(args) => {
                tracing::debug!("debounce: flushing pending invocation");
                (self.shared.action)(args);
                true
            }
            None => false,
        }
    }
}

impl<A> Debounced<A> {
    /// Drops the pending invocation without running it.
    ///
    /// Returns `true` if something was pending. Cancelling when nothing is
    /// pending, or after the timer already fired, does nothing.
    pub fn cancel(&self) -> bool {
        let cancelled = self.shared.take_pending().is_some();
        if cancelled {
            tracing::debug!("debounce: pending invocation cancelled");
        }
        cancelled
    }

    /// Returns `true` while an invocation is scheduled and has not fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.shared.lock_slot().args.is_some()
    }

    /// The quiet period this wrapper waits for.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Drop for Debounced<A> {
    fn drop(&mut self) {
        self.shared.take_pending();
    }
}

impl<A> fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Wraps `action` so it runs `delay_ms` milliseconds after the last call.
///
/// Multiple arguments are passed as a tuple.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for a negative delay and
/// [`Error::RuntimeUnavailable`] outside a Tokio runtime.
///
/// # Examples
///
/// ```rust
/// use utilkit::{debounce, Error};
///
/// // No runtime here, so construction fails.
/// let result = debounce(|(_x, _y): (i32, i32)| {}, 100);
/// assert!(matches!(result, Err(Error::RuntimeUnavailable(_))));
///
/// let result = debounce(|_: ()| {}, -5);
/// assert!(matches!(result, Err(Error::InvalidArgument(_))));
/// ```
pub fn debounce<A, F>(action: F, delay_ms: i64) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let delay_ms = u64::try_from(delay_ms)
        .map_err(|_| Error::invalid_argument(format!("delay must not be negative, got {delay_ms}ms")))?;
    Debounced::new(action, Duration::from_millis(delay_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value| sink.lock().unwrap().push(value))
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once_with_last_args() {
        let (seen, action) = recorder();
        let debounced = Debounced::new(action, Duration::from_millis(100)).unwrap();

        for value in 1..=5 {
            debounced.call(value);
            sleep_ms(50).await;
        }
        assert!(seen.lock().unwrap().is_empty());

        sleep_ms(60).await;
        assert_eq!(*seen.lock().unwrap(), vec![5]);
        assert!(!debounced.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_quiet_periods_fire_separately() {
        let (seen, action) = recorder();
        let debounced = Debounced::new(action, Duration::from_millis(30)).unwrap();

        debounced.call(1);
        sleep_ms(40).await;
        debounced.call(2);
        debounced.call(3);
        sleep_ms(40).await;

        assert_eq!(*seen.lock().unwrap(), vec![1, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_is_deferred() {
        let (seen, action) = recorder();
        let debounced = Debounced::new(action, Duration::ZERO).unwrap();

        debounced.call(7);
        assert!(seen.lock().unwrap().is_empty());

        sleep_ms(1).await;
        assert_eq!(*seen.lock().unwrap(), vec![7]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let (seen, action) = recorder();
        let debounced = Debounced::new(action, Duration::from_millis(10)).unwrap();

        debounced.call(1);
        assert!(debounced.is_pending());
        assert!(debounced.cancel());
        assert!(!debounced.cancel());

        sleep_ms(50).await;
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_fire_is_noop() {
        let (seen, action) = recorder();
        let debounced = Debounced::new(action, Duration::from_millis(10)).unwrap();

        debounced.call(1);
        sleep_ms(20).await;
        assert!(!debounced.cancel());
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_runs_immediately_once() {
        let (seen, action) = recorder();
        let debounced = Debounced::new(action, Duration::from_millis(100)).unwrap();

        debounced.call(4);
        assert!(debounced.flush());
        assert_eq!(*seen.lock().unwrap(), vec![4]);
        assert!(!debounced.flush());

        sleep_ms(200).await;
        assert_eq!(*seen.lock().unwrap(), vec![4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let debounced = Debounced::new(
            move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(10),
        )
        .unwrap();

        debounced.call(());
        drop(debounced);

        sleep_ms(50).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_requires_runtime() {
        let err = Debounced::new(|_: ()| {}, Duration::from_millis(1)).unwrap_err();
        assert!(matches!(err, Error::RuntimeUnavailable(_)));
    }

    #[test]
    fn test_with_handle_outside_runtime_context() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let (seen, action) = recorder();
        let debounced = Debounced::with_handle(action, Duration::from_millis(5), runtime.handle().clone());

        debounced.call(9);
        runtime.block_on(sleep_ms(20));

        assert_eq!(*seen.lock().unwrap(), vec![9]);
    }

    #[test]
    fn test_call_after_runtime_shutdown_is_dropped() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let handle = runtime.handle().clone();
        drop(runtime);

        let (seen, action) = recorder();
        let debounced = Debounced::with_handle(action, Duration::from_millis(5), handle);
        debounced.call(1);

        assert!(!debounced.is_pending());
        assert!(!debounced.flush());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_fire_once() {
        let (seen, action) = recorder();
        let debounced = Arc::new(Debounced::new(action, Duration::from_millis(500)).unwrap());

        let tasks: Vec<_> = (0..8u32)
            .map(|task| {
                let debounced = Arc::clone(&debounced);
                tokio::spawn(async move {
                    for i in 0..50 {
                        debounced.call(task * 100 + i);
                        tokio::task::yield_now().await;
                    }
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        sleep_ms(1000).await;
        let fired = seen.lock().unwrap().clone();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0] % 100, 49);
        assert!(!debounced.is_pending());
    }

    #[tokio::test]
    async fn test_negative_delay_rejected() {
        let err = debounce(|_: ()| {}, -1).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
