//! Trailing-edge debouncing for values produced by bursts of input.
//!
//! A [`Debouncer`] holds at most one pending value. Scheduling a new value
//! replaces the pending one and re-arms the quiet window; the value is handed
//! out by [`Debouncer::poll`] only once the window has fully elapsed. The
//! debouncer does not run timers itself: the runtime polls it on every tick.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to; used to drive debouncers deterministically.
#[derive(Debug)]
pub struct ManualClock {
    /// Current reading.
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Clock frozen at the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The single outstanding value and when it becomes due.
struct Pending<T> {
    /// Last scheduled value.
    value: T,
    /// Instant at which the quiet window ends.
    due: Instant,
}

/// Single-slot, cancelable, trailing-edge debouncer.
pub struct Debouncer<T> {
    /// Time source.
    clock: Arc<dyn Clock>,
    /// Outstanding value, if any.
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Debouncer driven by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Debouncer driven by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            pending: None,
        }
    }

    /// What: Schedule `value` to become due after `delay` of quiet.
    ///
    /// Inputs:
    /// - `value`: Newest value; replaces any pending one
    /// - `delay`: Quiet window measured from now
    ///
    /// Output:
    /// - None; the previous pending value (if any) is dropped.
    pub fn schedule(&mut self, value: T, delay: Duration) {
        let due = self.clock.now() + delay;
        self.pending = Some(Pending { value, due });
    }

    /// Drop the pending value without delivering it. Returns it, if any.
    pub fn cancel_pending(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// What: Take the pending value if its quiet window has elapsed.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - `Some(value)` exactly once per burst, after the window; `None` before
    ///   that or when nothing is pending.
    pub fn poll(&mut self) -> Option<T> {
        let now = self.clock.now();
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            return self.cancel_pending();
        }
        None
    }

    /// Take the pending value immediately, ignoring the window.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel_pending()
    }

    /// `true` while a value is waiting.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The waiting value, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    /// Time left until the pending value becomes due; zero once overdue.
    #[must_use]
    pub fn time_until_due(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("pending", &self.pending())
            .field("time_until_due", &self.time_until_due())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    fn manual() -> (Arc<ManualClock>, Debouncer<String>) {
        let clock = Arc::new(ManualClock::new());
        let d = Debouncer::with_clock(clock.clone());
        (clock, d)
    }

    #[test]
    /// What: A burst collapses into the last value after the full quiet window
    ///
    /// - Input: Three schedules 100ms apart, then polls around the window edge
    /// - Output: Nothing before 300ms after the last schedule; last value exactly once
    fn burst_collapses_to_last_value() {
        let (clock, mut d) = manual();
        d.schedule("m".to_string(), WINDOW);
        clock.advance(Duration::from_millis(100));
        d.schedule("me".to_string(), WINDOW);
        clock.advance(Duration::from_millis(100));
        d.schedule("mel".to_string(), WINDOW);

        clock.advance(Duration::from_millis(299));
        assert_eq!(d.poll(), None);
        assert!(d.is_pending());

        clock.advance(Duration::from_millis(1));
        assert_eq!(d.poll().as_deref(), Some("mel"));
        assert_eq!(d.poll(), None);
        assert!(!d.is_pending());
    }

    #[test]
    /// What: Rescheduling re-arms the window
    ///
    /// - Input: Schedule, wait 250ms, schedule again, wait 250ms
    /// - Output: Not yet due; due after another 50ms
    fn reschedule_rearms_window() {
        let (clock, mut d) = manual();
        d.schedule("a".to_string(), WINDOW);
        clock.advance(Duration::from_millis(250));
        d.schedule("ab".to_string(), WINDOW);
        clock.advance(Duration::from_millis(250));
        assert_eq!(d.poll(), None);
        assert_eq!(d.time_until_due(), Some(Duration::from_millis(50)));
        clock.advance(Duration::from_millis(50));
        assert_eq!(d.poll().as_deref(), Some("ab"));
    }

    #[test]
    /// What: Cancel and flush
    ///
    /// - Input: Cancel a pending value; flush another before its window
    /// - Output: Cancelled value never delivered; flush delivers immediately
    fn cancel_and_flush() {
        let (clock, mut d) = manual();
        d.schedule("x".to_string(), WINDOW);
        assert_eq!(d.cancel_pending().as_deref(), Some("x"));
        clock.advance(WINDOW);
        assert_eq!(d.poll(), None);

        d.schedule("y".to_string(), WINDOW);
        assert_eq!(d.pending().map(String::as_str), Some("y"));
        assert_eq!(d.flush().as_deref(), Some("y"));
        assert!(!d.is_pending());
        assert_eq!(d.time_until_due(), None);
    }
}
