//! Elapsed-time display driven by a periodic tick.
//!
//! The timer never owns the session start time. It reads it from a watch
//! channel published by the game on every tick, and publishes the formatted
//! display through a second watch channel that UI code can subscribe to.
//! Between ticks the display may lag the true elapsed time by up to one
//! interval.

mod display;
pub mod error;

pub use display::ElapsedDisplay;
pub use error::TimerError;

use crate::core::Clock;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Receiving end of the session start time published by the game.
pub type StartTime = watch::Receiver<Option<DateTime<Utc>>>;

/// Recompute the display from the start time. Returns `false` when there is
/// no start time yet and the update was skipped.
fn refresh_display(
    clock: &dyn Clock,
    start_at: &StartTime,
    display: &watch::Sender<ElapsedDisplay>,
) -> bool {
    let start = *start_at.borrow();
    let Some(start) = start else {
        return false;
    };
    let next = ElapsedDisplay::between(start, clock.now());
    display.send_if_modified(|current| {
        if *current == next {
            return false;
        }
        *current = next;
        true
    });
    true
}

struct Ticker {
    clock: Arc<dyn Clock>,
    start_at: StartTime,
    display: Arc<watch::Sender<ElapsedDisplay>>,
    period: Duration,
}

impl Ticker {
    async fn run(self) {
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            refresh_display(self.clock.as_ref(), &self.start_at, &self.display);
        }
    }
}

/// `MM:SS` display of the time since the session started.
pub struct Timer {
    clock: Arc<dyn Clock>,
    start_at: StartTime,
    display: Arc<watch::Sender<ElapsedDisplay>>,
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Timer {
    pub fn new(start_at: StartTime, clock: Arc<dyn Clock>, period: Duration) -> Self {
        let (display, _) = watch::channel(ElapsedDisplay::default());
        Self {
            clock,
            start_at,
            display: Arc::new(display),
            period,
            handle: None,
        }
    }

    /// Current display formatted as `"MM:SS"`.
    pub fn timer(&self) -> String {
        self.display.borrow().to_string()
    }

    pub fn current_minutes(&self) -> String {
        self.display.borrow().minutes.clone()
    }

    pub fn current_seconds(&self) -> String {
        self.display.borrow().seconds.clone()
    }

    pub fn display(&self) -> ElapsedDisplay {
        self.display.borrow().clone()
    }

    /// Watch every display change.
    pub fn subscribe(&self) -> watch::Receiver<ElapsedDisplay> {
        self.display.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Fails unless called from within a Tokio runtime the tick can run on.
    pub fn ensure_runtime() -> Result<Handle, TimerError> {
        Handle::try_current().map_err(|_| TimerError::NoRuntime)
    }

    /// Start ticking on the current Tokio runtime. No-op if already running.
    pub fn start_timer(&mut self) -> Result<(), TimerError> {
        if self.handle.is_some() {
            return Ok(());
        }
        let runtime = Self::ensure_runtime()?;
        let ticker = Ticker {
            clock: Arc::clone(&self.clock),
            start_at: self.start_at.clone(),
            display: Arc::clone(&self.display),
            period: self.period,
        };
        self.handle = Some(runtime.spawn(ticker.run()));
        log::debug!("Timer started ({:?} interval)", self.period);
        Ok(())
    }

    /// Cancel the tick. No-op if not running.
    pub fn stop_timer(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("Timer stopped at {}", self.timer());
        }
    }

    /// Show `"00:00"` and stop ticking.
    pub fn reset_timer(&mut self) {
        self.display.send_if_modified(|current| {
            if *current == ElapsedDisplay::default() {
                return false;
            }
            *current = ElapsedDisplay::default();
            true
        });
        self.stop_timer();
    }

    /// Run one tick now, independent of the schedule.
    pub fn refresh(&self) -> bool {
        refresh_display(self.clock.as_ref(), &self.start_at, &self.display)
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;

    fn timer_with_clock() -> (Timer, Arc<ManualClock>, watch::Sender<Option<DateTime<Utc>>>) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let (start_tx, start_rx) = watch::channel(None);
        let timer = Timer::new(start_rx, clock.clone(), Duration::from_secs(1));
        (timer, clock, start_tx)
    }

    #[test]
    fn refresh_skips_without_start_time() {
        let (timer, clock, _start) = timer_with_clock();
        clock.advance(chrono::Duration::seconds(30));

        assert!(!timer.refresh());
        assert_eq!(timer.timer(), "00:00");
    }

    #[test]
    fn refresh_formats_elapsed_time() {
        let (timer, clock, start) = timer_with_clock();
        start.send_replace(Some(clock.now()));
        clock.advance(chrono::Duration::seconds(61));

        assert!(timer.refresh());
        assert_eq!(timer.current_minutes(), "01");
        assert_eq!(timer.current_seconds(), "01");
        assert_eq!(timer.timer(), "01:01");
    }

    #[test]
    fn reset_always_reads_zero() {
        let (mut timer, clock, start) = timer_with_clock();
        start.send_replace(Some(clock.now()));
        clock.advance(chrono::Duration::seconds(600));
        timer.refresh();
        assert_eq!(timer.timer(), "10:00");

        timer.reset_timer();

        assert_eq!(timer.timer(), "00:00");
        assert!(!timer.is_running());
    }

    #[test]
    fn start_outside_runtime_fails() {
        let (mut timer, _clock, _start) = timer_with_clock();
        assert_eq!(timer.period(), Duration::from_secs(1));
        assert_eq!(Timer::ensure_runtime().err(), Some(TimerError::NoRuntime));
        assert_eq!(timer.start_timer(), Err(TimerError::NoRuntime));
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_updates_display() {
        let (mut timer, clock, start) = timer_with_clock();
        start.send_replace(Some(clock.now()));
        clock.advance(chrono::Duration::seconds(65));

        let mut updates = timer.subscribe();
        timer.start_timer().unwrap();
        updates.changed().await.unwrap();

        assert_eq!(timer.timer(), "01:05");
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_idempotent_and_stop_halts_ticks() {
        let (mut timer, clock, start) = timer_with_clock();
        start.send_replace(Some(clock.now()));

        timer.start_timer().unwrap();
        timer.start_timer().unwrap();
        assert!(timer.is_running());

        timer.stop_timer();
        timer.stop_timer();
        assert!(!timer.is_running());

        clock.advance(chrono::Duration::seconds(10));
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(timer.timer(), "00:00");
    }
}
