//! Session timers - countdowns and repeating tickers on tokio tasks.
//!
//! Every timer lives in a spawned task driven by `tokio::time::interval`
//! and is stopped through a `watch` channel. The returned [`TimerHandle`]
//! owns the task: cancelling it, or dropping it, guarantees that no further
//! callback starts.
//!
//! ## Countdown contract
//!
//! | Callback | When |
//! |----------|------|
//! | `Tick { remaining: duration }` | immediately on start |
//! | `Tick { remaining: n }` | once per tick interval, `n` counting down |
//! | `Tick { remaining: 0 }` then `Completed` | at the end, exactly once |
//!
//! Callbacks must not block. The check-in flow only forwards them into a
//! channel.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Shortest wall-clock tick a timer will run at. Shorter intervals,
/// including zero, are raised to this.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Event delivered by a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: u64 },
    Completed,
}

/// Fixed-length countdown in whole seconds.
#[derive(Debug, Clone, Copy)]
pub struct CountdownTimer {
    duration_secs: u64,
    tick_interval: Duration,
}

impl CountdownTimer {
    pub fn new(duration_secs: u64) -> Self {
        Self {
            duration_secs,
            tick_interval: Duration::from_secs(1),
        }
    }

    /// Overrides the wall-clock length of one "second" (tests, demos).
    /// Clamped to [`MIN_TICK_INTERVAL`].
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval.max(MIN_TICK_INTERVAL);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Starts the countdown on the current tokio runtime.
    pub fn start<F>(&self, mut on_event: F) -> TimerHandle
    where
        F: FnMut(TimerEvent) + Send + 'static,
    {
        let mut remaining = self.duration_secs;
        spawn_ticker(self.tick_interval, move || {
            on_event(TimerEvent::Tick { remaining });
            if remaining == 0 {
                on_event(TimerEvent::Completed);
                return ControlFlow::Break(());
            }
            remaining -= 1;
            ControlFlow::Continue(())
        })
    }
}

/// Calls `on_tick` immediately and then every `interval` until cancelled.
pub fn start_repeating<F>(interval: Duration, mut on_tick: F) -> TimerHandle
where
    F: FnMut() + Send + 'static,
{
    spawn_ticker(interval, move || {
        on_tick();
        ControlFlow::Continue(())
    })
}

fn spawn_ticker<F>(interval: Duration, mut step: F) -> TimerHandle
where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    // `time::interval` panics on a zero period inside the task.
    let interval = interval.max(MIN_TICK_INTERVAL);
    let (cancel_tx, mut cancel_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                changed = cancel_rx.changed() => {
                    if changed.is_err() || *cancel_rx.borrow() {
                        return;
                    }
                }

                _ = ticker.tick() => {
                    if step().is_break() {
                        return;
                    }
                }
            }
        }
    });

    TimerHandle {
        cancel: cancel_tx,
        task,
    }
}

/// Scoped ownership of a running timer.
#[derive(Debug)]
pub struct TimerHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Stops the timer. A callback already running may finish; none starts
    /// afterwards.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
        self.task.abort();
    }

    /// True once the timer completed or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
