//! The hero's launch countdown.
//!
//! ```text
//! Idle --trigger--> Counting --(remaining hits 0)--> Liftoff --(hold elapsed)--> Idle
//! ```
//!
//! Triggers outside `Idle` are ignored. Timers come from a [`Scheduler`], so
//! the browser drives the sequence with `gloo-timers` and tests drive it with
//! a virtual clock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info};
use yew::Callback;

use crate::config;
use crate::timers::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchPhase {
    Idle,
    Counting,
    Liftoff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchState {
    pub phase: LaunchPhase,
    pub remaining_seconds: u32,
}

impl LaunchState {
    pub fn idle(timing: &LaunchTiming) -> Self {
        Self {
            phase: LaunchPhase::Idle,
            remaining_seconds: timing.countdown_seconds,
        }
    }
}

impl Default for LaunchState {
    fn default() -> Self {
        Self::idle(&LaunchTiming::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchTiming {
    pub countdown_seconds: u32,
    pub tick_ms: u32,
    /// How long the liftoff effect stays up before the sequence resets.
    pub liftoff_hold_ms: u32,
}

impl Default for LaunchTiming {
    fn default() -> Self {
        Self {
            countdown_seconds: config::COUNTDOWN_SECONDS,
            tick_ms: config::COUNTDOWN_TICK_MS,
            liftoff_hold_ms: config::LIFTOFF_HOLD_MS,
        }
    }
}

struct Inner<S: Scheduler> {
    scheduler: S,
    timing: LaunchTiming,
    state: LaunchState,
    ticker: Option<S::Handle>,
    reset: Option<S::Handle>,
    disposed: bool,
    on_change: Callback<LaunchState>,
    on_liftoff: Callback<()>,
}

pub struct LaunchSequencer<S: Scheduler + 'static> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Scheduler + 'static> LaunchSequencer<S> {
    pub fn new(
        scheduler: S,
        timing: LaunchTiming,
        on_change: Callback<LaunchState>,
        on_liftoff: Callback<()>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                scheduler,
                timing,
                state: LaunchState::idle(&timing),
                ticker: None,
                reset: None,
                disposed: false,
                on_change,
                on_liftoff,
            })),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LaunchState {
        self.inner.borrow().state
    }

    /// Starts the countdown. Returns `false` if a sequence is already running
    /// or the sequencer has been disposed.
    pub fn trigger(&self) -> bool {
        let weak = Rc::downgrade(&self.inner);
        let (state, on_change) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.state.phase != LaunchPhase::Idle {
                debug!("Launch trigger ignored in {:?}", inner.state.phase);
                return false;
            }

            inner.state = LaunchState {
                phase: LaunchPhase::Counting,
                remaining_seconds: inner.timing.countdown_seconds,
            };
            let ticker = inner
                .scheduler
                .repeat(inner.timing.tick_ms, Box::new(move || tick(&weak)));
            inner.ticker = Some(ticker);
            (inner.state, inner.on_change.clone())
        };

        info!("Launch sequence initiated");
        on_change.emit(state);
        true
    }

    /// Cancels every pending timer. Nothing is emitted after this returns.
    pub fn dispose(&self) {
        let (ticker, reset) = {
            let mut inner = self.inner.borrow_mut();
            inner.disposed = true;
            (inner.ticker.take(), inner.reset.take())
        };
        if ticker.is_some() || reset.is_some() {
            debug!("Launch sequencer disposed with timers pending");
        }
    }
}

fn tick<S: Scheduler + 'static>(weak: &Weak<RefCell<Inner<S>>>) {
    let Some(inner) = weak.upgrade() else { return };

    let (state, on_change, on_liftoff, finished_ticker) = {
        let mut guard = inner.borrow_mut();
        if guard.disposed || guard.state.phase != LaunchPhase::Counting {
            return;
        }

        guard.state.remaining_seconds = guard.state.remaining_seconds.saturating_sub(1);
        let mut on_liftoff = None;
        let mut finished_ticker = None;
        if guard.state.remaining_seconds == 0 {
            finished_ticker = guard.ticker.take();
            guard.state.phase = LaunchPhase::Liftoff;
            let weak = weak.clone();
            let reset_timer = guard
                .scheduler
                .once(guard.timing.liftoff_hold_ms, Box::new(move || reset(&weak)));
            guard.reset = Some(reset_timer);
            on_liftoff = Some(guard.on_liftoff.clone());
        }
        (guard.state, guard.on_change.clone(), on_liftoff, finished_ticker)
    };
    // Cancels the repeating schedule; it must not outlive the countdown.
    drop(finished_ticker);

    on_change.emit(state);
    if let Some(on_liftoff) = on_liftoff {
        info!("Liftoff");
        on_liftoff.emit(());
    }
}

fn reset<S: Scheduler + 'static>(weak: &Weak<RefCell<Inner<S>>>) {
    let Some(inner) = weak.upgrade() else { return };

    let (state, on_change, _fired) = {
        let mut guard = inner.borrow_mut();
        if guard.disposed || guard.state.phase != LaunchPhase::Liftoff {
            return;
        }
        guard.state = LaunchState::idle(&guard.timing);
        (guard.state, guard.on_change.clone(), guard.reset.take())
    };

    debug!("Launch sequence reset");
    on_change.emit(state);
}
