use gloo_timers::callback::{Interval, Timeout};

/// Source of repeating and one-shot timers.
///
/// Handles own the timer: dropping a handle cancels it, whether or not it
/// has fired yet. Callbacks run on the page's event loop, one at a time.
pub trait Scheduler {
    type Handle: 'static;

    fn repeat(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

// Held only so that dropping it clears the timer.
#[allow(dead_code)]
pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn repeat(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(period_ms, callback))
    }

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(delay_ms, callback))
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    enum Task {
        Repeat(Box<dyn FnMut()>),
        Once(Box<dyn FnOnce()>),
    }

    struct Timer {
        due: u64,
        period: Option<u64>,
        // Taken out while the callback runs.
        task: Option<Task>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        timers: BTreeMap<u64, Timer>,
    }

    /// Virtual clock that fires timers only when `advance` is called.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().timers.remove(&self.id);
            }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Number of timers that are still armed.
        pub fn pending(&self) -> usize {
            self.clock.borrow().timers.len()
        }

        /// Moves the clock forward, firing every timer that falls due in order.
        pub fn advance(&self, millis: u64) {
            let target = self.now() + millis;
            loop {
                let next = {
                    let clock = self.clock.borrow();
                    clock
                        .timers
                        .iter()
                        .filter(|(_, timer)| timer.due <= target && timer.task.is_some())
                        .min_by_key(|(id, timer)| (timer.due, **id))
                        .map(|(id, _)| *id)
                };
                let Some(id) = next else { break };

                let task = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock.timers[&id].due;
                    clock.now = due;
                    match clock.timers[&id].period {
                        Some(_) => clock.timers.get_mut(&id).and_then(|timer| timer.task.take()),
                        None => clock.timers.remove(&id).and_then(|timer| timer.task),
                    }
                };

                match task {
                    Some(Task::Repeat(mut callback)) => {
                        callback();
                        let mut clock = self.clock.borrow_mut();
                        // Still present unless its handle was dropped during the call.
                        if let Some(timer) = clock.timers.get_mut(&id) {
                            timer.due += timer.period.unwrap_or(0);
                            timer.task = Some(Task::Repeat(callback));
                        }
                    }
                    Some(Task::Once(callback)) => callback(),
                    None => {}
                }
            }
            self.clock.borrow_mut().now = target;
        }

        fn arm(&self, delay_ms: u32, period: Option<u64>, task: Task) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.timers.insert(
                id,
                Timer {
                    due,
                    period,
                    task: Some(task),
                },
            );
            ManualHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn repeat(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
            self.arm(period_ms, Some(u64::from(period_ms)), Task::Repeat(callback))
        }

        fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            self.arm(delay_ms, None, Task::Once(callback))
        }
    }

    mod tests {
        use std::cell::Cell;

        use super::*;

        #[test]
        fn repeating_timer_fires_once_per_period() {
            let scheduler = ManualScheduler::new();
            let count = Rc::new(Cell::new(0));
            let _handle = scheduler.repeat(1_000, {
                let count = count.clone();
                Box::new(move || count.set(count.get() + 1))
            });

            scheduler.advance(999);
            assert_eq!(count.get(), 0);
            scheduler.advance(1);
            assert_eq!(count.get(), 1);
            scheduler.advance(3_500);
            assert_eq!(count.get(), 4);
        }

        #[test]
        fn dropping_handle_cancels_timer() {
            let scheduler = ManualScheduler::new();
            let fired = Rc::new(Cell::new(false));
            let handle = scheduler.once(500, {
                let fired = fired.clone();
                Box::new(move || fired.set(true))
            });
            drop(handle);

            scheduler.advance(1_000);
            assert!(!fired.get());
            assert_eq!(scheduler.pending(), 0);
        }

        #[test]
        fn one_shot_timer_fires_once() {
            let scheduler = ManualScheduler::new();
            let count = Rc::new(Cell::new(0));
            let _handle = scheduler.once(500, {
                let count = count.clone();
                Box::new(move || count.set(count.get() + 1))
            });

            scheduler.advance(5_000);
            assert_eq!(count.get(), 1);
            assert_eq!(scheduler.pending(), 0);
        }
    }
}
