use gloo_timers::callback::Timeout;

/// Something that can run a callback later. Dropping the returned handle
/// cancels the callback if it has not run yet.
pub trait TimerFactory {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimers;

impl TimerFactory for GlooTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Trailing-edge debounce: at most one callback is pending, and every new
/// call pushes it back by the full window.
pub struct Debouncer<T: TimerFactory> {
    timers: T,
    delay_ms: u32,
    pending: Option<T::Handle>,
}

impl<T: TimerFactory> Debouncer<T> {
    pub fn new(timers: T, delay_ms: u32) -> Self {
        Self {
            timers,
            delay_ms,
            pending: None,
        }
    }

    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + 'static,
    {
        // cancel before re-arming
        self.pending.take();
        self.pending = Some(self.timers.schedule(self.delay_ms, Box::new(f)));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::TimerFactory;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct Scheduled {
        id: u64,
        due: u64,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        queue: Vec<Scheduled>,
    }

    /// Deterministic timer source driven by `advance`.
    #[derive(Clone, Default)]
    pub(crate) struct ManualTimers {
        clock: Rc<RefCell<Clock>>,
    }

    pub(crate) struct ManualHandle {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().queue.retain(|s| s.id != self.id);
            }
        }
    }

    impl TimerFactory for ManualTimers {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.queue.push(Scheduled { id, due, callback });
            ManualHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            }
        }
    }

    impl ManualTimers {
        pub(crate) fn pending(&self) -> usize {
            self.clock.borrow().queue.len()
        }

        /// Moves time forward, running every callback that comes due in order.
        pub(crate) fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due_index = clock
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, s)| s.due <= target)
                        .min_by_key(|(_, s)| (s.due, s.id))
                        .map(|(i, _)| i);
                    match due_index {
                        Some(i) => {
                            let scheduled = clock.queue.remove(i);
                            clock.now = scheduled.due;
                            Some(scheduled.callback)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
        }
    }
}
