//! Debounced execution
//!
//! Collapses a burst of trigger calls into a single execution once the
//! burst has been quiet for the configured period. Each new trigger
//! cancels the pending callback and re-arms the timer, so only the last
//! call of a burst ever runs.

use std::cell::RefCell;

use super::scheduler::Scheduler;

/// Debouncer with a single pending slot
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait_ms: u32) -> Self {
        Self {
            scheduler,
            wait_ms,
            pending: RefCell::new(None),
        }
    }

    /// Schedule `callback` to run after the quiet period, replacing any
    /// still-pending callback from an earlier trigger.
    pub fn trigger(&self, callback: Box<dyn FnOnce()>) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(handle);
        }
        let handle = self.scheduler.schedule(self.wait_ms, callback);
        *self.pending.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::timing::fake::FakeScheduler;

    fn counting_callback(counter: &Rc<Cell<u32>>) -> Box<dyn FnOnce()> {
        let counter = Rc::clone(counter);
        Box::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn burst_collapses_to_one_execution_after_quiet_period() {
        let scheduler = FakeScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), 250);
        let runs = Rc::new(Cell::new(0));

        for _ in 0..5 {
            debouncer.trigger(counting_callback(&runs));
            scheduler.advance(100);
        }
        assert_eq!(runs.get(), 0);

        // Quiet period measured from the last trigger at t=400: due at 650.
        scheduler.advance(149);
        assert_eq!(runs.get(), 0);
        scheduler.advance(1);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn nothing_runs_before_the_quiet_period_elapses() {
        let scheduler = FakeScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), 250);
        let runs = Rc::new(Cell::new(0));

        debouncer.trigger(counting_callback(&runs));
        scheduler.advance(249);
        assert_eq!(runs.get(), 0);
        scheduler.advance(1);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn separate_bursts_each_execute() {
        let scheduler = FakeScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), 250);
        let runs = Rc::new(Cell::new(0));

        debouncer.trigger(counting_callback(&runs));
        scheduler.advance(300);
        assert_eq!(runs.get(), 1);

        debouncer.trigger(counting_callback(&runs));
        debouncer.trigger(counting_callback(&runs));
        scheduler.advance(300);
        assert_eq!(runs.get(), 2);
    }
}
