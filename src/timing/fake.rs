//! Deterministic scheduler for tests
//!
//! Keeps a virtual clock and a queue of scheduled callbacks; `advance`
//! moves the clock and runs everything that came due, in due order.

use std::cell::RefCell;
use std::rc::Rc;

use super::scheduler::Scheduler;

struct Entry {
    id: u64,
    due_at: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Inner {
    now: u64,
    next_id: u64,
    queue: Vec<Entry>,
}

/// Shared-handle fake scheduler; clones point at the same virtual clock
#[derive(Clone, Default)]
pub struct FakeScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    /// Number of callbacks still waiting to fire
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Advance the clock by `ms`, running every callback that comes due.
    /// Callbacks scheduled while advancing run too if they fall inside
    /// the advanced window.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due_index = inner
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due_at <= target)
                    .min_by_key(|(_, e)| (e.due_at, e.id))
                    .map(|(i, _)| i);
                match due_index {
                    Some(i) => {
                        let entry = inner.queue.remove(i);
                        inner.now = entry.due_at;
                        Some(entry.callback)
                    }
                    None => None,
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }
}

impl Scheduler for FakeScheduler {
    type Handle = u64;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due_at = inner.now + u64::from(delay_ms);
        inner.queue.push(Entry {
            id,
            due_at,
            callback,
        });
        id
    }

    fn cancel(&self, handle: u64) {
        // Cancelling an already-fired handle is a no-op, like clearTimeout.
        self.inner.borrow_mut().queue.retain(|e| e.id != handle);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn callbacks_fire_in_due_order() {
        let scheduler = FakeScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (delay, tag) in [(200u32, "b"), (100, "a"), (300, "c")] {
            let order = Rc::clone(&order);
            scheduler.schedule(delay, Box::new(move || order.borrow_mut().push(tag)));
        }

        scheduler.advance(250);
        assert_eq!(*order.borrow(), vec!["a", "b"]);
        assert_eq!(scheduler.pending_count(), 1);

        scheduler.advance(50);
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn cancelled_callbacks_never_run() {
        let scheduler = FakeScheduler::new();
        let ran = Rc::new(RefCell::new(false));

        let flag = Rc::clone(&ran);
        let handle = scheduler.schedule(100, Box::new(move || *flag.borrow_mut() = true));
        scheduler.cancel(handle);

        scheduler.advance(500);
        assert!(!*ran.borrow());
        // Stale cancel after the queue drained is harmless.
        scheduler.cancel(handle);
    }
}
