//! Simulated clock for driving the animated controllers in tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

use super::{Clock, TimerHandle};

pub const FRAME_MS: u64 = 16;

enum Task {
    Once(Box<dyn FnOnce()>),
    Every(Box<dyn FnMut()>, u64),
    Frame(Box<dyn FnOnce(f64)>),
}

struct Entry {
    due: u64,
    task: Task,
}

#[derive(Default)]
struct Inner {
    now: u64,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
    // Ids whose handle is still alive; an interval running its callback is
    // out of `entries` but may still be live.
    live: BTreeSet<u64>,
}

struct Guard {
    id: u64,
    inner: Weak<RefCell<Inner>>,
}

impl Drop for Guard {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let removed = {
                let mut inner = inner.borrow_mut();
                inner.live.remove(&self.id);
                inner.entries.remove(&self.id)
            };
            // Dropped outside the borrow: the task may own further handles.
            drop(removed);
        }
    }
}

#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<Inner>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    /// Registrations still waiting to fire.
    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn advance(&self, millis: u64) {
        let target = self.now() + millis;
        while let Some((id, entry)) = self.take_next(target) {
            let due = entry.due;
            match entry.task {
                Task::Once(callback) => callback(),
                Task::Frame(callback) => callback(due as f64),
                Task::Every(mut callback, period) => {
                    callback();
                    let live = self.inner.borrow().live.contains(&id);
                    if live {
                        self.inner.borrow_mut().entries.insert(
                            id,
                            Entry {
                                due: due + period,
                                task: Task::Every(callback, period),
                            },
                        );
                    }
                }
            }
        }
        self.inner.borrow_mut().now = target;
    }

    fn take_next(&self, target: u64) -> Option<(u64, Entry)> {
        let mut inner = self.inner.borrow_mut();
        let id = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.due <= target)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, _)| *id)?;
        let entry = inner.entries.remove(&id)?;
        inner.now = entry.due;
        if !matches!(entry.task, Task::Every(..)) {
            inner.live.remove(&id);
        }
        Some((id, entry))
    }

    fn register(&self, delay: u64, task: Task) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now + delay;
        inner.live.insert(id);
        inner.entries.insert(id, Entry { due, task });
        TimerHandle::new(Guard {
            id,
            inner: Rc::downgrade(&self.inner),
        })
    }
}

impl Clock for ManualClock {
    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        self.register(u64::from(millis), Task::Once(callback))
    }

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> TimerHandle {
        let period = u64::from(millis).max(1);
        self.register(period, Task::Every(callback, period))
    }

    fn animation_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Option<TimerHandle> {
        Some(self.register(FRAME_MS, Task::Frame(callback)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn timeout_fires_once_at_its_due_time() {
        let clock = ManualClock::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _handle = clock.timeout(100, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(99);
        assert_eq!(hits.get(), 0);
        clock.advance(1);
        assert_eq!(hits.get(), 1);
        clock.advance(1_000);
        assert_eq!(hits.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dropping_a_handle_cancels_it() {
        let clock = ManualClock::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let handle = clock.interval(10, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(35);
        assert_eq!(hits.get(), 3);
        drop(handle);
        assert_eq!(clock.pending(), 0);
        clock.advance(100);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn interval_can_cancel_itself_from_its_callback() {
        let clock = ManualClock::new();
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let inner_slot = slot.clone();
        let counter = hits.clone();
        let handle = clock.interval(
            5,
            Box::new(move || {
                counter.set(counter.get() + 1);
                if counter.get() == 2 {
                    inner_slot.borrow_mut().take();
                }
            }),
        );
        *slot.borrow_mut() = Some(handle);

        clock.advance(50);
        assert_eq!(hits.get(), 2);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn frames_receive_their_timestamp() {
        let clock = ManualClock::new();
        let seen = Rc::new(Cell::new(0.0));
        let out = seen.clone();
        let _frame = clock.animation_frame(Box::new(move |ts| out.set(ts)));
        clock.advance(FRAME_MS);
        assert_eq!(seen.get(), FRAME_MS as f64);
    }
}
