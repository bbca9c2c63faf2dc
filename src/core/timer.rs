//! # Timer Queue
//!
//! One-shot and repeating timers on a virtual millisecond clock.
//!
//! The queue never looks at wall-clock time. The event loop calls
//! [`TimerQueue::advance_to`] with elapsed milliseconds and then drains due
//! timers one at a time with [`TimerQueue::pop_due`], dispatching each as an
//! action. Handlers may cancel or start timers between pops, so a cancelled
//! timer that was already due never fires.
//!
//! ```text
//! start_repeating(8000) ──► queue: [(8000, id)]
//! advance_to(8000)
//! pop_due() ──► Some(id)   queue: [(16000, id)]
//! cancel(id)               queue: [(16000, id)]  (stale, skipped)
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle for a scheduled timer. Stale after `cancel` or a one-shot fire.
    pub struct TimerId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    OneShot,
    Repeating,
}

#[derive(Debug)]
struct TimerData {
    next_fire: u64,
    interval: u64,
    kind: TimerKind,
}

/// Min-heap entry. Ties fire in scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    fire_at: u64,
    seq: u64,
    id: TimerId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fire_at
            .cmp(&self.fire_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    now: u64,
    seq: u64,
    timers: SlotMap<TimerId, TimerData>,
    queue: BinaryHeap<QueueEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn start_one_shot(&mut self, delay_ms: u64) -> TimerId {
        self.schedule(delay_ms, TimerKind::OneShot)
    }

    /// First fire happens `interval_ms` from now.
    pub fn start_repeating(&mut self, interval_ms: u64) -> TimerId {
        self.schedule(interval_ms.max(1), TimerKind::Repeating)
    }

    fn schedule(&mut self, delay_ms: u64, kind: TimerKind) -> TimerId {
        let next_fire = self.now + delay_ms;
        let id = self.timers.insert(TimerData {
            next_fire,
            interval: delay_ms,
            kind,
        });
        self.push_entry(id, next_fire);
        id
    }

    fn push_entry(&mut self, id: TimerId, fire_at: u64) {
        self.seq += 1;
        self.queue.push(QueueEntry {
            fire_at,
            seq: self.seq,
            id,
        });
    }

    /// Returns `false` if the handle was already dead.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Moves the clock forward. Never moves it backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now = self.now.max(now_ms);
    }

    pub fn advance_by(&mut self, delta_ms: u64) {
        self.now += delta_ms;
    }

    /// Milliseconds until the next live timer is due, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers
            .values()
            .map(|t| t.next_fire.saturating_sub(self.now))
            .min()
    }

    /// Pops the earliest timer due at or before the current time.
    ///
    /// Repeating timers are rescheduled before returning; one-shot timers
    /// are retired. Entries belonging to cancelled timers are discarded.
    pub fn pop_due(&mut self) -> Option<TimerId> {
        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_at > self.now {
                return None;
            }
            self.queue.pop();

            let Some(timer) = self.timers.get_mut(entry.id) else {
                continue;
            };
            if timer.next_fire != entry.fire_at {
                continue;
            }

            let kind = timer.kind;
            match kind {
                TimerKind::OneShot => {
                    self.timers.remove(entry.id);
                }
                TimerKind::Repeating => {
                    let Some(timer) = self.timers.get_mut(entry.id) else {
                        continue;
                    };
                    timer.next_fire += timer.interval;
                    let next = timer.next_fire;
                    self.push_entry(entry.id, next);
                }
            }
            return Some(entry.id);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once() {
        let mut timers = TimerQueue::new();
        let id = timers.start_one_shot(10);

        timers.advance_to(9);
        assert_eq!(timers.pop_due(), None);

        timers.advance_to(10);
        assert_eq!(timers.pop_due(), Some(id));
        assert_eq!(timers.pop_due(), None);
        assert!(!timers.is_active(id));
    }

    #[test]
    fn repeating_timer_reschedules() {
        let mut timers = TimerQueue::new();
        let id = timers.start_repeating(100);

        timers.advance_to(250);
        assert_eq!(timers.pop_due(), Some(id));
        assert_eq!(timers.pop_due(), Some(id));
        assert_eq!(timers.pop_due(), None);
        assert!(timers.is_active(id));
        assert_eq!(timers.next_deadline(), Some(50));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = TimerQueue::new();
        let id = timers.start_repeating(100);
        timers.advance_to(100);
        assert!(timers.cancel(id));
        assert_eq!(timers.pop_due(), None);
        assert!(!timers.cancel(id));
    }

    #[test]
    fn due_timers_pop_in_deadline_order() {
        let mut timers = TimerQueue::new();
        let late = timers.start_one_shot(30);
        let early = timers.start_one_shot(10);

        timers.advance_to(50);
        assert_eq!(timers.pop_due(), Some(early));
        assert_eq!(timers.pop_due(), Some(late));
    }

    #[test]
    fn clock_does_not_run_backwards() {
        let mut timers = TimerQueue::new();
        timers.advance_to(500);
        timers.advance_to(100);
        assert_eq!(timers.now(), 500);
    }
}
