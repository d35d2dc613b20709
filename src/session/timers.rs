//! Deferred side effects keyed to a session generation.
//!
//! Shoot pulses, invulnerability windows, blink toggles and the post game
//! over cleanup are all scheduled here instead of as free-running callbacks.
//! Bumping the generation on restart drops every pending action at once.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    EndShootPulse,
    EndInvulnerability,
    BlinkToggle,
    ClearProjectiles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// An action whose fire time has been reached
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DueAction {
    pub fire_at: f64,
    pub action: DeferredAction,
}

struct Scheduled {
    fire_at: f64,
    id: TimerId,
    generation: u32,
    action: DeferredAction,
}

// Reversed so the max-heap pops the earliest fire time first; ties go to
// whichever was scheduled first.
impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fire_at
            .total_cmp(&self.fire_at)
            .then_with(|| other.id.0.cmp(&self.id.0))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

#[derive(Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Scheduled>,
    cancelled: HashSet<TimerId>,
    generation: u32,
    next_id: u64,
}

impl TimerQueue {
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn schedule(&mut self, fire_at: f64, action: DeferredAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.heap.push(Scheduled {
            fire_at,
            id,
            generation: self.generation,
            action,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) {
        if self.heap.iter().any(|entry| entry.id == id) {
            self.cancelled.insert(id);
        }
    }

    /// Invalidate everything scheduled so far.
    pub fn advance_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.heap.clear();
        self.cancelled.clear();
    }

    /// Number of live (not cancelled, current generation) entries
    pub fn pending(&self) -> usize {
        self.heap
            .iter()
            .filter(|entry| entry.generation == self.generation && !self.cancelled.contains(&entry.id))
            .count()
    }

    pub fn is_pending(&self, action: DeferredAction) -> bool {
        self.heap.iter().any(|entry| {
            entry.action == action
                && entry.generation == self.generation
                && !self.cancelled.contains(&entry.id)
        })
    }

    /// Pop every live action with `fire_at <= now`, earliest first.
    pub fn drain_due(&mut self, now: f64) -> Vec<DueAction> {
        let mut due = Vec::new();

        while self.heap.peek().is_some_and(|next| next.fire_at <= now) {
            let Some(entry) = self.heap.pop() else {
                break;
            };

            if self.cancelled.remove(&entry.id) || entry.generation != self.generation {
                continue;
            }

            due.push(DueAction {
                fire_at: entry.fire_at,
                action: entry.action,
            });
        }

        due
    }
}
