//! `DeferredQueue` — generation-tagged timers in simulated time.
//!
//! Shipment arrivals and vehicle animation steps are not host callbacks; they
//! are entries in this queue, drained by the tick loop on the simulation
//! thread.  Each entry records the queue generation it was pushed under.
//! [`DeferredQueue::invalidate`] bumps the generation and drops everything
//! pending, so a handle kept from before a reset can never match a live
//! entry again.
//!
//! # Ordering
//!
//! Entries pop in ascending `fire_at`; entries with the same `fire_at` pop
//! in push order.  Because `fire_at` is simulated time, pausing the clock
//! freezes every pending entry with its remaining time intact.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Identifies one pushed entry.  Compare against a stored handle to tell
/// whether a due entry is the one a caller is still waiting for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    pub generation: u64,
    pub seq: u64,
}

/// An entry whose time has come.
#[derive(Debug, Clone, PartialEq)]
pub struct Due<T> {
    pub handle: TimerHandle,
    /// The simulated second the entry was scheduled for (may be earlier than
    /// the `now` passed to `pop_due`).
    pub fire_at: f64,
    pub payload: T,
}

struct Entry<T> {
    fire_at: f64,
    handle:  TimerHandle,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed: `BinaryHeap` is a max-heap and we want the earliest entry on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fire_at
            .total_cmp(&self.fire_at)
            .then_with(|| other.handle.seq.cmp(&self.handle.seq))
    }
}

/// Min-heap of `(fire_at, seq, generation, payload)` entries.
pub struct DeferredQueue<T> {
    heap:       BinaryHeap<Entry<T>>,
    generation: u64,
    next_seq:   u64,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            heap:       BinaryHeap::new(),
            generation: 0,
            next_seq:   0,
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to become due at simulated second `fire_at`.
    pub fn push(&mut self, fire_at: f64, payload: T) -> TimerHandle {
        let handle = TimerHandle { generation: self.generation, seq: self.next_seq };
        self.next_seq += 1;
        self.heap.push(Entry { fire_at, handle, payload });
        handle
    }

    /// Remove and return the earliest entry with `fire_at <= now`.
    ///
    /// Entries from an older generation are discarded on the way.  Returns
    /// `None` once nothing else is due.
    pub fn pop_due(&mut self, now: f64) -> Option<Due<T>> {
        loop {
            let top = self.heap.peek()?;
            if top.fire_at > now {
                return None;
            }
            let entry = self.heap.pop()?;
            if entry.handle.generation != self.generation {
                continue;
            }
            return Some(Due {
                handle:  entry.handle,
                fire_at: entry.fire_at,
                payload: entry.payload,
            });
        }
    }

    /// Earliest pending fire time, if any.
    pub fn next_fire_at(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.fire_at)
    }

    /// Drop every pending entry and start a new generation.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.heap.clear();
    }

    /// `true` if `handle` was issued in the current generation.
    #[inline]
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        handle.generation == self.generation
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Iterate pending payloads in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.heap.iter().map(|e| &e.payload)
    }
}
