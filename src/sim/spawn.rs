//! Spawn queue and release pacing
//!
//! Bodies waiting to fall sit in a FIFO. At most one body is released per tick,
//! once enough wait time has accumulated, which caps how many bodies are in the
//! air at once.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::state::BodyId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnQueue {
    queue: VecDeque<BodyId>,
    /// Seconds between releases
    pub interval: f32,
    /// Time banked toward the next release
    wait: f32,
}

impl SpawnQueue {
    pub fn new(order: Vec<BodyId>, interval: f32) -> Self {
        Self {
            queue: VecDeque::from(order),
            interval,
            wait: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.queue.contains(&id)
    }

    /// Queued ids, head first
    pub fn iter(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.queue.iter().copied()
    }

    pub fn wait(&self) -> f32 {
        self.wait
    }

    /// Append to the tail. An id already queued is left where it is.
    pub fn push(&mut self, id: BodyId) -> bool {
        if self.queue.contains(&id) {
            log::warn!("Body {} already queued, ignoring", id);
            return false;
        }
        self.queue.push_back(id);
        true
    }

    pub fn pop(&mut self) -> Option<BodyId> {
        self.queue.pop_front()
    }

    /// Bank `dt` and hand back the head id if its release is due.
    ///
    /// An empty queue banks nothing. On release the interval is spent and the
    /// remainder kept, bounded below one interval.
    pub fn advance(&mut self, dt: f32) -> Option<BodyId> {
        if self.queue.is_empty() {
            return None;
        }

        self.wait += dt;
        if self.wait < self.interval {
            return None;
        }

        // Remainder carried, not zeroed, so releases track floor(T / interval)
        self.wait = (self.wait - self.interval) % self.interval;
        self.queue.pop_front()
    }

    /// Forget banked wait time
    pub fn reset_wait(&mut self) {
        self.wait = 0.0;
    }
}
