use std::collections::{HashSet, VecDeque};

use crate::grid::SlotId;

/// A directed arc `(x, y)`: revise x's domain against y's.
pub type Arc = (SlotId, SlotId);

/// FIFO queue of pending arcs with membership dedup, so an arc already
/// waiting is not enqueued twice. FIFO keeps the propagation order
/// deterministic for a given seeding order.
#[derive(Debug, Default)]
pub struct WorkList {
    queue: VecDeque<Arc>,
    members: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, arc: Arc) {
        if self.members.insert(arc) {
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
