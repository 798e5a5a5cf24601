//! FIFO waiting queue, with a retry path that pushes a still-unreachable
//! candidate back to the head instead of the tail so it is considered again
//! before any later arrival.

use std::collections::VecDeque;

use crate::order::ArrivalRequest;

/// Deferred-arrival queue. Arrivals that cannot be routed at request time are
/// pushed to the back; a retry that still fails goes back to the front so it
/// is the very next candidate considered once another spot frees up.
#[derive(Default)]
pub struct WaitingQueue {
    inner: VecDeque<ArrivalRequest>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self { inner: VecDeque::new() }
    }

    pub fn push_back(&mut self, request: ArrivalRequest) {
        self.inner.push_back(request);
    }

    /// Used when a dequeued candidate is re-attempted and still fails to
    /// route — it regains head position rather than losing its place to
    /// requests that arrived later.
    pub fn push_front(&mut self, request: ArrivalRequest) {
        self.inner.push_front(request);
    }

    pub fn pop_front(&mut self) -> Option<ArrivalRequest> {
        self.inner.pop_front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}
