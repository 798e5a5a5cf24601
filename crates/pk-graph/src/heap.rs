//! Indexed binary min-heap over an external weight array.
//!
//! The heap never owns `wt`; the caller mutates it directly (lowering a
//! node's weight during relaxation) and then tells the heap to reposition
//! that node, rather than copying the weight array into the heap itself.
//!
//! `reset` restores `wt`/`st` to a sentinel only for the nodes the previous
//! search actually touched, first draining the
//! evicted tail back into the active range, then pruning a tree walk from
//! the root the moment it finds a node already at the sentinel (an untouched
//! subtree). A node reachable from the root in heap-position space was
//! necessarily visited by the prior search; this is what keeps `reset` out
//! of O(N) for the common case where only a small corner of the graph was
//! explored.

use pk_core::NodeId;

/// Fixed-capacity indexed min-heap keyed by an external weight array.
pub struct IndexedMinHeap {
    /// `heap[i]` is the node currently occupying heap position `i`.
    heap: Vec<NodeId>,
    /// `pos[node.index()]` is that node's current heap position.
    pos: Vec<u32>,
    /// Active size; positions `[len, capacity)` hold evicted nodes parked
    /// for later `reinsert`/`reset`.
    len: usize,
}

impl IndexedMinHeap {
    /// Builds an identity heap (`heap[i] = i`, `pos[i] = i`) over `capacity`
    /// nodes. Does not heapify — callers that need a particular root (e.g.
    /// Dijkstra's source) lower its weight first and call
    /// [`Self::decrease_or_update`], matching `PQinit`'s contract.
    pub fn new(capacity: usize) -> Self {
        let heap: Vec<NodeId> = (0..capacity as u32).map(NodeId).collect();
        let pos: Vec<u32> = (0..capacity as u32).collect();
        Self { heap, pos, len: capacity }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes and returns the node with the smallest `wt`, or `None` if the
    /// active range is empty.
    pub fn extract_min(&mut self, wt: &[i64]) -> Option<NodeId> {
        if self.len == 0 {
            return None;
        }
        let root = self.heap[0];
        self.len -= 1;
        let last = self.heap[self.len];
        self.place(0, last);
        self.place(self.len, root);
        self.sift_down(0, wt);
        Some(root)
    }

    /// Call after the client has lowered `wt[node]`. Repositions `node` by
    /// sift-up, or sift-down if it was already at the root (matching
    /// `PQupdateNode`'s dispatch).
    pub fn decrease_or_update(&mut self, node: NodeId, wt: &[i64]) {
        let i = self.pos[node.index()] as usize;
        debug_assert!(i < self.len, "decrease_or_update on a node outside the active range");
        if i == 0 {
            self.sift_down(0, wt);
            return;
        }
        let parent = (i - 1) / 2;
        if wt[self.heap[i].index()] < wt[self.heap[parent].index()] {
            self.sift_up(i, wt);
        } else {
            self.sift_down(i, wt);
        }
    }

    /// Brings a previously evicted `node` back into the active range and
    /// sifts it up, or behaves like [`Self::decrease_or_update`] if it is
    /// already active. Used when the scheduler reactivates a node that an
    /// earlier partial search had already popped/deactivated.
    pub fn reinsert(&mut self, node: NodeId, wt: &[i64]) {
        let i = self.pos[node.index()] as usize;
        if i < self.len {
            self.decrease_or_update(node, wt);
            return;
        }
        let n = self.len;
        let displaced = self.heap[n];
        self.place(n, node);
        self.place(i, displaced);
        self.len += 1;
        self.sift_up(n, wt);
    }

    /// Restores `wt`/`st` to `sentinel`/[`NodeId::NONE`] for exactly the
    /// nodes the previous search touched, without visiting the rest of the
    /// graph.
    pub fn reset(&mut self, st: &mut [NodeId], wt: &mut [i64], sentinel: i64) {
        let capacity = self.heap.len();
        while self.len < capacity {
            let node = self.heap[self.len];
            wt[node.index()] = sentinel;
            st[node.index()] = NodeId::NONE;
            self.len += 1;
        }
        self.clean(0, st, wt, sentinel);
    }

    fn clean(&mut self, heap_index: usize, st: &mut [NodeId], wt: &mut [i64], sentinel: i64) {
        if heap_index >= self.len {
            return;
        }
        let node = self.heap[heap_index].index();
        if wt[node] == sentinel {
            return;
        }
        wt[node] = sentinel;
        st[node] = NodeId::NONE;
        self.clean(2 * heap_index + 1, st, wt, sentinel);
        self.clean(2 * heap_index + 2, st, wt, sentinel);
    }

    #[inline]
    fn place(&mut self, heap_index: usize, node: NodeId) {
        self.heap[heap_index] = node;
        self.pos[node.index()] = heap_index as u32;
    }

    fn sift_up(&mut self, mut i: usize, wt: &[i64]) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if wt[self.heap[i].index()] < wt[self.heap[parent].index()] {
                self.heap.swap(i, parent);
                self.pos[self.heap[i].index()] = i as u32;
                self.pos[self.heap[parent].index()] = parent as u32;
                i = parent;
            } else {
                return;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize, wt: &[i64]) {
        loop {
            let left = 2 * i + 1;
            if left >= self.len {
                return;
            }
            let right = left + 1;
            let smaller = if right < self.len && wt[self.heap[right].index()] < wt[self.heap[left].index()] {
                right
            } else {
                left
            };
            if wt[self.heap[i].index()] > wt[self.heap[smaller].index()] {
                self.heap.swap(i, smaller);
                self.pos[self.heap[i].index()] = i as u32;
                self.pos[self.heap[smaller].index()] = smaller as u32;
                i = smaller;
            } else {
                return;
            }
        }
    }
}
