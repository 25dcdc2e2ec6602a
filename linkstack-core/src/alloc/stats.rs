//! ## linkstack-core::alloc::stats
//! **Node allocation and byte throughput accounting**
//!
//! Each stack owns one [`StackStats`]; counters only grow, so the number of
//! live nodes is derived from allocations minus releases.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-stack allocation counters.
#[derive(Debug, Default)]
pub struct StackStats {
    node_allocations: AtomicUsize,
    node_releases: AtomicUsize,
    bytes_pushed: AtomicUsize,
    bytes_popped: AtomicUsize,
}

impl StackStats {
    /// Creates a new `StackStats` instance with all counters initialized to zero.
    pub const fn new() -> Self {
        StackStats {
            node_allocations: AtomicUsize::new(0),
            node_releases: AtomicUsize::new(0),
            bytes_pushed: AtomicUsize::new(0),
            bytes_popped: AtomicUsize::new(0),
        }
    }

    /// Records one node allocated carrying `bytes` of element data.
    #[inline]
    pub fn record_push(&self, bytes: usize) {
        self.node_allocations.fetch_add(1, Ordering::Relaxed);
        self.bytes_pushed.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Records one node released carrying `bytes` of element data.
    #[inline]
    pub fn record_pop(&self, bytes: usize) {
        self.node_releases.fetch_add(1, Ordering::Relaxed);
        self.bytes_popped.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn node_allocations(&self) -> usize {
        self.node_allocations.load(Ordering::Relaxed)
    }

    pub fn node_releases(&self) -> usize {
        self.node_releases.load(Ordering::Relaxed)
    }

    pub fn bytes_pushed(&self) -> usize {
        self.bytes_pushed.load(Ordering::Relaxed)
    }

    pub fn bytes_popped(&self) -> usize {
        self.bytes_popped.load(Ordering::Relaxed)
    }

    /// Nodes allocated and not yet released.
    pub fn live_nodes(&self) -> usize {
        self.node_allocations() - self.node_releases()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_stats_start_at_zero() {
        let stats = StackStats::new();
        assert_eq!(stats.node_allocations(), 0);
        assert_eq!(stats.node_releases(), 0);
        assert_eq!(stats.bytes_pushed(), 0);
        assert_eq!(stats.bytes_popped(), 0);
        assert_eq!(stats.live_nodes(), 0);
    }

    #[test]
    fn test_stack_stats_multiple_records() {
        let stats = StackStats::new();
        for _ in 0..100 {
            stats.record_push(4);
        }
        for _ in 0..40 {
            stats.record_pop(4);
        }

        assert_eq!(stats.node_allocations(), 100);
        assert_eq!(stats.node_releases(), 40);
        assert_eq!(stats.bytes_pushed(), 400);
        assert_eq!(stats.bytes_popped(), 160);
        assert_eq!(stats.live_nodes(), 60);
    }
}
