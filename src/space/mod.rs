//! Allocation accounting
//!
//! Backs the zero-allocation guarantee of the splitters with measurements.
//! Counts are only collected when [`CountingAllocator`] is the global
//! allocator of the running binary; otherwise every measurement is zero.

mod allocator;

pub use allocator::CountingAllocator;

/// Heap activity observed on the current thread during a measured closure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AllocationStats {
    /// Number of allocations (a reallocation counts as one allocation)
    pub allocations: u64,
    /// Number of deallocations (reallocations are not counted here)
    pub deallocations: u64,
    /// Total bytes requested, including the full new size of each reallocation
    pub bytes_allocated: u64,
    /// Peak live bytes above the level at the start of the measurement
    pub peak_bytes: u64,
}

impl AllocationStats {
    /// True when nothing was allocated.
    pub fn is_zero(&self) -> bool {
        self.allocations == 0 && self.bytes_allocated == 0
    }

    /// Per-pass averages over `passes` repetitions: (allocations, bytes).
    pub fn per_pass(&self, passes: usize) -> (f64, f64) {
        if passes == 0 {
            return (0.0, 0.0);
        }
        let passes = passes as f64;
        (
            self.allocations as f64 / passes,
            self.bytes_allocated as f64 / passes,
        )
    }
}

/// Whether [`CountingAllocator`] has served at least one allocation.
pub fn counting_enabled() -> bool {
    allocator::is_installed()
}

/// Run `f` and report the allocations it performed on this thread.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, AllocationStats) {
    allocator::reset_peak();
    let before = allocator::read_counters();
    let result = f();
    let after = allocator::read_counters();

    let stats = AllocationStats {
        allocations: after.allocations - before.allocations,
        deallocations: after.deallocations - before.deallocations,
        bytes_allocated: after.bytes - before.bytes,
        peak_bytes: after.peak.saturating_sub(before.live),
    };
    (result, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_pass_divides_counts() {
        let stats = AllocationStats {
            allocations: 10,
            deallocations: 10,
            bytes_allocated: 400,
            peak_bytes: 40,
        };
        assert_eq!(stats.per_pass(10), (1.0, 40.0));
        assert_eq!(stats.per_pass(0), (0.0, 0.0));
        assert!(!stats.is_zero());
        assert!(AllocationStats::default().is_zero());
    }

    #[test]
    fn measure_returns_closure_result() {
        let (value, _) = measure(|| 6 * 7);
        assert_eq!(value, 42);
    }
}
