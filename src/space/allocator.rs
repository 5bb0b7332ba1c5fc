//! Counting global allocator

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

thread_local! {
    static ALLOCATIONS: Cell<u64> = const { Cell::new(0) };
    static DEALLOCATIONS: Cell<u64> = const { Cell::new(0) };
    static BYTES: Cell<u64> = const { Cell::new(0) };
    static LIVE: Cell<u64> = const { Cell::new(0) };
    static PEAK: Cell<u64> = const { Cell::new(0) };
}

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Global allocator that forwards to [`System`] and counts activity per thread.
///
/// Register it with `#[global_allocator]` in a binary or test crate; the
/// library never installs it itself.
///
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: span_split::space::CountingAllocator = span_split::space::CountingAllocator;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingAllocator;

impl CountingAllocator {
    fn on_alloc(size: usize) {
        INSTALLED.store(true, Ordering::Relaxed);
        let size = size as u64;
        // `try_with` fails only during thread teardown; those allocations go uncounted.
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        let _ = BYTES.try_with(|bytes| bytes.set(bytes.get() + size));
        let _ = LIVE.try_with(|live| {
            let now = live.get() + size;
            live.set(now);
            let _ = PEAK.try_with(|peak| peak.set(peak.get().max(now)));
        });
    }

    /// One allocation of `new_size` bytes; the old block is released without
    /// counting a deallocation.
    fn on_realloc(old_size: usize, new_size: usize) {
        let _ = LIVE.try_with(|live| live.set(live.get().saturating_sub(old_size as u64)));
        Self::on_alloc(new_size);
    }

    fn on_dealloc(size: usize) {
        let _ = DEALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        let _ = LIVE.try_with(|live| live.set(live.get().saturating_sub(size as u64)));
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            Self::on_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            Self::on_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        Self::on_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            Self::on_realloc(layout.size(), new_size);
        }
        new_ptr
    }
}

/// Raw per-thread counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Counters {
    pub allocations: u64,
    pub deallocations: u64,
    pub bytes: u64,
    pub live: u64,
    pub peak: u64,
}

pub(crate) fn read_counters() -> Counters {
    Counters {
        allocations: ALLOCATIONS.with(Cell::get),
        deallocations: DEALLOCATIONS.with(Cell::get),
        bytes: BYTES.with(Cell::get),
        live: LIVE.with(Cell::get),
        peak: PEAK.with(Cell::get),
    }
}

/// Restart peak tracking from the current live byte count.
pub(crate) fn reset_peak() {
    let live = LIVE.with(Cell::get);
    PEAK.with(|peak| peak.set(live));
}

pub(crate) fn is_installed() -> bool {
    INSTALLED.load(Ordering::Relaxed)
}
