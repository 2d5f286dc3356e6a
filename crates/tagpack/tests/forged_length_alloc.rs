//! Heap use while decoding input whose container headers claim far more
//! children than the input holds. Kept in its own test binary so the
//! counting allocator sees no other test's allocations.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use tagpack::{decode_slice, MsgPackError, DEFAULT_MAX_DEPTH};

struct PeakAlloc;

static CURRENT: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for PeakAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            let now = CURRENT.fetch_add(layout.size(), Ordering::SeqCst) + layout.size();
            PEAK.fetch_max(now, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        CURRENT.fetch_sub(layout.size(), Ordering::SeqCst);
    }
}

#[global_allocator]
static ALLOC: PeakAlloc = PeakAlloc;

/// Runs `f` and returns how far the heap grew above its starting size.
fn peak_growth<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let base = CURRENT.load(Ordering::SeqCst);
    PEAK.store(base, Ordering::SeqCst);
    let out = f();
    (out, PEAK.load(Ordering::SeqCst) - base)
}

#[test]
fn forged_container_headers_stay_small() {
    // map32 and array32 headers each declaring u32::MAX entries, nested
    // just under the depth limit, with no children behind them
    let mut input = Vec::new();
    for level in 0..DEFAULT_MAX_DEPTH - 1 {
        let tag = if level % 2 == 0 { 0xdf } else { 0xdd };
        input.extend_from_slice(&[tag, 0xff, 0xff, 0xff, 0xff]);
    }

    let (res, grown) = peak_growth(|| decode_slice(&input));
    assert!(matches!(
        res,
        Err(MsgPackError::StreamTruncated { wanted: 1, got: 0 })
    ));
    assert!(grown < 64 * 1024, "heap grew by {grown} bytes");

    let maps_only: Vec<u8> = [0xdf, 0xff, 0xff, 0xff, 0xff].repeat(DEFAULT_MAX_DEPTH - 1);
    let (res, grown) = peak_growth(|| decode_slice(&maps_only));
    assert!(res.is_err());
    assert!(grown < 64 * 1024, "heap grew by {grown} bytes");
}
