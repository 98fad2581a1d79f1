#![cfg(feature = "count-alloc")]

use charref::{DecodeTextConfig, decode, decode_streaming, decode_text, load, match_longest};
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// Counters are intentionally lightweight: they measure allocation/realloc events and growth
// bytes while enabled, not current live heap usage.
struct CountingAlloc;

static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);
static ALLOC_BYTES: AtomicUsize = AtomicUsize::new(0);
static REALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);
static ENABLED: AtomicBool = AtomicBool::new(false);

// The counters are process-global; tests that read them must not overlap.
static SERIAL: Mutex<()> = Mutex::new(());

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() && ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
            ALLOC_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() && ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
            ALLOC_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() && ENABLED.load(Ordering::Relaxed) {
            REALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
            let old_size = layout.size();
            if new_size > old_size {
                ALLOC_BYTES.fetch_add(new_size - old_size, Ordering::Relaxed);
            }
        }
        new_ptr
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn reset_alloc_counts() {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    ALLOC_BYTES.store(0, Ordering::Relaxed);
    REALLOC_COUNT.store(0, Ordering::Relaxed);
    ENABLED.store(false, Ordering::Relaxed);
}

fn alloc_counts() -> (usize, usize, usize) {
    (
        ALLOC_COUNT.load(Ordering::Relaxed),
        ALLOC_BYTES.load(Ordering::Relaxed),
        REALLOC_COUNT.load(Ordering::Relaxed),
    )
}

struct AllocGuard;

impl AllocGuard {
    fn new() -> Self {
        reset_alloc_counts();
        ENABLED.store(true, Ordering::Relaxed);
        Self
    }
}

impl Drop for AllocGuard {
    fn drop(&mut self) {
        ENABLED.store(false, Ordering::Relaxed);
    }
}

const INPUTS: [&str; 8] = [
    "notin;",
    "notit=5",
    "NotEqualTilde;",
    "CounterClockwiseContourIntegral;",
    "amp",
    "zzzznotreal;",
    "",
    "copy\u{00E9}",
];

#[test]
fn matching_does_not_allocate() {
    let _serial = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    load();
    let (count, bytes, reallocs) = {
        let _guard = AllocGuard::new();
        for _ in 0..64 {
            for input in INPUTS {
                std::hint::black_box(match_longest(std::hint::black_box(input), false));
                std::hint::black_box(match_longest(std::hint::black_box(input), true));
            }
        }
        alloc_counts()
    };
    assert_eq!(
        (count, bytes, reallocs),
        (0, 0, 0),
        "match_longest allocated"
    );
}

#[test]
fn decode_does_not_allocate() {
    let _serial = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    load();
    let (count, _, reallocs) = {
        let _guard = AllocGuard::new();
        for input in ["&notin;", "&not", "&bogus;", "no ampersand"] {
            std::hint::black_box(decode(std::hint::black_box(input), true));
            std::hint::black_box(decode_streaming(std::hint::black_box(input), true, false));
        }
        alloc_counts()
    };
    assert_eq!((count, reallocs), (0, 0), "decode allocated");
}

#[test]
fn decode_text_without_references_borrows() {
    let _serial = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    load();
    let input = "plain text without references ".repeat(32);
    let (count, _, _) = {
        let _guard = AllocGuard::new();
        std::hint::black_box(decode_text(&input, DecodeTextConfig::default()));
        alloc_counts()
    };
    assert_eq!(count, 0, "borrowed fast path allocated");
}

#[test]
fn trie_build_footprint_is_bounded() {
    let _serial = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let stats = load().stats();
    // Arena entries are 8 bytes and labels 1.
    let terminal_size = std::mem::size_of::<charref::Terminal>();
    assert!(
        stats.heap_bytes <= 9 * stats.nodes + terminal_size * stats.terminals,
        "unexpected footprint {stats:?}"
    );
    assert!(stats.heap_bytes < 128 * 1024, "trie footprint grew: {stats:?}");
}
