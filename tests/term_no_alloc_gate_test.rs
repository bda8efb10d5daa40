use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_pong::core::{Arena, GameState};
use tui_pong::term::{Cell, FrameBuffer, GameView};
use tui_pong::types::PaddleIntent;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn tick_and_render_are_allocation_free_after_warmup() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(150, 60);
    let mut gs = GameState::new(Arena::layout(150, 60), 1);

    // Warm-up.
    let mut snap = gs.snapshot();
    view.render(&snap, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..500 {
            if i % 3 == 0 {
                gs.apply_intent(PaddleIntent::MoveUp);
            }
            gs.tick();
            gs.update_ai();
            gs.snapshot_into(&mut snap);
            fb.clear(Cell::default());
            view.render(&snap, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
