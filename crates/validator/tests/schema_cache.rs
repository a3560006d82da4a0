//! Concurrent first access to the process-wide schema cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use strata_validator::prelude::*;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

struct Slow {
    value: i32,
}

impl Model for Slow {
    fn schema() -> Schema<Self> {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        // Widen the race window for the other threads.
        thread::sleep(Duration::from_millis(20));
        Schema::new().field("value", |s: &Slow| &s.value, RulePack::<i32>::new().min(0))
    }
}

#[test]
fn racing_first_callers_build_once() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let schema: &'static Schema<Slow> = SchemaCache::<Slow>::get();
                std::ptr::from_ref(schema).addr()
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(Slow::cached_schema().len(), 1);
}

#[test]
fn validation_from_many_threads() {
    let handles: Vec<_> = (-4..4)
        .map(|value| thread::spawn(move || Slow { value }.is_valid()))
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [false, false, false, false, true, true, true, true]);
}
