//! # Thread Independence Tests
//!
//! The rounding mode lives in each hardware thread's control register. A write on one thread
//! must never be observed by another.

use std::sync::{Arc, Barrier};
use std::thread;

use fpround::{RoundingControl, RoundingGuard, RoundingMode};
use pretty_assertions::assert_eq;

use crate::common::harness::host;

#[test]
fn write_on_one_thread_is_invisible_to_another() {
    let Some(_) = host() else { return };
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            let env = fpround::HostFenv::new();
            let entered = RoundingGuard::enter(&env, RoundingMode::TowardNegativeInfinity);
            // Hold the override until the reader has looked. Both waits happen even when
            // entering failed, or the reader would block forever.
            let _ = barrier.wait();
            let _ = barrier.wait();
            let guard = entered?;
            let seen = env.get_rounding_mode();
            guard.restore()?;
            seen
        })
    };

    let reader = {
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            let _ = barrier.wait();
            let seen = fpround::get_rounding_mode();
            let _ = barrier.wait();
            seen
        })
    };

    let writer_saw = writer.join().unwrap();
    let reader_saw = reader.join().unwrap();

    assert_eq!(writer_saw, Ok(RoundingMode::TowardNegativeInfinity));
    assert_eq!(reader_saw, Ok(RoundingMode::ToNearestTiesToEven));
}

#[test]
fn concurrent_overrides_each_see_their_own_mode() {
    let Some(_) = host() else { return };
    let barrier = Arc::new(Barrier::new(RoundingMode::ALL.len()));

    let handles: Vec<_> = RoundingMode::ALL
        .into_iter()
        .map(|mode| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut waited = false;
                let seen = fpround::with_rounding_mode(mode, || {
                    // Every thread is inside its override at this point.
                    waited = true;
                    let _ = barrier.wait();
                    fpround::get_rounding_mode()
                });
                if !waited {
                    let _ = barrier.wait();
                }
                seen
            })
        })
        .collect();

    for (mode, handle) in RoundingMode::ALL.into_iter().zip(handles) {
        let seen = handle.join().unwrap();
        assert_eq!(seen, Ok(Ok(mode)));
    }
    assert_eq!(
        fpround::get_rounding_mode(),
        Ok(RoundingMode::ToNearestTiesToEven)
    );
}

#[test]
fn mode_set_on_spawning_thread_does_not_leak_back() {
    let Some(env) = host() else { return };

    let child = thread::spawn(|| {
        fpround::set_rounding_mode(RoundingMode::TowardZero)?;
        fpround::get_rounding_mode()
    });
    let child_saw = child.join().unwrap();

    assert_eq!(child_saw, Ok(RoundingMode::TowardZero));
    assert_eq!(env.get_rounding_mode(), Ok(RoundingMode::ToNearestTiesToEven));
}
