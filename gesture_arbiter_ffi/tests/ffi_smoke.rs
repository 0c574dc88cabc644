//! FFI smoke tests.
//!
//! These tests call the exported `extern "C"` functions directly (as an
//! external consumer would), to validate:
//! - ABI surface compiles and links
//! - return-code contract for capacity and unknown actors
//! - tick output and status snapshots round-trip through the C structs

use std::mem::MaybeUninit;
use std::ptr;

// Import the exported symbols from the crate under test.
// Note: `#[no_mangle] pub extern "C" fn ...` functions are visible to Rust
// callers too.
use gesture_arbiter_ffi::*;

fn obs(class: GaClass, detected: bool, confidence: f32) -> GaObservation {
    GaObservation {
        class,
        detected: detected as u8,
        confidence,
        has_progress: 0,
        progress: 0.0,
    }
}

#[test]
fn ffi_version_and_default_cfg() {
    assert_eq!(gesture_arbiter_ffi_version(), GESTURE_ARBITER_FFI_VERSION);

    let cfg = gesture_arbiter_cfg_default();
    for t in cfg.thresholds {
        assert!(t.is_finite());
        assert!((0.0..=1.0).contains(&t));
    }
    assert_eq!(cfg.max_actors, 6);
    // Default special gate matches the reference detector's behavior.
    assert_eq!(cfg.special_gate, 0);
}

#[test]
fn ffi_ingest_fires_and_reports_status() {
    let h = gesture_arbiter_new(gesture_arbiter_cfg_default());
    assert!(!h.is_null());

    let frame = [obs(GaClass::Punch, true, 0.9)];
    let mut out = MaybeUninit::<GaTickOutput>::uninit();
    let rc = unsafe { gesture_arbiter_ingest(h, 42, frame.as_ptr(), frame.len(), out.as_mut_ptr()) };
    assert_eq!(rc, GA_OK);

    let out = unsafe { out.assume_init() };
    assert_eq!(out.slot, 0);
    assert_eq!(out.fired, 1);
    assert_eq!(out.fired_class, GaClass::Punch);
    assert_eq!(out.status.is_tracked, 1);
    // Latch consumed on fire.
    assert_eq!(out.status.latched[GaClass::Punch as usize], 0);

    unsafe { gesture_arbiter_free(h) };
}

#[test]
fn ffi_capacity_and_tracking_lost() {
    let mut cfg = gesture_arbiter_cfg_default();
    cfg.max_actors = 1;
    let h = gesture_arbiter_new(cfg);

    let mut out = MaybeUninit::<GaTickOutput>::uninit();
    let rc = unsafe { gesture_arbiter_ingest(h, 1, ptr::null(), 0, out.as_mut_ptr()) };
    assert_eq!(rc, GA_OK);

    // Second actor has no free slot: frame dropped.
    let rc = unsafe { gesture_arbiter_ingest(h, 2, ptr::null(), 0, out.as_mut_ptr()) };
    assert_eq!(rc, GA_ERR_CAPACITY);

    // Losing the first actor frees the slot.
    let mut status = MaybeUninit::<GaStatus>::uninit();
    let rc = unsafe { gesture_arbiter_tracking_lost(h, 1, status.as_mut_ptr()) };
    assert_eq!(rc, GA_OK);
    let status = unsafe { status.assume_init() };
    assert_eq!(status.is_tracked, 0);
    for p in status.progress {
        assert_eq!(p, -1.0);
    }

    // Stale loss signal for an unknown actor is a no-op.
    let rc = unsafe { gesture_arbiter_tracking_lost(h, 1, ptr::null_mut()) };
    assert_eq!(rc, GA_ERR_UNKNOWN_ACTOR);

    let rc = unsafe { gesture_arbiter_ingest(h, 2, ptr::null(), 0, out.as_mut_ptr()) };
    assert_eq!(rc, GA_OK);
    assert_eq!(unsafe { out.assume_init() }.slot, 0);

    unsafe { gesture_arbiter_free(h) };
}

#[test]
fn ffi_status_of_unbound_slot() {
    let h = gesture_arbiter_new(gesture_arbiter_cfg_default());
    let mut status = MaybeUninit::<GaStatus>::uninit();
    let rc = unsafe { gesture_arbiter_status(h, 3, status.as_mut_ptr()) };
    assert_eq!(rc, GA_ERR_UNKNOWN_ACTOR);
    unsafe { gesture_arbiter_free(h) };
}
