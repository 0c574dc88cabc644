#![allow(clippy::missing_safety_doc)]

use gesture_arbiter_core::{
    ArbiterCfg, ClassCfg, GestureClass, GestureFrame, GestureObservation, SpecialGate,
};
use gesture_arbiter_supervisor::{GestureSupervisor, TrackingStatus};

/// FFI ABI version for gesture_arbiter_ffi.
///
/// Bump this when any `#[repr(C)]` struct layout or exported function
/// signature changes.
pub const GESTURE_ARBITER_FFI_VERSION: u32 = 1;

#[no_mangle]
pub extern "C" fn gesture_arbiter_ffi_version() -> u32 {
    GESTURE_ARBITER_FFI_VERSION
}

pub const GA_CLASS_COUNT: usize = GestureClass::COUNT;

/// Opaque handle exposed over FFI.
#[repr(C)]
pub struct GaSupervisor {
    inner: GestureSupervisor,
}

/// Gesture class as a C-friendly enum, in priority order.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaClass {
    Punch = 0,
    Kick = 1,
    Haduken = 2,
    JumpingJacks = 3,
}

fn class_to_ffi(class: GestureClass) -> GaClass {
    match class {
        GestureClass::Punch => GaClass::Punch,
        GestureClass::Kick => GaClass::Kick,
        GestureClass::Haduken => GaClass::Haduken,
        GestureClass::JumpingJacks => GaClass::JumpingJacks,
    }
}

fn class_from_ffi(class: GaClass) -> GestureClass {
    match class {
        GaClass::Punch => GestureClass::Punch,
        GaClass::Kick => GestureClass::Kick,
        GaClass::Haduken => GestureClass::Haduken,
        GaClass::JumpingJacks => GestureClass::JumpingJacks,
    }
}

/// Arbiter cfg for FFI (keep it minimal).
///
/// Arrays are indexed by `GaClass` values.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct GaCfg {
    pub thresholds: [f32; GA_CLASS_COUNT],
    pub continuous: [u8; GA_CLASS_COUNT],
    pub max_actors: u32,
    /// 0 = always fire the special move when reached, 1 = require its
    /// confidence to be at least the primary strike's.
    pub special_gate: u8,
    pub zero_progress_below_threshold: u8,
}

#[no_mangle]
pub extern "C" fn gesture_arbiter_cfg_default() -> GaCfg {
    let d = ArbiterCfg::default();
    let mut cfg = GaCfg {
        thresholds: [0.0; GA_CLASS_COUNT],
        continuous: [0; GA_CLASS_COUNT],
        max_actors: d.max_actors as u32,
        special_gate: match d.special_gate {
            SpecialGate::Always => 0,
            SpecialGate::AtLeastRival => 1,
        },
        zero_progress_below_threshold: if d.zero_progress_below_threshold { 1 } else { 0 },
    };
    for class in GestureClass::PRIORITY {
        cfg.thresholds[class.index()] = d.threshold(class);
        cfg.continuous[class.index()] = if d.class(class).continuous { 1 } else { 0 };
    }
    cfg
}

fn cfg_from_ffi(c: GaCfg) -> ArbiterCfg {
    let mut cfg = ArbiterCfg {
        max_actors: c.max_actors.max(1) as usize,
        special_gate: if c.special_gate != 0 {
            SpecialGate::AtLeastRival
        } else {
            SpecialGate::Always
        },
        zero_progress_below_threshold: c.zero_progress_below_threshold != 0,
        ..ArbiterCfg::default()
    };
    for class in GestureClass::PRIORITY {
        cfg.classes[class.index()] = ClassCfg {
            threshold: c.thresholds[class.index()],
            continuous: c.continuous[class.index()] != 0,
        };
    }
    cfg
}

/// FFI input: one classifier result for one gesture class.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct GaObservation {
    pub class: GaClass,
    pub detected: u8,
    pub confidence: f32,
    pub has_progress: u8,
    pub progress: f32,
}

/// FFI per-slot snapshot. Arrays are indexed by `GaClass` values; progress
/// is -1.0 while no continuous signal exists or the slot is not tracked.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct GaStatus {
    pub slot: u32,
    pub is_tracked: u8,
    pub latched: [u8; GA_CLASS_COUNT],
    pub confidence: [f32; GA_CLASS_COUNT],
    pub progress: [f32; GA_CLASS_COUNT],
}

fn status_to_ffi(status: &TrackingStatus) -> GaStatus {
    let mut out = GaStatus {
        slot: status.slot as u32,
        is_tracked: if status.is_tracked { 1 } else { 0 },
        latched: [0; GA_CLASS_COUNT],
        confidence: status.confidence,
        progress: status.progress,
    };
    for i in 0..GA_CLASS_COUNT {
        out.latched[i] = if status.latched[i] { 1 } else { 0 };
    }
    out
}

/// FFI output of one ingest tick.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct GaTickOutput {
    pub slot: u32,
    /// 1 when an action fired this tick; `fired_class` is then valid.
    pub fired: u8,
    pub fired_class: GaClass,
    pub status: GaStatus,
}

// Return codes.
pub const GA_OK: i32 = 0;
pub const GA_ERR_NULL: i32 = -1;
pub const GA_ERR_CAPACITY: i32 = -2;
pub const GA_ERR_UNKNOWN_ACTOR: i32 = -3;

/// Create a new supervisor handle.
#[no_mangle]
pub extern "C" fn gesture_arbiter_new(cfg: GaCfg) -> *mut GaSupervisor {
    let handle = GaSupervisor {
        inner: GestureSupervisor::new(cfg_from_ffi(cfg)),
    };
    Box::into_raw(Box::new(handle))
}

#[no_mangle]
pub unsafe extern "C" fn gesture_arbiter_free(h: *mut GaSupervisor) {
    if !h.is_null() {
        drop(Box::from_raw(h));
    }
}

/// Ingest one actor's frame. Writes the tick output to `out`.
///
/// Returns `GA_OK`, or `GA_ERR_CAPACITY` when the frame was dropped because
/// no free slot exists (bound slots are unaffected; `out` is untouched).
#[no_mangle]
pub unsafe extern "C" fn gesture_arbiter_ingest(
    h: *mut GaSupervisor,
    actor: u64,
    obs_ptr: *const GaObservation,
    obs_len: usize,
    out: *mut GaTickOutput,
) -> i32 {
    if h.is_null() || out.is_null() || (obs_ptr.is_null() && obs_len > 0) {
        return GA_ERR_NULL;
    }
    let handle = &mut *h;

    let mut frame = GestureFrame::new();
    if obs_len > 0 {
        for o in std::slice::from_raw_parts(obs_ptr, obs_len) {
            let mut obs =
                GestureObservation::discrete(class_from_ffi(o.class), o.detected != 0, o.confidence);
            if o.has_progress != 0 {
                obs = obs.with_progress(o.progress);
            }
            frame.push(obs);
        }
    }

    match handle.inner.ingest_frame(actor, &frame) {
        Ok(tick) => {
            let (fired, fired_class) = match tick.fired {
                Some(a) => (1, class_to_ffi(a.class)),
                None => (0, GaClass::Punch),
            };
            *out = GaTickOutput {
                slot: tick.slot as u32,
                fired,
                fired_class,
                status: status_to_ffi(&tick.status),
            };
            GA_OK
        }
        Err(_) => GA_ERR_CAPACITY,
    }
}

/// Signal tracking lost for an actor. Writes the not-tracked snapshot to
/// `out` (when non-null) and frees the slot.
///
/// Returns `GA_ERR_UNKNOWN_ACTOR` for an actor with no bound slot (stale
/// loss signals are harmless no-ops).
#[no_mangle]
pub unsafe extern "C" fn gesture_arbiter_tracking_lost(
    h: *mut GaSupervisor,
    actor: u64,
    out: *mut GaStatus,
) -> i32 {
    if h.is_null() {
        return GA_ERR_NULL;
    }
    let handle = &mut *h;
    match handle.inner.on_tracking_lost(actor) {
        Some(status) => {
            if !out.is_null() {
                *out = status_to_ffi(&status);
            }
            GA_OK
        }
        None => GA_ERR_UNKNOWN_ACTOR,
    }
}

/// Read the current snapshot for a bound slot without ticking it.
#[no_mangle]
pub unsafe extern "C" fn gesture_arbiter_status(
    h: *const GaSupervisor,
    slot: u32,
    out: *mut GaStatus,
) -> i32 {
    if h.is_null() || out.is_null() {
        return GA_ERR_NULL;
    }
    let handle = &*h;
    match handle.inner.status_of(slot as usize) {
        Ok(status) => {
            *out = status_to_ffi(&status);
            GA_OK
        }
        Err(_) => GA_ERR_UNKNOWN_ACTOR,
    }
}
