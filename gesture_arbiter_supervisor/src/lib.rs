//! gesture_arbiter_supervisor
//!
//! Outside-world facing orchestration layer for `gesture_arbiter_core`.
//!
//! Responsibilities:
//! - own the actor-to-slot table and per-slot latch state
//! - convert name-keyed classifier results into typed observations via adapters
//! - run latch update + arbitration once per incoming frame
//! - report fired actions and tracking snapshots for the caller's sink
//!
//! Non-goals:
//! - no IO (diagnostics go through `tracing`)
//! - no async
//! - no arbitration policy (lives in core)

pub mod adapter;
pub mod slots;
pub mod supervisor;

pub use adapter::{FrameBuilder, GestureNames, NamedResult, NamedResultBuilder};
pub use slots::SlotMap;
pub use supervisor::{
    ActionFired,
    GestureSupervisor,
    SupervisorSnapshot,
    TickOutput,
    TrackingStatus,
};
