//! Gesture supervisor.
//!
//! This is the outside-world facing layer around `gesture_arbiter_core`:
//! - owns the actor-to-slot table (`SlotMap`) and one `ActorGestureState`
//!   per slot
//! - runs latch update + arbitration once per incoming frame
//! - reports fired actions and full tracking snapshots for the caller's
//!   action sink
//!
//! Single-threaded tick model: each frame (or tracking-lost signal) is
//! handled to completion before the next. Slots never share mutable state,
//! so a tracking-lost reset is atomic with respect to any tick for the same
//! slot by construction.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use gesture_arbiter_core::{
    arbitrate, ActorGestureState, ActorId, ArbiterCfg, ArbiterError, GestureClass, GestureFrame,
    PROGRESS_NONE,
};

use crate::adapter::{FrameBuilder, NamedResult};
use crate::slots::SlotMap;

/// One-shot action routed to the control surface. Exactly one per winning
/// arbitration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionFired {
    pub slot: usize,
    pub class: GestureClass,
}

/// Full per-slot snapshot, emitted after every tick and after every
/// tracking-lost reset. Arrays are indexed by `GestureClass::index`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackingStatus {
    pub slot: usize,
    pub is_tracked: bool,
    pub latched: [bool; GestureClass::COUNT],
    pub confidence: [f32; GestureClass::COUNT],
    pub progress: [f32; GestureClass::COUNT],
}

impl TrackingStatus {
    fn from_state(slot: usize, state: &ActorGestureState) -> Self {
        let mut status = Self {
            slot,
            is_tracked: true,
            latched: [false; GestureClass::COUNT],
            confidence: [0.0; GestureClass::COUNT],
            progress: [PROGRESS_NONE; GestureClass::COUNT],
        };
        for class in GestureClass::PRIORITY {
            let cs = state.class(class);
            status.latched[class.index()] = cs.latched;
            status.confidence[class.index()] = cs.confidence;
            status.progress[class.index()] = cs.progress;
        }
        status
    }

    fn not_tracked(slot: usize) -> Self {
        Self {
            slot,
            is_tracked: false,
            latched: [false; GestureClass::COUNT],
            confidence: [0.0; GestureClass::COUNT],
            progress: [PROGRESS_NONE; GestureClass::COUNT],
        }
    }
}

/// Result of one ingest tick.
#[derive(Clone, Copy, Debug)]
pub struct TickOutput {
    pub slot: usize,
    pub fired: Option<ActionFired>,
    pub status: TrackingStatus,
}

/// Snapshot of supervisor state for storage-agnostic persistence.
///
/// Pure data: callers decide how/where to store it. Entries are sorted by
/// slot.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SupervisorSnapshot {
    pub states: Vec<(usize, ActorId, ActorGestureState)>,
}

#[derive(Debug)]
pub struct GestureSupervisor {
    cfg: ArbiterCfg,
    slots: SlotMap,
    states: Vec<ActorGestureState>,
}

impl GestureSupervisor {
    pub fn new(cfg: ArbiterCfg) -> Self {
        let capacity = cfg.max_actors.max(1);
        Self {
            cfg,
            slots: SlotMap::new(capacity),
            states: vec![ActorGestureState::default(); capacity],
        }
    }

    pub fn cfg(&self) -> &ArbiterCfg {
        &self.cfg
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Handle one actor's frame to completion: resolve the slot, fold the
    /// observations into its latch state, arbitrate.
    ///
    /// Capacity exhaustion drops the frame: bound slots are untouched and
    /// the returned error is the diagnostic event.
    pub fn ingest_frame(
        &mut self,
        actor: ActorId,
        frame: &GestureFrame,
    ) -> Result<TickOutput, ArbiterError> {
        let slot = match self.slots.resolve(actor) {
            Ok(slot) => slot,
            Err(err) => {
                warn!(
                    actor,
                    capacity = self.slots.capacity(),
                    "dropping frame: no free slot"
                );
                return Err(err);
            }
        };

        let state = &mut self.states[slot];
        state.apply(&self.cfg, frame);

        let fired = arbitrate(&self.cfg, state).map(|class| {
            debug!(slot, class = class.name(), "action fired");
            ActionFired { slot, class }
        });

        Ok(TickOutput {
            slot,
            fired,
            status: TrackingStatus::from_state(slot, &self.states[slot]),
        })
    }

    /// Convenience: adapt raw name-keyed classifier results, then ingest.
    pub fn ingest_named<B: FrameBuilder>(
        &mut self,
        builder: &B,
        actor: ActorId,
        results: &[NamedResult<'_>],
    ) -> Result<TickOutput, ArbiterError> {
        let frame = builder.build(results);
        self.ingest_frame(actor, &frame)
    }

    /// Tracking lost for `actor`: free the slot, reset its latch state, and
    /// report the not-tracked snapshot for the sink. Unknown actors yield
    /// `None` (stale loss signals are harmless).
    pub fn on_tracking_lost(&mut self, actor: ActorId) -> Option<TrackingStatus> {
        let slot = self.slots.release(actor)?;
        self.states[slot].reset();
        debug!(actor, slot, "tracking lost, slot released");
        Some(TrackingStatus::not_tracked(slot))
    }

    /// Current snapshot for a bound slot.
    ///
    /// `UnboundSlot` is a caller contract violation: the slot must have been
    /// resolved by a frame first.
    pub fn status_of(&self, slot: usize) -> Result<TrackingStatus, ArbiterError> {
        if self.slots.actor_at(slot).is_none() {
            return Err(ArbiterError::UnboundSlot { slot });
        }
        Ok(TrackingStatus::from_state(slot, &self.states[slot]))
    }

    /// Export all bound slots as plain data, sorted by slot.
    pub fn export_state(&self) -> SupervisorSnapshot {
        let mut states = Vec::new();
        for slot in 0..self.slots.capacity() {
            if let Some(actor) = self.slots.actor_at(slot) {
                states.push((slot, actor, self.states[slot].clone()));
            }
        }
        SupervisorSnapshot { states }
    }

    /// Restore from a previously exported snapshot, overwriting current
    /// bindings and state. Entries beyond the configured capacity are
    /// skipped with a diagnostic.
    pub fn restore(&mut self, snap: SupervisorSnapshot) {
        self.slots.clear();
        for state in &mut self.states {
            state.reset();
        }
        for (slot, actor, state) in snap.states {
            if !self.slots.bind(slot, actor) {
                warn!(slot, actor, "snapshot entry beyond capacity, skipped");
                continue;
            }
            self.states[slot] = state;
        }
    }
}
