use serde::{Deserialize, Serialize};

use crate::cfg::ArbiterCfg;
use crate::class::GestureClass;
use crate::observation::{clamp_progress, sanitize_confidence, GestureFrame, GestureObservation};

/// Progress value reported while a slot is not tracked or before any
/// continuous signal has arrived.
pub const PROGRESS_NONE: f32 = -1.0;

/// Per-class latch record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ClassState {
    /// A qualifying detection was seen and has not yet been consumed by
    /// arbitration.
    pub latched: bool,
    /// Most recent raw confidence, kept below threshold too for display.
    pub confidence: f32,
    /// Continuous progress in [0,1], or `PROGRESS_NONE`.
    pub progress: f32,
}

impl Default for ClassState {
    fn default() -> Self {
        Self {
            latched: false,
            confidence: 0.0,
            progress: PROGRESS_NONE,
        }
    }
}

/// Latched gesture state for one actor slot.
///
/// Latches are sticky: a single low-confidence frame does not clear a
/// previously latched class. Only arbitration (`fire`) or a tracking-lost
/// `reset` does.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActorGestureState {
    classes: [ClassState; GestureClass::COUNT],
}

impl ActorGestureState {
    #[inline]
    pub fn class(&self, class: GestureClass) -> &ClassState {
        &self.classes[class.index()]
    }

    #[inline]
    pub fn class_mut(&mut self, class: GestureClass) -> &mut ClassState {
        &mut self.classes[class.index()]
    }

    /// Fold a whole frame into the latch state.
    pub fn apply(&mut self, cfg: &ArbiterCfg, frame: &GestureFrame) {
        for obs in &frame.observations {
            self.observe(cfg, obs);
        }
    }

    /// Fold a single observation into the latch state.
    pub fn observe(&mut self, cfg: &ArbiterCfg, obs: &GestureObservation) {
        let threshold = cfg.threshold(obs.class);
        let continuous = cfg.class(obs.class).continuous;
        let confidence = sanitize_confidence(obs.confidence);
        let entry = &mut self.classes[obs.class.index()];

        if obs.detected && confidence >= threshold {
            entry.latched = true;
        }
        // Raw confidence is always recorded so a UI can show sub-threshold
        // activity; the latch itself stays put until consumed.
        entry.confidence = confidence;

        if continuous {
            if let Some(p) = obs.progress {
                entry.progress = clamp_progress(p);
            }
            if cfg.zero_progress_below_threshold
                && confidence < threshold
                && entry.progress > 0.0
            {
                entry.progress = 0.0;
            }
        }
    }

    /// Consume a class after arbitration selected it.
    pub(crate) fn fire(&mut self, class: GestureClass) {
        let entry = &mut self.classes[class.index()];
        entry.latched = false;
        entry.confidence = 0.0;
        if entry.progress != PROGRESS_NONE {
            entry.progress = 0.0;
        }
    }

    /// Zero a rival class's confidence without touching its latch.
    pub(crate) fn zero_confidence(&mut self, class: GestureClass) {
        self.classes[class.index()].confidence = 0.0;
    }

    /// Full reset to the initial lifecycle state (tracking lost).
    pub fn reset(&mut self) {
        for entry in &mut self.classes {
            *entry = ClassState::default();
        }
    }
}
