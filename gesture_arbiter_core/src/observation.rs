use serde::{Deserialize, Serialize};

use crate::class::GestureClass;

/// One classifier result for one gesture class, one actor, one tick.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GestureObservation {
    pub class: GestureClass,
    /// Discrete detection flag reported by the classifier.
    pub detected: bool,
    /// Raw confidence in [0,1]. Out-of-contract values collapse to 0.
    pub confidence: f32,
    /// Continuous progress channel, when the classifier provides one.
    pub progress: Option<f32>,
}

impl GestureObservation {
    pub fn discrete(class: GestureClass, detected: bool, confidence: f32) -> Self {
        Self {
            class,
            detected,
            confidence,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: f32) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// One actor's observations for one input tick.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GestureFrame {
    pub observations: Vec<GestureObservation>,
}

impl GestureFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, obs: GestureObservation) {
        self.observations.push(obs);
    }
}

/// Confidence outside [0,1] is an upstream contract violation and is
/// treated as zero, not clamped to the nearer bound.
#[inline]
pub(crate) fn sanitize_confidence(x: f32) -> f32 {
    if !x.is_finite() || x < 0.0 || x > 1.0 {
        return 0.0;
    }
    x
}

/// Progress is clamped into [0,1]; non-finite input collapses to 0.
#[inline]
pub(crate) fn clamp_progress(x: f32) -> f32 {
    if !x.is_finite() {
        return 0.0;
    }
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
