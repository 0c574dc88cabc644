//! Classifier adapter layer: convert name-keyed gesture results into typed
//! core observations.
//!
//! This module is intentionally small and policy-light:
//! - No IO
//! - No thresholds or arbitration rules (those live in core config)
//!
//! Sensor pipelines provide a `FrameBuilder` (or use the provided
//! `NamedResultBuilder`) to map raw classifier results into a `GestureFrame`.

use std::borrow::Cow;

use gesture_arbiter_core::{GestureClass, GestureFrame, GestureObservation};

/// One raw classifier result, as delivered by the sensor pipeline.
///
/// The supervisor does not interpret the name; it delegates to a
/// `FrameBuilder`.
#[derive(Clone, Debug)]
pub struct NamedResult<'a> {
    /// Gesture name as trained in the classifier database.
    pub name: Cow<'a, str>,
    /// Discrete detection flag. Meaningless for progress channels.
    pub detected: bool,
    pub confidence: f32,
    /// Continuous progress value, for `*Progress` channels.
    pub progress: Option<f32>,
}

impl<'a> NamedResult<'a> {
    /// A discrete detection result.
    pub fn discrete(name: impl Into<Cow<'a, str>>, detected: bool, confidence: f32) -> Self {
        Self {
            name: name.into(),
            detected,
            confidence,
            progress: None,
        }
    }

    /// A continuous progress result.
    pub fn progress(name: impl Into<Cow<'a, str>>, progress: f32) -> Self {
        Self {
            name: name.into(),
            detected: false,
            confidence: 0.0,
            progress: Some(progress),
        }
    }
}

/// Trait: map a batch of raw results into one `GestureFrame`.
pub trait FrameBuilder {
    fn build(&self, results: &[NamedResult<'_>]) -> GestureFrame;
}

/// Gesture-name table for the default builder.
#[derive(Clone, Debug)]
pub struct GestureNames {
    pub punch: &'static str,
    pub kick: &'static str,
    pub haduken: &'static str,
    pub jumping_jacks: &'static str,
    pub punch_progress: &'static str,
    pub kick_progress: &'static str,
    pub haduken_progress: &'static str,
}

impl Default for GestureNames {
    fn default() -> Self {
        Self {
            punch: "PunchStart",
            kick: "KickStart",
            haduken: "HadukStart",
            jumping_jacks: "JumpingJacks",
            punch_progress: "PunchProgress",
            kick_progress: "KickProgress",
            haduken_progress: "HadukProgress",
        }
    }
}

/// Default builder: matches results by gesture name, merges a class's
/// discrete and progress channels into a single observation, and skips
/// unrecognized names (one bad result never aborts the batch).
#[derive(Clone, Debug, Default)]
pub struct NamedResultBuilder {
    pub names: GestureNames,
}

impl NamedResultBuilder {
    fn discrete_class(&self, name: &str) -> Option<GestureClass> {
        let n = &self.names;
        if name == n.punch {
            Some(GestureClass::Punch)
        } else if name == n.kick {
            Some(GestureClass::Kick)
        } else if name == n.haduken {
            Some(GestureClass::Haduken)
        } else if name == n.jumping_jacks {
            Some(GestureClass::JumpingJacks)
        } else {
            None
        }
    }

    fn progress_class(&self, name: &str) -> Option<GestureClass> {
        let n = &self.names;
        if name == n.punch_progress {
            Some(GestureClass::Punch)
        } else if name == n.kick_progress {
            Some(GestureClass::Kick)
        } else if name == n.haduken_progress {
            Some(GestureClass::Haduken)
        } else {
            None
        }
    }
}

impl FrameBuilder for NamedResultBuilder {
    fn build(&self, results: &[NamedResult<'_>]) -> GestureFrame {
        let mut merged: [Option<GestureObservation>; GestureClass::COUNT] =
            [None; GestureClass::COUNT];

        for r in results {
            if let Some(class) = self.discrete_class(&r.name) {
                let obs = merged[class.index()]
                    .get_or_insert_with(|| GestureObservation::discrete(class, false, 0.0));
                obs.detected = r.detected;
                obs.confidence = r.confidence;
            } else if let Some(class) = self.progress_class(&r.name) {
                if let Some(p) = r.progress {
                    let obs = merged[class.index()]
                        .get_or_insert_with(|| GestureObservation::discrete(class, false, 0.0));
                    obs.progress = Some(p);
                }
            }
            // Unknown name: skipped.
        }

        let mut frame = GestureFrame::new();
        for obs in merged.into_iter().flatten() {
            frame.push(obs);
        }
        frame
    }
}
