use serde::{Deserialize, Serialize};

use crate::class::GestureClass;

/// Static per-class configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ClassCfg {
    /// Minimum confidence for a detection to latch.
    pub threshold: f32,
    /// Whether this class also carries a continuous progress channel.
    pub continuous: bool,
}

/// Gate applied to the special move when the priority walk reaches it.
///
/// The reference detector's own gate compared the special confidence to
/// itself, which is always true and looks like a copy-paste defect, so the
/// intended rule is left configurable.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpecialGate {
    /// Fire whenever the special move is latched and nothing above it fired.
    /// Matches the reference detector's observable behavior.
    #[default]
    Always,
    /// Fire only if the special confidence is at least the primary strike's.
    AtLeastRival,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArbiterCfg {
    /// Per-class config, indexed by `GestureClass::index`.
    pub classes: [ClassCfg; GestureClass::COUNT],
    /// Slot capacity: maximum concurrently tracked actors.
    pub max_actors: usize,
    pub special_gate: SpecialGate,
    /// When set, a below-threshold observation also pulls the class's
    /// progress channel back to zero.
    pub zero_progress_below_threshold: bool,
}

impl ArbiterCfg {
    #[inline]
    pub fn class(&self, class: GestureClass) -> &ClassCfg {
        &self.classes[class.index()]
    }

    #[inline]
    pub fn threshold(&self, class: GestureClass) -> f32 {
        self.classes[class.index()].threshold
    }
}

impl Default for ArbiterCfg {
    fn default() -> Self {
        Self {
            classes: [
                // Punch
                ClassCfg { threshold: 0.8, continuous: true },
                // Kick
                ClassCfg { threshold: 0.5, continuous: true },
                // Haduken
                ClassCfg { threshold: 0.8, continuous: true },
                // JumpingJacks
                ClassCfg { threshold: 0.8, continuous: false },
            ],
            max_actors: 6,
            special_gate: SpecialGate::default(),
            zero_progress_below_threshold: false,
        }
    }
}
