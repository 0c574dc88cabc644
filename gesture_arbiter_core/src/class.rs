use serde::{Deserialize, Serialize};

/// Discrete gesture classes the arbiter tracks.
///
/// This is a closed set fixed at configuration time: thresholds and the
/// arbitration priority walk are both keyed by it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GestureClass {
    /// Primary strike.
    Punch,
    /// Secondary strike.
    Kick,
    /// Special move.
    Haduken,
    /// Whole-body move.
    JumpingJacks,
}

impl GestureClass {
    pub const COUNT: usize = 4;

    /// All classes in arbitration priority order, highest first.
    pub const PRIORITY: [GestureClass; Self::COUNT] = [
        GestureClass::Punch,
        GestureClass::Kick,
        GestureClass::Haduken,
        GestureClass::JumpingJacks,
    ];

    /// Dense index for per-class state and config tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            GestureClass::Punch => 0,
            GestureClass::Kick => 1,
            GestureClass::Haduken => 2,
            GestureClass::JumpingJacks => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GestureClass::Punch => "punch",
            GestureClass::Kick => "kick",
            GestureClass::Haduken => "haduken",
            GestureClass::JumpingJacks => "jumping_jacks",
        }
    }
}
