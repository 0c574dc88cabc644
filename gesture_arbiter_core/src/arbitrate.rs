use crate::cfg::{ArbiterCfg, SpecialGate};
use crate::class::GestureClass;
use crate::state::ActorGestureState;

/// Select at most one winning gesture class for this tick and consume its
/// latch (edge-triggered: a latch fires once, not once per tick).
///
/// Priority walk, highest first: punch, kick, haduken, jumping jacks.
/// The punch/haduken pair additionally competes on confidence: punch yields
/// when the special move is currently the more confident of the two, and
/// the winner of that pair zeroes the loser's confidence. Latches that do
/// not fire survive to the next tick.
///
/// Pure with respect to its inputs; callable per slot in any order.
pub fn arbitrate(cfg: &ArbiterCfg, state: &mut ActorGestureState) -> Option<GestureClass> {
    let punch = *state.class(GestureClass::Punch);
    let haduken = *state.class(GestureClass::Haduken);

    if punch.latched && punch.confidence >= haduken.confidence {
        state.fire(GestureClass::Punch);
        state.zero_confidence(GestureClass::Haduken);
        return Some(GestureClass::Punch);
    }

    if state.class(GestureClass::Kick).latched {
        state.fire(GestureClass::Kick);
        return Some(GestureClass::Kick);
    }

    let special_open = match cfg.special_gate {
        SpecialGate::Always => true,
        SpecialGate::AtLeastRival => haduken.confidence >= punch.confidence,
    };
    if haduken.latched && special_open {
        state.fire(GestureClass::Haduken);
        state.zero_confidence(GestureClass::Punch);
        return Some(GestureClass::Haduken);
    }

    if state.class(GestureClass::JumpingJacks).latched {
        state.fire(GestureClass::JumpingJacks);
        return Some(GestureClass::JumpingJacks);
    }

    None
}
