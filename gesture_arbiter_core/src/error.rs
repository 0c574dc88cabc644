use thiserror::Error;

use crate::ActorId;

/// Errors surfaced by the arbitration stack.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArbiterError {
    /// More concurrent actors than configured slots. The offending frame is
    /// dropped; already-bound slots are unaffected.
    #[error("no free slot for actor {actor} (capacity {capacity})")]
    CapacityExceeded { actor: ActorId, capacity: usize },

    /// A slot was used without a bound actor. This is a caller contract
    /// violation (resolve first), fatal to the call, not retryable.
    #[error("slot {slot} has no bound actor")]
    UnboundSlot { slot: usize },
}
