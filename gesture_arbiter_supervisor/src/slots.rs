use gesture_arbiter_core::{ActorId, ArbiterError};

/// Actor-to-slot table.
///
/// Slots are small integers in `0..capacity`, each bound to at most one live
/// actor. A binding is stable for the lifetime of that actor's tracking
/// session; a freed slot goes to the next unseen actor, lowest-numbered
/// free slot first.
#[derive(Clone, Debug)]
pub struct SlotMap {
    slots: Vec<Option<ActorId>>,
}

impl SlotMap {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Existing binding for `actor`, if any.
    pub fn slot_of(&self, actor: ActorId) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(actor))
    }

    /// Actor bound at `slot`, if any.
    pub fn actor_at(&self, slot: usize) -> Option<ActorId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Return the bound slot for `actor`, binding the lowest-numbered free
    /// slot on first sighting.
    pub fn resolve(&mut self, actor: ActorId) -> Result<usize, ArbiterError> {
        if let Some(slot) = self.slot_of(actor) {
            return Ok(slot);
        }
        match self.slots.iter().position(Option::is_none) {
            Some(slot) => {
                self.slots[slot] = Some(actor);
                Ok(slot)
            }
            None => Err(ArbiterError::CapacityExceeded {
                actor,
                capacity: self.capacity(),
            }),
        }
    }

    /// Free `actor`'s slot. Returns the freed slot, or `None` if the actor
    /// was not bound.
    pub fn release(&mut self, actor: ActorId) -> Option<usize> {
        let slot = self.slot_of(actor)?;
        self.slots[slot] = None;
        Some(slot)
    }

    pub(crate) fn clear(&mut self) {
        for s in &mut self.slots {
            *s = None;
        }
    }

    /// Bind `actor` at a specific slot (snapshot restore path).
    pub(crate) fn bind(&mut self, slot: usize, actor: ActorId) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = Some(actor);
                true
            }
            None => false,
        }
    }
}
