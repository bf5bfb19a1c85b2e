//! Task slots — the only concurrency guards in the system.
//!
//! Each external call occupies exactly one named slot: one per AI-assist
//! target field, one global slot for export. Re-entry while a slot is
//! pending is rejected synchronously at the call site (never queued), and
//! settling runs regardless of the call's outcome. There is no cancellation
//! and no timeout at this layer.

use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

/// A slot is already occupied by an outstanding call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a task is already in flight for this slot")]
pub struct SlotBusy;

/// Identifies one concurrency slot. Assist slots are per target field;
/// export is a single global slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// Enhance of the personal quote field.
    Quote,
    /// Bullet generation for one experience entry's description.
    Experience(Uuid),
    /// The single global export operation.
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    Success,
    Failure,
}

/// Observable lifecycle of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotState {
    #[default]
    Idle,
    Pending,
    Settled(SlotOutcome),
}

/// All slot states for the session. Slots that were never begun read as idle.
#[derive(Debug, Default)]
pub struct Slots {
    states: HashMap<SlotKey, SlotState>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, key: SlotKey) -> SlotState {
        self.states.get(&key).copied().unwrap_or_default()
    }

    pub fn is_pending(&self, key: SlotKey) -> bool {
        self.state(key) == SlotState::Pending
    }

    /// Occupies the slot, or rejects if a call is already outstanding.
    /// A settled slot can be begun again — one failed attempt is terminal
    /// only until the user triggers another explicit request.
    pub fn try_begin(&mut self, key: SlotKey) -> Result<(), SlotBusy> {
        if self.is_pending(key) {
            return Err(SlotBusy);
        }
        self.states.insert(key, SlotState::Pending);
        Ok(())
    }

    /// Clears the pending flag. Must run on every outcome, success or failure.
    pub fn settle(&mut self, key: SlotKey, outcome: SlotOutcome) {
        self.states.insert(key, SlotState::Settled(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_slot_reads_idle() {
        let slots = Slots::new();
        assert_eq!(slots.state(SlotKey::Quote), SlotState::Idle);
        assert!(!slots.is_pending(SlotKey::Export));
    }

    #[test]
    fn test_reentry_while_pending_is_rejected() {
        let mut slots = Slots::new();
        assert!(slots.try_begin(SlotKey::Export).is_ok());
        assert_eq!(slots.try_begin(SlotKey::Export), Err(SlotBusy));
        assert!(slots.is_pending(SlotKey::Export), "first call proceeds unaffected");
    }

    #[test]
    fn test_different_slots_are_independent() {
        let mut slots = Slots::new();
        let a = SlotKey::Experience(Uuid::new_v4());
        let b = SlotKey::Experience(Uuid::new_v4());
        assert!(slots.try_begin(a).is_ok());
        assert!(slots.try_begin(b).is_ok(), "per-field slots never block each other");
        assert!(slots.try_begin(SlotKey::Quote).is_ok());
    }

    #[test]
    fn test_settled_slot_can_begin_again() {
        let mut slots = Slots::new();
        slots.try_begin(SlotKey::Quote).unwrap();
        slots.settle(SlotKey::Quote, SlotOutcome::Failure);
        assert_eq!(
            slots.state(SlotKey::Quote),
            SlotState::Settled(SlotOutcome::Failure)
        );
        assert!(
            slots.try_begin(SlotKey::Quote).is_ok(),
            "failure is terminal only until the next explicit request"
        );
    }
}
