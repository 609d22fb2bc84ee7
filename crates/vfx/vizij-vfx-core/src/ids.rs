//! Identifiers and a simple allocator for binders and their owners.

use serde::{Deserialize, Serialize};

/// Identifies one binder inside a `BinderStore`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct BinderId(pub u32);

/// Identifies the entity that owns a property binder and its binders.
/// Hosts pick the encoding (Bevy uses `Entity::to_bits`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub u64);

/// Monotonic allocator for BinderId. Ids are never reused within one store, so a
/// stale id left in a binding list can't alias a newer binder. Once `u32::MAX` has
/// been handed out the allocator is exhausted instead of wrapping.
#[derive(Debug)]
pub struct IdAllocator {
    next_binder: Option<u32>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next_binder: Some(0),
        }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next: u32) -> Self {
        Self {
            next_binder: Some(next),
        }
    }

    /// Next free id, or None when the id space is used up.
    #[inline]
    pub fn alloc_binder(&mut self) -> Option<BinderId> {
        let id = self.next_binder?;
        self.next_binder = id.checked_add(1);
        Some(BinderId(id))
    }
}
