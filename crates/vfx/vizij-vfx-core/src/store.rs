//! Host-side storage for binders, grouped by owning entity.
//!
//! This plays the role of the host's component storage: binders live here, while a
//! `PropertyBinder` only keeps an ordered list of ids pointing into the store. An id
//! whose binder was destroyed stays in that list until the next reset and is reported
//! as an absent entry during ticks.

use hashbrown::HashMap;

use crate::binder::Binder;
use crate::error::StoreError;
use crate::ids::{BinderId, IdAllocator, OwnerId};

#[derive(Debug)]
struct StoredBinder {
    owner: OwnerId,
    binder: Binder,
}

#[derive(Default, Debug)]
pub struct BinderStore {
    entries: HashMap<BinderId, StoredBinder>,
    ids: IdAllocator,
}

impl BinderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a binder for `owner`. Fails once every `BinderId` has been handed out;
    /// ids are never recycled.
    pub fn insert(&mut self, owner: OwnerId, binder: Binder) -> Result<BinderId, StoreError> {
        let id = self.ids.alloc_binder().ok_or(StoreError::IdsExhausted)?;
        self.entries.insert(id, StoredBinder { owner, binder });
        Ok(id)
    }

    pub fn get(&self, id: BinderId) -> Option<&Binder> {
        self.entries.get(&id).map(|e| &e.binder)
    }

    pub fn get_mut(&mut self, id: BinderId) -> Option<&mut Binder> {
        self.entries.get_mut(&id).map(|e| &mut e.binder)
    }

    pub fn owner_of(&self, id: BinderId) -> Option<OwnerId> {
        self.entries.get(&id).map(|e| e.owner)
    }

    /// Remove a binder regardless of its owner. Callers that must respect ownership
    /// go through `PropertyBinder::remove_binder`.
    pub fn destroy(&mut self, id: BinderId) -> Option<Binder> {
        self.entries.remove(&id).map(|e| e.binder)
    }

    /// Ids of every binder owned by `owner`, in insertion order.
    pub fn binders_of(&self, owner: OwnerId) -> Vec<BinderId> {
        let mut ids: Vec<BinderId> = self
            .entries
            .iter()
            .filter(|(_, e)| e.owner == owner)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Destroy every binder owned by `owner`; returns how many were removed.
    pub fn destroy_owner(&mut self, owner: OwnerId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.owner != owner);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::TimeBinder;

    #[test]
    fn binders_of_keeps_insertion_order_per_owner() {
        let mut store = BinderStore::new();
        let a = store.insert(OwnerId(1), TimeBinder::new("a").into()).unwrap();
        let _other = store.insert(OwnerId(2), TimeBinder::new("b").into()).unwrap();
        let c = store.insert(OwnerId(1), TimeBinder::new("c").into()).unwrap();

        assert_eq!(store.binders_of(OwnerId(1)), vec![a, c]);
        assert_eq!(store.owner_of(c), Some(OwnerId(1)));
    }

    #[test]
    fn destroy_owner_leaves_other_owners_alone() {
        let mut store = BinderStore::new();
        store.insert(OwnerId(1), TimeBinder::new("a").into()).unwrap();
        store.insert(OwnerId(1), TimeBinder::new("b").into()).unwrap();
        let kept = store.insert(OwnerId(2), TimeBinder::new("c").into()).unwrap();

        assert_eq!(store.destroy_owner(OwnerId(1)), 2);
        assert_eq!(store.len(), 1);
        assert!(store.get(kept).is_some());
    }

    #[test]
    fn destroyed_ids_are_not_reused() {
        let mut store = BinderStore::new();
        let a = store.insert(OwnerId(1), TimeBinder::new("a").into()).unwrap();
        assert!(store.destroy(a).is_some());
        let b = store.insert(OwnerId(1), TimeBinder::new("b").into()).unwrap();
        assert_ne!(a, b);
        assert!(store.get(a).is_none());
    }

    #[test]
    fn insert_fails_when_ids_run_out() {
        let mut store = BinderStore {
            entries: HashMap::new(),
            ids: IdAllocator::starting_at(u32::MAX),
        };
        let last = store.insert(OwnerId(1), TimeBinder::new("a").into()).unwrap();
        assert_eq!(
            store.insert(OwnerId(1), TimeBinder::new("b").into()),
            Err(StoreError::IdsExhausted)
        );
        assert_eq!(store.len(), 1);
        assert!(store.get(last).is_some());
    }
}
