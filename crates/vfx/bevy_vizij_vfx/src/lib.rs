//! Bevy adapter for Vizij VFX property binding.
//!
//! Entities carry a `VisualEffect` (the target) and a `VfxPropertyBinder`; the binders
//! themselves live in the `VfxBinderStore` resource. Every `Update` the plugin:
//!  - enables newly added property binders and handles `ResetPropertyBinder` events,
//!  - refreshes the `VfxScene` snapshot from `Time` and `VfxSceneSource` entities,
//!  - ticks each property binder against its effect (`VfxBindingSet::Apply`).
//!
//! In `PostUpdate` it detaches property binders whose `VisualEffect` was removed and
//! destroys the binders of removed `VfxPropertyBinder`s.
//!
//! Apps publishing their own scene values should run between the two sets.

pub mod components;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
use vizij_vfx_core::{Binder, BinderId, BinderKind};

pub use components::{owner_id, VfxPropertyBinder, VfxSceneSource, VisualEffect};
pub use resources::{ResetPropertyBinder, VfxBinderStore, VfxHostMode, VfxScene, VfxTickReports};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VfxBindingSet {
    Collect,
    Apply,
}

pub struct VizijVfxPlugin;

impl Plugin for VizijVfxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VfxBinderStore>()
            .init_resource::<VfxScene>()
            .init_resource::<VfxHostMode>()
            .init_resource::<VfxTickReports>()
            .add_event::<ResetPropertyBinder>()
            .configure_sets(Update, (VfxBindingSet::Collect, VfxBindingSet::Apply).chain())
            .add_systems(
                Update,
                (
                    systems::enable_new_binders_system,
                    systems::reset_binders_system,
                    systems::collect_scene_system,
                )
                    .chain()
                    .in_set(VfxBindingSet::Collect),
            )
            .add_systems(
                Update,
                systems::tick_binders_system.in_set(VfxBindingSet::Apply),
            )
            .add_systems(
                PostUpdate,
                (
                    systems::detach_removed_effects_system,
                    systems::release_removed_binders_system,
                ),
            );
    }
}

// World helpers: registry operations on the property binder of `entity`.
// They return None/false/0 when the entity has no property binder.

/// None when the entity has no property binder or the store ran out of binder ids.
pub fn add_binder(
    world: &mut World,
    entity: Entity,
    binder: impl Into<Binder>,
) -> Option<BinderId> {
    world.resource_scope(|world, mut store: Mut<VfxBinderStore>| {
        let mut pb = world.get_mut::<VfxPropertyBinder>(entity)?;
        match pb.0.add_binder(&mut store.0, binder) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!("cannot add binder to {:?}: {}", entity, err);
                None
            }
        }
    })
}

pub fn remove_binder(world: &mut World, entity: Entity, id: BinderId) -> bool {
    world.resource_scope(|world, mut store: Mut<VfxBinderStore>| {
        world
            .get_mut::<VfxPropertyBinder>(entity)
            .is_some_and(|mut pb| pb.0.remove_binder(&mut store.0, id))
    })
}

pub fn clear_binders(world: &mut World, entity: Entity) -> usize {
    world.resource_scope(|world, mut store: Mut<VfxBinderStore>| {
        world
            .get_mut::<VfxPropertyBinder>(entity)
            .map_or(0, |mut pb| pb.0.clear_binders(&mut store.0))
    })
}

pub fn remove_binders_of_kind(world: &mut World, entity: Entity, kind: BinderKind) -> usize {
    world.resource_scope(|world, mut store: Mut<VfxBinderStore>| {
        world
            .get_mut::<VfxPropertyBinder>(entity)
            .map_or(0, |mut pb| pb.0.remove_binders_of_kind(&mut store.0, kind))
    })
}

pub fn binders_of_kind(world: &World, entity: Entity, kind: BinderKind) -> Vec<BinderId> {
    let Some(pb) = world.get::<VfxPropertyBinder>(entity) else {
        return Vec::new();
    };
    let store = world.resource::<VfxBinderStore>();
    pb.0.binders_of_kind(&store.0, kind).map(|(id, _)| id).collect()
}
