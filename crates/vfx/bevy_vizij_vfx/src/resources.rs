use bevy::prelude::*;
use hashbrown::HashMap;
use vizij_vfx_core::{BinderStore, HostMode, SceneValues, TickReport};

/// Storage for every binder in the world, keyed by owning entity.
#[derive(Resource, Default)]
pub struct VfxBinderStore(pub BinderStore);

/// Scene snapshot sampled by binders. Transforms are rebuilt from `VfxSceneSource`
/// entities every frame; values published by the app persist until overwritten.
#[derive(Resource, Default)]
pub struct VfxScene(pub SceneValues);

/// Play or preview. Editors set `HostMode::Preview` while not playing.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VfxHostMode(pub HostMode);

/// Report of the last tick, per property binder entity.
#[derive(Resource, Default)]
pub struct VfxTickReports(pub HashMap<Entity, TickReport>);

/// Re-resolve the effect of an entity and rebuild its binding list from the store.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetPropertyBinder(pub Entity);
