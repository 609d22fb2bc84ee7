use bevy::prelude::*;
use vizij_vfx_core::{EffectInstance, OwnerId, PropertyBinder};

/// Owner id of an entity in the binder store.
pub fn owner_id(entity: Entity) -> OwnerId {
    OwnerId(entity.to_bits())
}

/// The effect instance that property binders on the same entity write into.
#[derive(Component, Debug, Clone, Default)]
pub struct VisualEffect(pub EffectInstance);

/// Property binder attached to an entity. Its binders live in `VfxBinderStore`.
/// Insert it together with (or after) the entity's `VisualEffect`; otherwise send a
/// `ResetPropertyBinder` once the effect exists.
#[derive(Component, Debug, Clone)]
pub struct VfxPropertyBinder(pub PropertyBinder);

impl VfxPropertyBinder {
    pub fn for_entity(entity: Entity, name: impl Into<String>) -> Self {
        Self(PropertyBinder::new(owner_id(entity), name))
    }
}

/// Publishes this entity's global transform (and visibility, when present) into the
/// scene snapshot under `path`.
#[derive(Component, Debug, Clone)]
pub struct VfxSceneSource {
    pub path: String,
}

impl VfxSceneSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
