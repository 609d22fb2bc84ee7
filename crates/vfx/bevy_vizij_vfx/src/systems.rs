use bevy::math::EulerRot;
use bevy::prelude::*;

use crate::components::{owner_id, VfxPropertyBinder, VfxSceneSource, VisualEffect};
use crate::resources::{ResetPropertyBinder, VfxBinderStore, VfxHostMode, VfxScene, VfxTickReports};
use vizij_vfx_core::{
    EffectHandle, EffectHost, EffectTarget, OwnerId, SceneTransform, TickContext, Value,
};

/// Resolves an owner to the `VisualEffect` on the same entity.
struct QueryEffectHost<'a, 'w, 's, 'q> {
    effects: &'a mut Query<'w, 's, &'q mut VisualEffect>,
}

impl EffectHost for QueryEffectHost<'_, '_, '_, '_> {
    fn resolve(&self, owner: OwnerId) -> Option<EffectHandle> {
        let entity = Entity::try_from_bits(owner.0).ok()?;
        self.effects
            .contains(entity)
            .then_some(EffectHandle(owner.0))
    }

    fn effect_mut(&mut self, handle: EffectHandle) -> Option<&mut dyn EffectTarget> {
        let entity = Entity::try_from_bits(handle.0).ok()?;
        let effect = self.effects.get_mut(entity).ok()?.into_inner();
        Some(&mut effect.0 as &mut dyn EffectTarget)
    }
}

fn scene_transform(global: &GlobalTransform) -> SceneTransform {
    let (scale, rotation, translation) = global.to_scale_rotation_translation();
    let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
    SceneTransform {
        position: translation.to_array(),
        angles: [x.to_degrees(), y.to_degrees(), z.to_degrees()],
        scale: scale.to_array(),
    }
}

/// Resolve the target effect of property binders inserted since the last run.
pub fn enable_new_binders_system(
    mut binders: Query<(Entity, &mut VfxPropertyBinder), Added<VfxPropertyBinder>>,
    mut effects: Query<&mut VisualEffect>,
) {
    let host = QueryEffectHost {
        effects: &mut effects,
    };
    for (entity, mut binder) in binders.iter_mut() {
        if binder.0.enable(&host).is_none() {
            warn!(
                "property binder '{}' on {:?} has no VisualEffect to bind to",
                binder.0.name, entity
            );
        }
    }
}

pub fn reset_binders_system(
    mut events: EventReader<ResetPropertyBinder>,
    mut binders: Query<&mut VfxPropertyBinder>,
    mut effects: Query<&mut VisualEffect>,
    store: Res<VfxBinderStore>,
) {
    let host = QueryEffectHost {
        effects: &mut effects,
    };
    for ResetPropertyBinder(entity) in events.read() {
        match binders.get_mut(*entity) {
            Ok(mut binder) => binder.0.reset(&store.0, &host),
            Err(_) => warn!("reset requested for {:?}, which has no property binder", entity),
        }
    }
}

/// Refresh time, plus the transforms and visibility of every `VfxSceneSource`.
/// `published` holds last frame's visibility paths so that sources which were
/// despawned or lost their visibility stop publishing.
pub fn collect_scene_system(
    time: Res<Time>,
    sources: Query<(&VfxSceneSource, &GlobalTransform, Option<&InheritedVisibility>)>,
    mut scene: ResMut<VfxScene>,
    mut published: Local<Vec<String>>,
) {
    let scene = &mut scene.0;
    scene.set_time(time.elapsed_seconds(), time.delta_seconds());
    scene.clear_transforms();
    for path in published.drain(..) {
        scene.remove_value(&path);
    }
    for (source, global, visibility) in sources.iter() {
        scene.set_transform(source.path.clone(), scene_transform(global));
        if let Some(visibility) = visibility {
            let path = format!("{}.visible", source.path);
            scene.set_value(path.clone(), Value::Bool(visibility.get()));
            published.push(path);
        }
    }
}

/// Run every property binder once against its effect.
pub fn tick_binders_system(
    mode: Res<VfxHostMode>,
    scene: Res<VfxScene>,
    mut store: ResMut<VfxBinderStore>,
    binders: Query<(Entity, &VfxPropertyBinder)>,
    mut effects: Query<&mut VisualEffect>,
    mut reports: ResMut<VfxTickReports>,
) {
    let ctx = TickContext {
        mode: mode.0,
        scene: &scene.0,
    };
    let mut host = QueryEffectHost {
        effects: &mut effects,
    };
    reports.0.clear();
    for (entity, binder) in binders.iter() {
        let report = binder.0.tick(&ctx, &mut store.0, &mut host);
        reports.0.insert(entity, report);
    }
}

/// Detach property binders whose `VisualEffect` was removed. Binders stay in the
/// store; a `ResetPropertyBinder` re-attaches once a new effect is inserted.
pub fn detach_removed_effects_system(
    mut removed: RemovedComponents<VisualEffect>,
    mut binders: Query<&mut VfxPropertyBinder>,
) {
    for entity in removed.read() {
        if let Ok(mut binder) = binders.get_mut(entity) {
            binder.0.disable();
        }
    }
}

/// Destroy the binders of property binders that were removed or despawned.
pub fn release_removed_binders_system(
    mut removed: RemovedComponents<VfxPropertyBinder>,
    mut store: ResMut<VfxBinderStore>,
) {
    for entity in removed.read() {
        let released = store.0.destroy_owner(owner_id(entity));
        if released > 0 {
            debug!("released {} binders of {:?}", released, entity);
        }
    }
}
