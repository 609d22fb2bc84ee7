use vizij_test_fixtures::{binder_setups, property_binders};
use vizij_vfx_core::{
    BinderKind, BinderSetup, BinderStore, BindingDiagnostic, EffectInstance, EffectInstances,
    OwnerId, PropertyBinder, SceneTransform, SceneValues, TickContext, TimeBinder, Value,
};

const OWNER: OwnerId = OwnerId(42);

fn orb_effect() -> EffectInstance {
    EffectInstance::new("orb")
        .with_property("clock", Value::Float(0.0))
        .with_property("attractor_position", Value::Vec3([0.0; 3]))
        .with_property("attractor_angles", Value::Vec3([0.0; 3]))
        .with_property("attractor_scale", Value::Vec3([1.0; 3]))
        .with_property("spawn_rate", Value::Float(0.0))
        .with_property("tint", Value::rgba(1.0, 1.0, 1.0, 1.0))
}

fn load_setup(name: &str) -> anyhow::Result<BinderSetup> {
    Ok(BinderSetup::from_json(&binder_setups::json(name)?)?)
}

#[test]
fn orbiting_sphere_setup_drives_every_property() -> anyhow::Result<()> {
    let mut store = BinderStore::new();
    let mut host = EffectInstances::new();
    host.attach(OWNER, orb_effect());

    let mut pb = PropertyBinder::from_setup(OWNER, load_setup("orbiting-sphere")?, &mut store)?;
    assert_eq!(pb.bindings().len(), 4);
    pb.enable(&host);

    let mut scene = SceneValues::new();
    scene.set_time(3.0, 1.0 / 60.0);
    scene.set_transform("Scene/Orbiter", SceneTransform::from_position([0.0, 1.0, -2.0]));
    scene.set_value("Scene/Spawner.rate", Value::Float(120.0));
    scene.set_value("Scene/Lamp.color", Value::rgba(1.0, 0.5, 0.0, 1.0));

    let report = pb.tick(&TickContext::play(&scene), &mut store, &mut host);
    assert_eq!(report.updated.len(), 4);
    assert!(report.diagnostics.is_empty());

    let fx = host.get(OWNER).expect("effect attached");
    assert_eq!(fx.get("clock"), Some(&Value::Float(3.0)));
    assert_eq!(fx.get("attractor_position"), Some(&Value::Vec3([0.0, 1.0, -2.0])));
    assert_eq!(fx.get("spawn_rate"), Some(&Value::Float(120.0)));
    assert_eq!(fx.get("tint"), Some(&Value::rgba(1.0, 0.5, 0.0, 1.0)));
    Ok(())
}

#[test]
fn binders_without_scene_sources_stay_idle() -> anyhow::Result<()> {
    let mut store = BinderStore::new();
    let mut host = EffectInstances::new();
    host.attach(OWNER, orb_effect());
    let mut pb = PropertyBinder::from_setup(OWNER, load_setup("orbiting-sphere")?, &mut store)?;
    pb.enable(&host);

    // Only time is available: the three sourced binders report invalid.
    let scene = SceneValues::new();
    let report = pb.tick(&TickContext::play(&scene), &mut store, &mut host);
    assert_eq!(report.updated.len(), 1);
    assert_eq!(report.invalid.len(), 3);
    assert_eq!(
        pb.binders_of_kind(&store, BinderKind::Value).count(),
        2,
        "both value binders are still registered"
    );
    Ok(())
}

#[test]
fn preview_locked_setup_skips_preview_ticks() -> anyhow::Result<()> {
    let mut store = BinderStore::new();
    let mut host = EffectInstances::new();
    host.attach(OWNER, orb_effect());
    let mut pb = PropertyBinder::from_setup(OWNER, load_setup("preview-locked")?, &mut store)?;
    assert!(!pb.execute_in_preview);
    assert!(!pb.diagnostics.log_missing);
    pb.enable(&host);

    let mut scene = SceneValues::new();
    scene.set_time(9.0, 0.1);
    let report = pb.tick(&TickContext::preview(&scene), &mut store, &mut host);
    assert!(report.skipped);
    assert_eq!(host.get(OWNER).and_then(|fx| fx.get("clock")), Some(&Value::Float(0.0)));
    Ok(())
}

#[test]
fn restored_binder_reports_each_stale_entry() -> anyhow::Result<()> {
    let mut pb: PropertyBinder = property_binders::load("stale-bindings")?;
    assert_eq!(pb.owner, OWNER);
    assert!(pb.target().is_none(), "targets are never restored");

    // Only two binders exist after the restore; id 7 was never recreated.
    let mut store = BinderStore::new();
    store.insert(OWNER, TimeBinder::new("clock").into())?;
    store.insert(OWNER, TimeBinder::new("clock").into())?;

    let mut host = EffectInstances::new();
    host.attach(OWNER, orb_effect());
    pb.enable(&host);

    let scene = SceneValues::new();
    let report = pb.tick(&TickContext::play(&scene), &mut store, &mut host);
    assert_eq!(report.updated.len(), 2);
    assert_eq!(
        report.diagnostics,
        vec![BindingDiagnostic::MissingBinder {
            index: 1,
            owner: "Restored".into()
        }]
    );

    // A reset drops the stale id.
    pb.reset(&store, &host);
    let report = pb.tick(&TickContext::play(&scene), &mut store, &mut host);
    assert_eq!(report.missing_count(), 0);
    Ok(())
}
