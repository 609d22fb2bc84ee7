use bevy::prelude::*;
use bevy_vizij_vfx::{VfxBinderStore, VfxHostMode, VfxScene, VfxTickReports, VizijVfxPlugin};
use vizij_vfx_core::HostMode;

#[test]
fn plugin_inserts_resources() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(VizijVfxPlugin);

    assert!(app.world().get_resource::<VfxBinderStore>().is_some());
    assert!(app.world().get_resource::<VfxScene>().is_some());
    assert!(app.world().get_resource::<VfxTickReports>().is_some());
    assert_eq!(
        *app.world().resource::<VfxHostMode>(),
        VfxHostMode(HostMode::Play)
    );
}

/// it should run an empty frame without any property binders
#[test]
fn updates_without_binders() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(VizijVfxPlugin);
    for _ in 0..3 {
        app.update();
    }
    assert!(app.world().resource::<VfxTickReports>().0.is_empty());
}
