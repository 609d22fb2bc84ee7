use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vizij_vfx_core::{
    BinderStore, EffectInstance, EffectInstances, OwnerId, PropertyBinder, SceneTransform,
    SceneValues, TickContext, TimeBinder, TransformBinder, Value, ValueBinder, ValueKind,
};

const OWNER: OwnerId = OwnerId(1);

fn setup(binders: usize) -> (PropertyBinder, BinderStore, EffectInstances, SceneValues) {
    let mut store = BinderStore::new();
    let mut effect = EffectInstance::new("bench").with_property("clock", Value::Float(0.0));
    let mut scene = SceneValues::new();
    scene.set_time(1.0, 1.0 / 60.0);
    let mut pb = PropertyBinder::new(OWNER, "Bench");

    for i in 0..binders {
        match i % 3 {
            0 => {
                pb.add_binder(&mut store, TimeBinder::new("clock")).expect("bench binder ids");
            }
            1 => {
                let prop = format!("rate{i}");
                let source = format!("Scene/Rate{i}");
                effect.declare(prop.clone(), Value::Float(0.0));
                scene.set_value(source.clone(), Value::Float(i as f32));
                pb.add_binder(&mut store, ValueBinder::new(prop, source, ValueKind::Float))
                    .expect("bench binder ids");
            }
            _ => {
                let prop = format!("target{i}");
                let source = format!("Scene/Target{i}");
                for suffix in ["_position", "_angles", "_scale"] {
                    effect.declare(format!("{prop}{suffix}"), Value::Vec3([0.0; 3]));
                }
                scene.set_transform(source.clone(), SceneTransform::from_position([i as f32; 3]));
                pb.add_binder(&mut store, TransformBinder::new(prop, source))
                    .expect("bench binder ids");
            }
        }
    }

    let mut host = EffectInstances::new();
    host.attach(OWNER, effect);
    pb.enable(&host);
    (pb, store, host, scene)
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("property_binder_tick");
    for &n in &[8usize, 64, 512] {
        let (pb, mut store, mut host, scene) = setup(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let report = pb.tick(&TickContext::play(&scene), &mut store, &mut host);
                black_box(report.updated.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
