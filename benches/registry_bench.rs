use bevy::prelude::Entity;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dragon_core::abilities::ActiveAbilities;
use dragon_core::creatures::{self, Cindervane, Raevyx};

fn bench_registry_build(c: &mut Criterion) {
    c.bench_function("default_registry", |b| {
        b.iter(|| creatures::default_registry().unwrap())
    });
}

fn bench_lookup(c: &mut Criterion) {
    let registry = creatures::default_registry().unwrap();

    c.bench_function("lookup_hit", |b| {
        b.iter(|| registry.lookup(black_box("rift_drake_rift_step")))
    });

    c.bench_function("lookup_miss", |b| {
        b.iter(|| registry.lookup(black_box("rift_drake_sing")))
    });

    c.bench_function("lookup_as_typed", |b| {
        b.iter(|| registry.lookup_as::<Cindervane>(black_box("cindervane_fire_body")))
    });
}

fn bench_instances(c: &mut Criterion) {
    let registry = creatures::default_registry().unwrap();
    let raevyx = Raevyx::default();
    let dive = registry.lookup_as::<Raevyx>("raevyx_dive").unwrap();

    c.bench_function("instantiate_dive", |b| {
        b.iter(|| dive.create(black_box(Entity::from_raw(1)), &raevyx))
    });

    c.bench_function("dive_full_lifecycle", |b| {
        b.iter(|| {
            let mut active = ActiveAbilities::new();
            active
                .start_from_registry(&registry, Entity::from_raw(1), &raevyx, "raevyx_dive")
                .unwrap();
            let mut emitted = 0;
            for _ in 0..150 {
                emitted += active.tick(black_box(1.0 / 60.0)).len();
            }
            emitted
        })
    });
}

criterion_group!(benches, bench_registry_build, bench_lookup, bench_instances);
criterion_main!(benches);
