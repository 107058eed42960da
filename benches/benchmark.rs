use camera_extrinsic_init::synthetic::{SyntheticRig, SyntheticRigConfig};
use camera_extrinsic_init::{MutualObservationGraph, extract_co_observations, propagate};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn large_rig() -> SyntheticRig {
    SyntheticRig::generate(&SyntheticRigConfig {
        camera_num: 32,
        sample_num: 2000,
        cameras_per_sample: 4,
        rotation_noise_rad: 0.001,
        translation_noise_meter: 0.001,
        ..Default::default()
    })
}

fn bench_graph_build(c: &mut Criterion) {
    let rig = large_rig();
    c.bench_function("graph_build", |b| {
        b.iter(|| MutualObservationGraph::build(&extract_co_observations(black_box(&rig.samples))))
    });
}

fn bench_propagate(c: &mut Criterion) {
    let rig = large_rig();
    let graph = MutualObservationGraph::build(&extract_co_observations(&rig.samples));
    c.bench_function("propagate", |b| {
        b.iter(|| propagate(black_box(&graph), "cam0"))
    });
}

criterion_group!(benches, bench_graph_build, bench_propagate);
criterion_main!(benches);
