use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ljbox_core::SimulationConfig;
use ljbox_solver::initializer::{initialize_particles, initialize_velocities};

pub fn corner_positions_bench(c: &mut Criterion) {
    let config = SimulationConfig::default();
    c.bench_function("corner positions", |b|
        b.iter(|| initialize_particles(black_box(&config))));
}

pub fn velocities_bench(c: &mut Criterion) {
    let config = SimulationConfig::default();
    let mut state = initialize_particles(&config).expect("Can't initialize particles");
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("maxwell-boltzmann velocities", |b|
        b.iter(|| initialize_velocities(black_box(&mut state), &config, &mut rng)));
}

criterion_group!(init_benches, corner_positions_bench, velocities_bench);
criterion_main!(init_benches);
