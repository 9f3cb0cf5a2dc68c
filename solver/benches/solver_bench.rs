use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ljbox_core::SimulationConfig;
use ljbox_solver::initializer::initialize_state;
use ljbox_solver::solver::{compute_accelerations, simulate, Integrator, Potential};

pub fn lennard_jones_bench(c: &mut Criterion) {
    let lennard_jones = Potential::new_lennard_jones(4.0, 1e-3);
    c.bench_function("lennard jones", |b| b.iter(|| lennard_jones.get_potential_and_force(black_box(5.0))));
}

pub fn compute_accelerations_bench(c: &mut Criterion) {
    let config = SimulationConfig::default();
    let potential = Potential::from_config(&config);
    let state = initialize_state(&config, &mut StdRng::seed_from_u64(0))
        .expect("Can't initialize state");
    c.bench_function("accelerations 4 particles", |b| b.iter(||
        compute_accelerations(black_box(&state), &potential, &config)));
}

pub fn full_run_bench(c: &mut Criterion) {
    let config = SimulationConfig::default();
    c.bench_function("full run 5000 steps", |b| b.iter(|| {
        let mut rng = StdRng::seed_from_u64(0);
        simulate(black_box(&config), Integrator::default(), &mut rng)
            .expect("Can't simulate")
    }));
}

criterion_group!(solver_benches, lennard_jones_bench,
    compute_accelerations_bench, full_run_bench);
criterion_main!(solver_benches);
