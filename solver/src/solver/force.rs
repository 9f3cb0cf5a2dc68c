use na::Vector2;
use ljbox_core::{Particle, SimulationConfig, State};
use crate::solver::Potential;

/// Acceleration that particle `p2` gives to particle `p1`. The partner receives
/// the same vector with opposite sign.
///
/// Returns `None` for coincident or overlapping pairs: those are left to the
/// collision resolver. Note that the raw displacement `r2 - r1` is scaled by the
/// force factor, not its unit vector.
pub fn pair_acceleration(p1: &Particle, p2: &Particle,
                         potential: &Potential, config: &SimulationConfig) -> Option<Vector2<f64>> {
    let r = p2.position - p1.position;
    let distance = r.magnitude();
    if distance > 0.0 && distance > config.contact_distance() {
        let (_, force) = potential.get_potential_and_force(distance);
        Some(r * force / config.mass)
    } else {
        None
    }
}

/// Accelerations of all particles from pairwise Lennard-Jones interaction.
pub fn compute_accelerations(state: &State, potential: &Potential,
                             config: &SimulationConfig) -> Vec<Vector2<f64>> {
    let number_particles = state.particles.len();
    let mut accelerations = vec![Vector2::zeros(); number_particles];
    for i in 0..number_particles {
        for j in (i + 1)..number_particles {
            let p1 = &state.particles[i];
            let p2 = &state.particles[j];
            if let Some(acceleration) = pair_acceleration(p1, p2, potential, config) {
                accelerations[i] += acceleration;
                accelerations[j] -= acceleration;
            }
        }
    }
    accelerations
}
