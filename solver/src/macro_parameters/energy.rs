use na::Vector2;
use ljbox_core::{Particle, SimulationConfig, State};
use crate::solver::Potential;

fn particle_kinetic_energy(particle: &Particle, mass: f64) -> f64 {
    mass * particle.velocity.dot(&particle.velocity) / 2.0
}

fn particle_thermal_energy(particle: &Particle, mass: f64, center_of_mass_velocity: &Vector2<f64>) -> f64 {
    let velocity = particle.velocity - center_of_mass_velocity;
    mass * velocity.dot(&velocity) / 2.0
}

pub fn get_kinetic_energy(state: &State, mass: f64) -> f64 {
    state.particles.iter()
        .map(|particle| particle_kinetic_energy(particle, mass))
        .sum()
}

pub fn get_thermal_energy(state: &State, mass: f64, center_of_mass_velocity: &Vector2<f64>) -> f64 {
    state.particles.iter()
        .map(|particle| particle_thermal_energy(particle, mass, center_of_mass_velocity))
        .sum()
}

/// Sum of pair potentials. Overlapping pairs are skipped the same way the
/// force evaluator skips them.
pub fn get_potential_energy(state: &State, potential: &Potential, config: &SimulationConfig) -> f64 {
    let number_particles = state.particles.len();
    let mut energy = 0.0;
    for i in 0..number_particles {
        for j in (i + 1)..number_particles {
            let distance = (state.particles[j].position - state.particles[i].position).magnitude();
            if distance > 0.0 && distance > config.contact_distance() {
                let (u, _) = potential.get_potential_and_force(distance);
                energy += u;
            }
        }
    }
    energy
}
