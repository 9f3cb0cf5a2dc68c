use log::trace;
use ljbox_core::{SimulationConfig, State};

/// Elastic impulse for every overlapping pair whose normal relative velocity is
/// negative. Velocities change, positions are not separated.
/// Returns number of applied impulses.
pub fn resolve_collisions(state: &mut State, config: &SimulationConfig) -> usize {
    let number_particles = state.particles.len();
    let inverse_mass = 1.0 / config.mass;
    let mut impulses = 0;
    for i in 0..number_particles {
        for j in (i + 1)..number_particles {
            let r = state.particles[j].position - state.particles[i].position;
            let distance = r.magnitude();
            // coincident pair has no normal
            if distance == 0.0 || distance >= config.contact_distance() {
                continue;
            }
            let normal = r / distance;
            let relative_velocity = state.particles[i].velocity - state.particles[j].velocity;
            let normal_velocity = relative_velocity.dot(&normal);
            if normal_velocity < 0.0 {
                let impulse = 2.0 * normal_velocity / (inverse_mass + inverse_mass);
                state.particles[i].velocity -= normal * impulse * inverse_mass;
                state.particles[j].velocity += normal * impulse * inverse_mass;
                impulses += 1;
                trace!("Collision {} <-> {}: normal velocity {:.6}", i, j, normal_velocity);
            }
        }
    }
    impulses
}
