use serde::{Deserialize, Serialize};
use ljbox_core::{SimulationConfig, State};
use crate::solver::{compute_accelerations, resolve_collisions, Potential};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Integrator {
    /// Velocity Verlet variant of the box model: the first half-kick scales
    /// acceleration by `dt^2`, the second one by `dt`. Trajectories depend on
    /// this asymmetry, keep it.
    #[default]
    VelocityVerletLike,
    /// Canonical velocity Verlet, both half-kicks use `dt`.
    /// <https://doi.org/10.1103/PhysRev.159.98>
    VerletMethod,
}

impl Integrator {
    fn first_kick_factor(&self, delta_time: f64) -> f64 {
        match self {
            Integrator::VelocityVerletLike => 0.5 * delta_time * delta_time,
            Integrator::VerletMethod => 0.5 * delta_time,
        }
    }

    /// Just integrator iteration: kick, drift, reflect from walls, resolve
    /// collisions, kick again with forces in new positions.
    pub fn calculate(&self, state: &mut State, potential: &Potential, config: &SimulationConfig) {
        let delta_time = config.delta_time;
        let accelerations = compute_accelerations(state, potential, config);
        let first_kick = self.first_kick_factor(delta_time);
        state.particles.iter_mut().zip(&accelerations).for_each(|(particle, acceleration)| {
            particle.velocity += acceleration * first_kick;
        });
        state.particles.iter_mut().for_each(|particle| {
            let velocity = particle.velocity;
            particle.position += velocity * delta_time;
        });
        state.apply_reflective_boundaries(config.radius);
        resolve_collisions(state, config);
        let accelerations = compute_accelerations(state, potential, config);
        state.particles.iter_mut().zip(&accelerations).for_each(|(particle, acceleration)| {
            particle.velocity += acceleration * 0.5 * delta_time;
        });
    }
}
