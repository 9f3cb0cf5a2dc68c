use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use ljbox_core::{SimulationConfig, State};
use crate::initializer::{initialize_particles, InitError};

/// Sample every velocity component from a Maxwell-Boltzmann like normal
/// distribution. Components are drawn particle by particle, x before y.
pub fn initialize_velocities(state: &mut State, config: &SimulationConfig,
                             rng: &mut impl Rng) -> Result<(), InitError> {
    let sigma = config.thermal_sigma();
    let normal_distribution = Normal::new(0.0f64, sigma)
        .map_err(|_| InitError::BadVelocityDistribution(sigma))?;
    for particle in &mut state.particles {
        let x = normal_distribution.sample(rng);
        let y = normal_distribution.sample(rng);
        particle.velocity.x = x;
        particle.velocity.y = y;
    }
    debug!("Initialized {} velocities with sigma = {:.6}", state.particles.len(), sigma);
    Ok(())
}

/// Positions and velocities ready for the integrator.
pub fn initialize_state(config: &SimulationConfig, rng: &mut impl Rng) -> Result<State, InitError> {
    let mut state = initialize_particles(config)?;
    initialize_velocities(&mut state, config, rng)?;
    Ok(state)
}
