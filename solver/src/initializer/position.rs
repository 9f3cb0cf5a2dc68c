use na::Vector2;
use thiserror::Error;
use ljbox_core::{ConfigError, Particle, SimulationConfig, State};

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("can't build velocity distribution with sigma = {0}")]
    BadVelocityDistribution(f64),
}

/// Fractions of the box side used for the initial layout, in particle order.
const CORNER_LAYOUT: [(f64, f64); 4] = [
    (0.9, 0.9),
    (0.1, 0.1),
    (0.1, 0.9),
    (0.9, 0.1),
];

/// Positions of the corner layout for a box with side `side`.
pub fn corner_positions(side: f64) -> Vec<Vector2<f64>> {
    CORNER_LAYOUT.iter()
        .map(|(x, y)| Vector2::new(x * side, y * side))
        .collect()
}

/// Create particles at rest in corner-biased positions inside the box from [config].
pub fn initialize_particles(config: &SimulationConfig) -> Result<State, InitError> {
    config.validate()?;
    let particles = corner_positions(config.side)
        .into_iter()
        .take(config.particle_count)
        .map(|position| Particle::new(position, Vector2::zeros()))
        .collect();
    Ok(State::new(particles, config.side))
}
