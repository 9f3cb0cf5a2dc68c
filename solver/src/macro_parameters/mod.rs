mod energy;
mod temperature;

pub use energy::*;
use ljbox_core::State;
use na::Vector2;
pub use temperature::*;

/// Velocity of center of mass. All particles share the same mass, so this is
/// the mean velocity.
pub fn get_center_of_mass_velocity(state: &State) -> Vector2<f64> {
    let count = state.particles.len();
    if count == 0 {
        return Vector2::zeros();
    }
    let sum: Vector2<f64> = state.particles.iter()
        .map(|particle| particle.velocity)
        .sum();
    sum / count as f64
}

/// Total momentum of the box.
pub fn get_total_momentum(state: &State, mass: f64) -> Vector2<f64> {
    state.particles.iter()
        .map(|particle| particle.velocity * mass)
        .sum()
}
