/// Temperature from thermal energy by equipartition in two dimensions.
pub fn get_temperature(thermal_energy: f64, number_particles: usize, k_b: f64) -> f64 {
    thermal_energy / (number_particles as f64 * k_b)
}
