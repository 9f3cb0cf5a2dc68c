use na::Vector2;
use serde::{Deserialize, Serialize};

/// Structure that keeps all data for particle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// position of particle in 2d box
    pub position: Vector2<f64>,
    /// velocity of particle
    pub velocity: Vector2<f64>,
}

/// Structure that keeps current state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Particles in fixed order. Index is the only identity a particle has.
    pub particles: Vec<Particle>,
    /// Side length of the square box
    pub side: f64,
}

impl Particle {
    /// Create new particle in given position with given velocity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nalgebra::Vector2;
    /// # use ljbox_core::Particle;
    /// let particle = Particle::new(Vector2::new(1.0, 9.0), Vector2::new(0.5, 0.0));
    /// assert_eq!(particle.position.y, 9.0);
    /// assert_eq!(particle.velocity.x, 0.5);
    /// ```
    pub fn new(position: Vector2<f64>, velocity: Vector2<f64>) -> Self {
        Particle { position, velocity }
    }
}

impl State {
    pub fn new(particles: Vec<Particle>, side: f64) -> Self {
        State { particles, side }
    }

    /// Reflects every particle from the walls of the box. Component that left
    /// `[radius, side - radius]` is clamped to the nearest bound and its velocity
    /// component is negated. Axes are handled independently.
    pub fn apply_reflective_boundaries(&mut self, radius: f64) {
        let low = radius;
        let high = self.side - radius;
        self.particles.iter_mut().for_each(|particle| {
            for axis in 0..2 {
                if particle.position[axis] < low {
                    particle.position[axis] = low;
                    particle.velocity[axis] = -particle.velocity[axis];
                } else if particle.position[axis] > high {
                    particle.position[axis] = high;
                    particle.velocity[axis] = -particle.velocity[axis];
                }
            }
        });
    }

    /// Positions of all particles in index order.
    pub fn positions(&self) -> Vec<Vector2<f64>> {
        self.particles.iter().map(|particle| particle.position).collect()
    }

    /// Get minimal and maximal speed of particles.
    pub fn get_min_max_velocity(&self) -> (f64, f64) {
        let mut v_squared_max = 0.0;
        let mut v_squared_min = f64::MAX;
        self.particles.iter().for_each(|particle| {
            let velocity_squared = particle.velocity.magnitude_squared();
            if velocity_squared > v_squared_max {
                v_squared_max = velocity_squared;
            }
            if velocity_squared < v_squared_min {
                v_squared_min = velocity_squared;
            }
        });
        (v_squared_min.sqrt(), v_squared_max.sqrt())
    }
}
