use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::ConfigError;

/// Number of slots in the corner layout used for initial positions.
pub const LAYOUT_SLOTS: usize = 4;

/// Immutable parameters of a single run. Every stage of the simulation takes
/// its constants from here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Side length of the square box
    pub side: f64,
    /// Number of particles
    pub particle_count: usize,
    /// Time step
    pub delta_time: f64,
    /// Number of integration steps
    pub steps: usize,
    /// Depth of the Lennard-Jones well
    pub epsilon: f64,
    /// Distance where the Lennard-Jones potential is zero
    pub sigma: f64,
    /// Mass of every particle
    pub mass: f64,
    /// Radius of every particle
    pub radius: f64,
    /// Temperature in Kelvin
    pub temperature: f64,
    /// Boltzmann constant in program units
    pub k_b: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            side: 10.0,
            particle_count: 4,
            delta_time: 0.01,
            steps: 5000,
            epsilon: 1e-3,
            sigma: 4.0,
            mass: 1e-4,
            radius: 0.01,
            temperature: 300.0,
            k_b: 1e-5,
        }
    }
}

fn invalid(name: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        reason: reason.into(),
    }
}

impl SimulationConfig {
    /// Load config from json file. Missing fields take their default values.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: SimulationConfig = serde_json::from_reader(BufReader::new(file))?;
        debug!("Loaded config from {}: {:?}", path.to_string_lossy(), config);
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path, pretty_print: bool) -> Result<(), ConfigError> {
        let mut buf_writer = BufWriter::new(File::create(path)?);
        if pretty_print {
            serde_json::to_writer_pretty(&mut buf_writer, self)?;
        } else {
            serde_json::to_writer(&mut buf_writer, self)?;
        }
        buf_writer.flush()?;
        Ok(())
    }

    /// Check that parameters describe a box particles can actually live in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count != LAYOUT_SLOTS {
            return Err(invalid("particle_count",
                               format!("only {} particles are supported, got {}",
                                       LAYOUT_SLOTS, self.particle_count)));
        }
        if !(self.radius > 0.0) {
            return Err(invalid("radius", "must be positive"));
        }
        if !(self.side > 2.0 * self.radius) {
            return Err(invalid("side", "must be larger than particle diameter"));
        }
        if !(self.mass > 0.0) {
            return Err(invalid("mass", "must be positive"));
        }
        if !(self.delta_time > 0.0) {
            return Err(invalid("delta_time", "must be positive"));
        }
        if !(self.sigma > 0.0) {
            return Err(invalid("sigma", "must be positive"));
        }
        if !(self.epsilon >= 0.0) {
            return Err(invalid("epsilon", "can't be negative"));
        }
        if !(self.temperature >= 0.0) {
            return Err(invalid("temperature", "can't be negative"));
        }
        if !(self.k_b >= 0.0) {
            return Err(invalid("k_b", "can't be negative"));
        }
        Ok(())
    }

    /// Standard deviation of a single velocity component.
    /// Mean speed `sqrt(2 k_b T / m)` spread over two axes.
    pub fn thermal_sigma(&self) -> f64 {
        let v_mean = f64::sqrt(2.0 * self.k_b * self.temperature / self.mass);
        v_mean / f64::sqrt(2.0)
    }

    /// Distance below which two particles overlap.
    pub fn contact_distance(&self) -> f64 {
        2.0 * self.radius
    }
}
