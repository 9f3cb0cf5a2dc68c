mod config;
mod error;
mod particle;
mod save_data;
extern crate nalgebra as na;
extern crate serde;

pub use config::{SimulationConfig, LAYOUT_SLOTS};
pub use error::{ConfigError, SaveLoadError};
pub use particle::Particle;
pub use particle::State;
pub use save_data::DataFile;
