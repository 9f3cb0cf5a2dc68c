mod collision;
mod force;
mod integrator;
mod potential;
mod solver;

pub use collision::*;
pub use force::*;
pub use integrator::*;
pub use potential::*;
pub use solver::*;
