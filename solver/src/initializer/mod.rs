mod position;
mod velocity;

pub use position::*;
pub use velocity::*;
