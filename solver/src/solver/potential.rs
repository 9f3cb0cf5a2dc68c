use serde::{Deserialize, Serialize};
use ljbox_core::SimulationConfig;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Potential {
    /// 12-6 potential without cut-off
    LennardJones {
        sigma: f64,
        eps: f64,
    },
}

impl Potential {
    pub fn new_lennard_jones(sigma: f64, eps: f64) -> Potential {
        Potential::LennardJones { sigma, eps }
    }

    pub fn from_config(config: &SimulationConfig) -> Potential {
        Potential::new_lennard_jones(config.sigma, config.epsilon)
    }

    /// Potential energy of a pair and the force magnitude factor at distance `r`.
    /// Force is `24 eps [2 (sigma/r)^12 - (sigma/r)^6] / r`.
    pub fn get_potential_and_force(&self, r: f64) -> (f64, f64) {
        match *self {
            Potential::LennardJones { sigma, eps } => {
                let sigma_r = sigma / r;
                let sigma_r_6 = sigma_r.powi(6);
                let sigma_r_12 = sigma_r_6 * sigma_r_6;
                (
                    4.0f64 * eps * (sigma_r_12 - sigma_r_6),
                    24.0f64 * eps * (2.0f64 * sigma_r_12 - sigma_r_6) / r,
                )
            }
        }
    }
}
