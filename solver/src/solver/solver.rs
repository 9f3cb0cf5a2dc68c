use log::debug;
use rand::Rng;
use ljbox_core::{SimulationConfig, State};
use crate::initializer::{initialize_state, InitError};
use crate::solver::{Integrator, Potential};

pub struct Solver {
    pub state: State,
    config: SimulationConfig,
    integrator: Integrator,
    potential: Potential,
}

impl Solver {
    pub fn new(state: State, config: &SimulationConfig, integrator: Integrator) -> Self {
        Self {
            state,
            config: config.clone(),
            integrator,
            potential: Potential::from_config(config),
        }
    }

    /// One integration step.
    pub fn solve(&mut self) {
        self.integrator.calculate(&mut self.state, &self.potential, &self.config);
    }

    /// Run exactly `steps` iterations. `observer` sees the state after each of them.
    pub fn run<F>(&mut self, steps: usize, mut observer: F)
    where
        F: FnMut(usize, &State),
    {
        for step in 0..steps {
            self.solve();
            observer(step + 1, &self.state);
        }
    }

    pub fn get_final_state(self) -> State {
        self.state
    }
}

/// Initialize the box from [config] and advance it `config.steps` times.
/// Returns states before and after the run.
pub fn simulate(config: &SimulationConfig, integrator: Integrator,
                rng: &mut impl Rng) -> Result<(State, State), InitError> {
    simulate_with_observer(config, integrator, rng, |_, _| {})
}

pub fn simulate_with_observer<F>(config: &SimulationConfig, integrator: Integrator,
                                 rng: &mut impl Rng, observer: F) -> Result<(State, State), InitError>
where
    F: FnMut(usize, &State),
{
    let initial = initialize_state(config, rng)?;
    let mut solver = Solver::new(initial.clone(), config, integrator);
    debug!("Running {} steps with dt = {} using {:?}", config.steps, config.delta_time, integrator);
    solver.run(config.steps, observer);
    Ok((initial, solver.get_final_state()))
}
