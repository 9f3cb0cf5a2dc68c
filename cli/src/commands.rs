use std::io::Write;
use std::path::{Path, PathBuf};
use indicatif::ProgressBar;
use log::{debug, info, log_enabled, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use ljbox_core::{ConfigError, DataFile, SaveLoadError, SimulationConfig, State};
use ljbox_solver::initializer::InitError;
use ljbox_solver::macro_parameters::{get_center_of_mass_velocity, get_kinetic_energy, get_potential_energy, get_temperature, get_thermal_energy, get_total_momentum};
use ljbox_solver::solver::{simulate_with_observer, Integrator, Potential};
use crate::plot::draw_positions;
use crate::report::format_report;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Init(#[from] InitError),
    #[error(transparent)]
    SaveLoad(#[from] SaveLoadError),
    #[error("can't draw plot: {0}")]
    Plot(String),
    #[error("can't write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a single run needs, resolved from command line arguments.
pub struct RunOptions {
    pub config: SimulationConfig,
    pub seed: Option<u64>,
    pub integrator: Integrator,
    pub plot: Option<PathBuf>,
    pub out_file: Option<PathBuf>,
    pub pretty_print: bool,
    pub show_progress: bool,
}

pub fn load_config(path: Option<&Path>, steps: Option<usize>) -> Result<SimulationConfig, CliError> {
    let mut config = match path {
        Some(path) => SimulationConfig::load_from_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(steps) = steps {
        config.steps = steps;
    }
    config.validate()?;
    Ok(config)
}

/// One line of run diagnostics: energies, temperature, total momentum and speed range.
pub fn format_macro_parameters(stage: &str, state: &State, config: &SimulationConfig) -> String {
    let potential = Potential::from_config(config);
    let mv = get_center_of_mass_velocity(state);
    let e_kinetic = get_kinetic_energy(state, config.mass);
    let e_potential = get_potential_energy(state, &potential, config);
    let e_thermal = get_thermal_energy(state, config.mass, &mv);
    let temperature = get_temperature(e_thermal, state.particles.len(), config.k_b);
    let momentum = get_total_momentum(state, config.mass);
    let (v_min, v_max) = state.get_min_max_velocity();
    format!("{}: E_kin = {:.6e}, E_pot = {:.6e}, T = {:.3}, P = ({:.6e}, {:.6e}), |v| in [{:.4}, {:.4}]",
            stage, e_kinetic, e_potential, temperature, momentum.x, momentum.y, v_min, v_max)
}

fn log_macro_parameters(stage: &str, state: &State, config: &SimulationConfig) {
    if log_enabled!(Level::Debug) {
        debug!("{}", format_macro_parameters(stage, state, config));
    }
}

/// Seed given on the command line or a fresh one from entropy.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random::<u64>)
}

/// Initialize, integrate and return states before and after the run.
pub fn solve(options: &RunOptions, seed: u64) -> Result<(State, State), CliError> {
    let config = &options.config;
    debug!("Velocity seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let pb = if options.show_progress {
        ProgressBar::new(config.steps as u64)
    } else {
        ProgressBar::hidden()
    };
    let log_every = (config.steps / 10).max(1);
    let (initial, final_state) = simulate_with_observer(config, options.integrator, &mut rng,
                                                        |step, state| {
        pb.inc(1);
        if step % log_every == 0 {
            log_macro_parameters(&format!("step {}", step), state, config);
        }
    })?;
    pb.finish_and_clear();
    log_macro_parameters("initial", &initial, config);
    log_macro_parameters("final", &final_state, config);
    Ok((initial, final_state))
}

/// Run the simulation, write the report to `out`, then draw the plot and save
/// the snapshot if requested.
pub fn run(options: &RunOptions, out: &mut impl Write) -> Result<(State, State), CliError> {
    let seed = resolve_seed(options.seed);
    let (initial, final_state) = solve(options, seed)?;
    write!(out, "{}", format_report(&initial, &final_state))?;
    out.flush()?;
    if let Some(plot) = &options.plot {
        draw_positions(plot, &initial, &final_state, &options.config)?;
        info!("Plot saved to {}", plot.to_string_lossy());
    }
    if let Some(out_file) = &options.out_file {
        let data = DataFile::new(&options.config, Some(seed), &initial, &final_state);
        data.save_to_file(out_file, options.pretty_print)?;
        info!("States saved to {}", out_file.to_string_lossy());
    }
    Ok((initial, final_state))
}
