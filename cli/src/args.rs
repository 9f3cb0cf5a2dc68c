use std::path::PathBuf;
use clap::Parser;
use clap::ValueEnum;
use ljbox_solver::solver::Integrator;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// json file with simulation parameters, defaults are used for missing fields
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// seed for initial velocities, random if not set
    #[arg(short = 's', long)]
    pub seed: Option<u64>,
    /// override number of integration steps
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,
    /// method of integration
    #[arg(short = 'i', long, value_enum, default_value_t = IntegratorChoose::VelocityVerletLike)]
    pub integrate_method: IntegratorChoose,
    /// file for the scatter plot
    #[arg(short = 'p', long, default_value = "positions.svg")]
    pub plot: PathBuf,
    /// don't draw the plot
    #[arg(long)]
    pub no_plot: bool,
    /// save config, initial and final states to json file
    #[arg(short = 'o', long)]
    pub out_file: Option<PathBuf>,
    /// pretty print json output
    #[arg(long)]
    pub pretty_print: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum IntegratorChoose {
    /// dt^2 in the first half-kick, dt in the second
    VelocityVerletLike,
    /// I think you know what it is
    VerletMethod,
}

impl From<IntegratorChoose> for Integrator {
    fn from(value: IntegratorChoose) -> Self {
        match value {
            IntegratorChoose::VelocityVerletLike => Integrator::VelocityVerletLike,
            IntegratorChoose::VerletMethod => Integrator::VerletMethod,
        }
    }
}
