use std::process::ExitCode;
use clap::Parser;
use log::error;
use crate::args::*;
use crate::commands::{load_config, run, RunOptions};

mod args;
mod commands;
mod plot;
mod report;


fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let config = match load_config(args.config.as_deref(), args.steps) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let options = RunOptions {
        config,
        seed: args.seed,
        integrator: args.integrate_method.into(),
        plot: if args.no_plot { None } else { Some(args.plot) },
        out_file: args.out_file,
        pretty_print: args.pretty_print,
        show_progress: true,
    };
    match run(&options, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
