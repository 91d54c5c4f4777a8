// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use mcs_robustness::matrix::McsFamily;
use mcs_robustness::probability::{poisson_weight, write_report};
use mcs_robustness::scheduler::TerminalProgress;
use mcs_robustness::{run_pipeline, EngineError, RunConfig};

/// Calculate failure probability of the network for increasing numbers of
/// knockouts.
#[derive(Parser)]
#[command(name = "failure-probability", version)]
struct Args {
    /// MCS file in form of 000110, one cutset per line
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Maximum number of knockouts [default: number of reactions]
    #[arg(short = 'm', long = "max-knockouts")]
    max_knockouts: Option<usize>,

    /// Lambda, the weighting factor (> 0)
    #[arg(short = 'l', long = "lambda", default_value_t = 0.5)]
    lambda: f64,

    /// Number of worker threads
    #[arg(short = 't', long = "threads", default_value_t = 1)]
    threads: usize,

    /// Output file for the report
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("could not initialize logging: {e}");
            }
        }
        Err(e) => eprintln!("could not configure logging: {e}"),
    }
}

fn run(args: &Args) -> Result<(), EngineError> {
    let input = File::open(&args.input)?;
    let family = McsFamily::read(BufReader::new(input))?;

    let config = RunConfig {
        max_knockouts: args.max_knockouts,
        lambda: args.lambda,
        worker_count: args.threads,
    };
    let progress = TerminalProgress::new();
    let report = run_pipeline(&family, &config, &progress, poisson_weight)?;

    let mut output = File::create(&args.output)?;
    write_report(&report, &mut output)?;
    write_report(&report, &mut io::stdout().lock())?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}
