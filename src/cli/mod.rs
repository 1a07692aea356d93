use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use lcmgen::chromatogram::PeakProfile;

mod config;
mod generate;
mod info;
mod validate;

/// lcmgen - LCM chromatography file generator
///
/// Run as `lcmgen <INPUT> <OUTPUT>` to convert a JSON sample description,
/// or use one of the subcommands.
///
/// A bare INPUT spelled like a subcommand (`generate`, `info`, `validate`)
/// runs that subcommand; write it as `./info` or use `lcmgen generate`.
#[derive(Parser)]
#[command(name = "lcmgen")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "An INPUT named like a subcommand (generate, info, validate) is \
read as that subcommand. Pass it as ./info, or use `lcmgen generate <INPUT> <OUTPUT>`.")]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Input sample JSON file
    #[arg(value_name = "INPUT", requires = "output")]
    input: Option<PathBuf>,

    /// Output LCM file
    #[arg(value_name = "OUTPUT", requires = "input")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Peak shape used for the synthesized chromatogram.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProfileArg {
    /// Inverted parabola on a baseline of 10
    Parabolic,
    /// Gaussian (sigma 0.05) on a baseline of 50
    Gaussian,
}

impl From<ProfileArg> for PeakProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Parabolic => PeakProfile::Parabolic,
            ProfileArg::Gaussian => PeakProfile::Gaussian,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an LCM file from a sample JSON file
    Generate {
        /// Input sample JSON file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output LCM file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Chromatogram peak shape (default: parabolic)
        #[arg(short = 'p', long, value_enum)]
        profile: Option<ProfileArg>,

        /// Chromatogram baseline intensity (default: profile-dependent)
        #[arg(short = 'b', long)]
        baseline: Option<f64>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Display the contents of an LCM file
    Info {
        /// Input LCM file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Validate LCM file integrity
    Validate {
        /// Input LCM file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Prefix for the message printed when the command fails
    pub fn failure_prefix(&self) -> &'static str {
        match self.command {
            None | Some(Commands::Generate { .. }) => "Error generating LCM file",
            Some(Commands::Info { .. }) => "Error reading LCM file",
            Some(Commands::Validate { .. }) => "Error validating LCM file",
        }
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Generate {
            input,
            output,
            profile,
            baseline,
            config,
        }) => generate::run(input, output, profile.map(PeakProfile::from), baseline, config),
        Some(Commands::Info { file }) => info::run(file),
        Some(Commands::Validate { file }) => validate::run(file),
        None => match (cli.input, cli.output) {
            (Some(input), Some(output)) => generate::run(input, output, None, None, None),
            _ => anyhow::bail!("Usage: lcmgen <INPUT> <OUTPUT>"),
        },
    }
}
