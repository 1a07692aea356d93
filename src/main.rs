//! # lcmgen
//!
//! Command-line generator for LCM chromatography import files.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a sample description
//! lcmgen sample.json sample.lcm
//!
//! # Same, with a Gaussian chromatogram
//! lcmgen generate sample.json sample.lcm --profile gaussian
//!
//! # Inspect or check a generated file
//! lcmgen info sample.lcm
//! lcmgen validate sample.lcm
//! ```

use clap::Parser;

mod cli;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    cli::init_logging(cli.verbosity());

    let prefix = cli.failure_prefix();
    if let Err(e) = cli::dispatch(cli) {
        eprintln!("{}: {:#}", prefix, e);
        std::process::exit(1);
    }
}
