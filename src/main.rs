//! Chtholly build driver
//!
//! A native build driver for the Chtholly compiler. It wraps CMake's
//! two-phase configure/build interface and reports where the produced
//! executable is expected to land.
//!
//! ## Architecture
//!
//! ```text
//! CLI → build/ module → CMake (configure, then build)
//! ```

mod build;
mod cli;
mod error;
mod exec;
mod utils;

use clap::Parser;

use cli::Cli;
use error::{hints, BuildError};
use utils::terminal;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        match err.downcast_ref::<BuildError>() {
            // The failing phase already reported itself; hand the child's
            // exit code to the caller unchanged.
            Some(BuildError::StepFailed { code, .. }) => std::process::exit(*code),
            Some(BuildError::CmakeNotFound) => {
                terminal::print_error(&err.to_string());
                println!("\n{}", hints::cmake());
                std::process::exit(1);
            }
            None => {
                terminal::print_error(&format!("{:#}", err));
                std::process::exit(1);
            }
        }
    }
}
