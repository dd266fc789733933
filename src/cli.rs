//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::build::cmake::BuildType;
use crate::build::{self, BuildRequest};

/// Chtholly build driver
///
/// Configures and builds the Chtholly compiler with CMake.
#[derive(Parser, Debug)]
#[command(name = "chtholly-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Build configuration ("debug" selects Debug, anything else Release)
    pub mode: Option<String>,

    /// Extra arguments, accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,

    /// Remove the build directory before configuring
    #[arg(long)]
    pub clean: bool,

    /// Extra CMake cache entries, forwarded to configure as -DNAME=VALUE
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE")]
    pub defines: Vec<String>,

    /// Number of parallel build jobs
    #[arg(short, long, default_value_t = 8)]
    pub jobs: usize,

    /// Echo CMake paths and per-phase timings
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the build described by the parsed arguments
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            console::set_colors_enabled(false);
        }

        let request = BuildRequest {
            build_type: BuildType::from_arg(self.mode.as_deref()),
            clean: self.clean,
            defines: self.defines,
            jobs: self.jobs,
            verbose: self.verbose,
        };

        build::run(&request)
    }
}
