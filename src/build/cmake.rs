//! CMake configuration and execution
//!
//! This module handles invoking CMake for the configure and build steps.
//! The driver never inspects the generated build tree; CMake owns it.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::{BuildError, BuildStep};
use crate::exec::subprocess::run_command;
use crate::utils::platform::HostPlatform;
use crate::utils::terminal;

/// CMake build type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildType {
    Debug,
    #[default]
    Release,
}

impl BuildType {
    /// Resolve the build type from the optional positional argument.
    ///
    /// Only the case-insensitive string "debug" selects Debug; any other
    /// value, or no value at all, selects Release.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(s) if s.eq_ignore_ascii_case("debug") => BuildType::Debug,
            _ => BuildType::Release,
        }
    }
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildType::Debug => write!(f, "Debug"),
            BuildType::Release => write!(f, "Release"),
        }
    }
}

/// CMake configuration for one configure + build cycle
#[derive(Debug)]
pub struct CMakeConfig {
    /// Source directory (where CMakeLists.txt is located)
    source_dir: PathBuf,
    /// Build directory
    build_dir: PathBuf,
    /// Build type
    build_type: BuildType,
    /// Generator architecture (-A), Windows multi-config generators only
    generator_arch: Option<String>,
    /// CMake cache entries (-D options), forwarded verbatim
    defines: Vec<String>,
    /// Number of parallel jobs
    jobs: usize,
    /// Echo per-phase timings
    verbose: bool,
}

impl CMakeConfig {
    /// Create a new CMake configuration
    pub fn new(source_dir: PathBuf, build_dir: PathBuf) -> Self {
        Self {
            source_dir,
            build_dir,
            build_type: BuildType::Release,
            generator_arch: None,
            defines: Vec::new(),
            jobs: 8,
            verbose: false,
        }
    }

    /// Set the build type
    pub fn build_type(mut self, build_type: BuildType) -> Self {
        self.build_type = build_type;
        self
    }

    /// Take the generator architecture from the host platform
    pub fn platform(mut self, host: HostPlatform) -> Self {
        self.generator_arch = host.generator_arch().map(str::to_string);
        self
    }

    /// Set extra cache entries, each in NAME=VALUE form
    pub fn defines(mut self, defines: Vec<String>) -> Self {
        self.defines = defines;
        self
    }

    /// Set number of parallel jobs
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Locate the CMake executable, honoring the CHTHOLLY_CMAKE override
    /// before falling back to a PATH lookup.
    pub fn find_cmake() -> Result<PathBuf> {
        if let Ok(cmake) = env::var("CHTHOLLY_CMAKE") {
            return Ok(PathBuf::from(cmake));
        }
        which::which("cmake").map_err(|_| BuildError::CmakeNotFound.into())
    }

    /// Arguments for the configure step
    pub fn configure_args(&self) -> Vec<String> {
        let mut args = vec![
            "-S".to_string(),
            self.source_dir.display().to_string(),
            "-B".to_string(),
            self.build_dir.display().to_string(),
        ];

        if let Some(arch) = &self.generator_arch {
            args.push("-A".to_string());
            args.push(arch.clone());
        }

        args.push(format!("-DCMAKE_BUILD_TYPE={}", self.build_type));

        for define in &self.defines {
            args.push(format!("-D{}", define));
        }

        args
    }

    /// Arguments for the build step
    pub fn build_args(&self) -> Vec<String> {
        vec![
            "--build".to_string(),
            self.build_dir.display().to_string(),
            "--config".to_string(),
            self.build_type.to_string(),
            "--parallel".to_string(),
            self.jobs.to_string(),
        ]
    }

    /// Run the CMake configure step
    pub fn configure(&self, cmake: &Path) -> Result<()> {
        self.run_step(cmake, BuildStep::Configure, &self.configure_args())
    }

    /// Run the CMake build step
    pub fn build(&self, cmake: &Path) -> Result<()> {
        self.run_step(cmake, BuildStep::Build, &self.build_args())
    }

    fn run_step(&self, cmake: &Path, step: BuildStep, args: &[String]) -> Result<()> {
        println!("Executing: {} {}", cmake.display(), args.join(" "));

        let result = run_command(cmake, args)
            .with_context(|| format!("Failed to run CMake {}", step))?;

        if !result.success {
            terminal::print_error(&format!(
                "cmake {} failed with exit code {}",
                step, result.exit_code
            ));
            return Err(BuildError::StepFailed {
                step,
                code: result.exit_code,
            }
            .into());
        }

        if self.verbose {
            println!("{} completed in {:.2}s", step, result.duration.as_secs_f64());
        }

        Ok(())
    }
}
