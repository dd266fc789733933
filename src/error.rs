//! Error types for the build driver

use std::fmt;

use thiserror::Error;

/// The two external CMake phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Configure,
    Build,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::Configure => write!(f, "configure"),
            BuildStep::Build => write!(f, "build"),
        }
    }
}

/// Errors that terminate the driver
#[derive(Error, Debug)]
pub enum BuildError {
    /// A CMake phase exited non-zero. The driver propagates the child's
    /// exit code unchanged so callers can distinguish failure causes.
    #[error("cmake {step} failed with exit code {code}")]
    StepFailed { step: BuildStep, code: i32 },

    /// CMake is not on PATH and no CHTHOLLY_CMAKE override is set.
    #[error("CMake not found. Install CMake and add it to PATH.")]
    CmakeNotFound,
}

/// Install hints shown alongside missing tool errors
pub mod hints {
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake"
    }
}
