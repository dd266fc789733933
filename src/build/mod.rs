//! Build orchestration for the Chtholly compiler
//!
//! Drives CMake through its two-phase configure/build interface against a
//! fixed output directory, then reports where the produced executable is
//! expected to land.

pub mod cmake;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use crate::build::cmake::{BuildType, CMakeConfig};
use crate::utils::platform::HostPlatform;
use crate::utils::terminal;

/// Fixed output directory for all generated build artifacts
pub const BUILD_DIR: &str = "build";

/// Stem of the executable produced by the compiler's CMake project
pub const EXECUTABLE_STEM: &str = "chtholly";

/// One build request, created from CLI input and consumed immediately
#[derive(Debug)]
pub struct BuildRequest {
    pub build_type: BuildType,
    pub clean: bool,
    pub defines: Vec<String>,
    pub jobs: usize,
    pub verbose: bool,
}

/// Run the configure and build steps, then report the executable path.
///
/// Either step exiting non-zero aborts the whole run; the error carries
/// the child's exit code for the caller to propagate.
pub fn run(request: &BuildRequest) -> Result<()> {
    let cmake = CMakeConfig::find_cmake()?;
    let host = HostPlatform::current();
    let build_dir = PathBuf::from(BUILD_DIR);

    if request.verbose {
        terminal::print_info(&format!("Using CMake: {}", cmake.display()));
    }

    if request.clean && build_dir.exists() {
        terminal::print_info(&format!("Removing {}", build_dir.display()));
        fs::remove_dir_all(&build_dir)
            .with_context(|| format!("Failed to remove {}", build_dir.display()))?;
    }

    fs::create_dir_all(&build_dir)
        .with_context(|| format!("Failed to create {}", build_dir.display()))?;

    let config = CMakeConfig::new(PathBuf::from("."), build_dir.clone())
        .build_type(request.build_type)
        .platform(host)
        .defines(request.defines.clone())
        .jobs(request.jobs)
        .verbose(request.verbose);

    config.configure(&cmake)?;
    config.build(&cmake)?;

    println!(
        "\n{} Build finished in {} mode.",
        style("✓").green().bold(),
        request.build_type
    );

    let executable = resolve_executable(&build_dir, request.build_type, host);
    println!("Executable: {}", executable.display());

    Ok(())
}

/// Resolve the expected executable path after a successful build.
///
/// Multi-config generators place binaries under a per-configuration
/// subdirectory; single-config generators put them at the build root.
/// The lookup is best-effort: the fallback is reported even when it does
/// not exist either.
pub fn resolve_executable(
    build_dir: &Path,
    build_type: BuildType,
    host: HostPlatform,
) -> PathBuf {
    let name = host.executable_name(EXECUTABLE_STEM);
    let candidate = build_dir.join(build_type.to_string()).join(&name);

    if candidate.exists() {
        candidate
    } else {
        build_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_config_subdirectory_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let release = dir.path().join("Release");
        fs::create_dir_all(&release).unwrap();
        fs::write(release.join("chtholly"), b"").unwrap();

        let path = resolve_executable(dir.path(), BuildType::Release, HostPlatform::Unix);
        assert_eq!(path, release.join("chtholly"));
    }

    #[test]
    fn falls_back_to_build_root_when_subdir_missing() {
        let dir = tempfile::tempdir().unwrap();

        let path = resolve_executable(dir.path(), BuildType::Debug, HostPlatform::Unix);
        assert_eq!(path, dir.path().join("chtholly"));
    }

    #[test]
    fn debug_candidate_is_not_satisfied_by_release_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let release = dir.path().join("Release");
        fs::create_dir_all(&release).unwrap();
        fs::write(release.join("chtholly"), b"").unwrap();

        let path = resolve_executable(dir.path(), BuildType::Debug, HostPlatform::Unix);
        assert_eq!(path, dir.path().join("chtholly"));
    }

    #[test]
    fn windows_executable_carries_exe_suffix() {
        let dir = tempfile::tempdir().unwrap();

        let path = resolve_executable(dir.path(), BuildType::Debug, HostPlatform::Windows);
        assert_eq!(path, dir.path().join("chtholly.exe"));
    }
}
