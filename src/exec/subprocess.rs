//! Subprocess execution for build tool invocations

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code (-1 when terminated by a signal)
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
            duration,
        }
    }
}

/// Run a command with inherited stdio, blocking until it exits.
///
/// The child's own output streams straight to the terminal; the driver
/// only consumes the exit status.
pub fn run_command(program: &Path, args: &[String]) -> Result<CommandResult> {
    let start = Instant::now();

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute {}", program.display()))?;

    Ok(CommandResult::from_status(status, start.elapsed()))
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn sh() -> PathBuf {
        PathBuf::from("/bin/sh")
    }

    #[test]
    fn captures_zero_exit_code() {
        let result = run_command(&sh(), &["-c".into(), "exit 0".into()]).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn captures_nonzero_exit_code() {
        let result = run_command(&sh(), &["-c".into(), "exit 7".into()]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 7);
    }

    #[test]
    fn missing_program_is_an_error() {
        let result = run_command(Path::new("/nonexistent/cmake"), &[]);
        assert!(result.is_err());
    }
}
