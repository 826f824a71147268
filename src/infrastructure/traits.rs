//! I/O boundary traits for testability
//!
//! These traits abstract external process calls, allowing services
//! to be tested with mock implementations.

use std::io;
use std::process::Output;

use crate::domain::{ChildIssue, IssueKey, RawIssue};
use crate::infrastructure::InfraResult;

/// Captured result of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Successful output with the given stdout.
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(code),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments and capture its output.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Issue tracker abstraction.
pub trait IssueTracker: Send + Sync {
    /// Fetch one issue with all fields.
    fn view(&self, key: &IssueKey) -> InfraResult<RawIssue>;

    /// List issues whose parent link is `parent_key`, within `project`.
    fn list_children(&self, parent_key: &str, project: &str) -> InfraResult<Vec<ChildIssue>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real command runner using `std::process`.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<CommandOutput> {
        std::process::Command::new(cmd)
            .args(args)
            .output()
            .map(CommandOutput::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_zero_exit_when_checking_then_success() {
        assert!(CommandOutput::ok("x").success());
        assert!(!CommandOutput::failed(1, "boom").success());
        assert!(!CommandOutput::default().success());
    }

    #[test]
    fn given_invalid_utf8_when_reading_stdout_then_lossy() {
        let output = CommandOutput::ok(vec![b'a', 0xff, b'b']);
        assert_eq!(output.stdout_lossy(), "a\u{fffd}b");
    }

    #[test]
    fn given_missing_binary_when_running_then_io_error() {
        let result = RealCommandRunner.run("jiractx-definitely-not-installed", &[]);
        assert!(result.is_err());
    }
}
