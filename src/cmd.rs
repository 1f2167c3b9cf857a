use std::path::Path;
use std::process::Command;

use crate::error::{command_line, CommandFailure, Error, Result};

/// Runs an external program to completion and reports whether it succeeded
pub trait CommandRunner {
    /// Run `program` with `args`; success means it started and exited with status zero.
    fn run(&self, program: &Path, args: &[&str]) -> Result<()>;
}

/// Spawns real child processes.
///
/// The child inherits stdio and is waited on with no timeout: a hung
/// control command blocks the caller until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<()> {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        tracing::debug!("> {}", command_line(program, &owned));

        let fail = |failure: CommandFailure| Error::ExternalCommandFailed {
            program: program.to_path_buf(),
            args: owned.clone(),
            failure,
        };

        let mut child = Command::new(program)
            .args(args)
            .spawn()
            .map_err(|e| fail(CommandFailure::Spawn(e)))?;

        let status = child.wait().map_err(|e| fail(CommandFailure::Wait(e)))?;

        if !status.success() {
            return Err(fail(CommandFailure::Status(status)));
        }

        Ok(())
    }
}
