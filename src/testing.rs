//! Test doubles shared by unit tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::cmd::CommandRunner;
use crate::error::{command_line, CommandFailure, Error, Result};

/// Records every command instead of running it.
///
/// Fails with exit code 1 when the subcommand matches `fail_on`. An optional
/// probe file is checked on each call so tests can see whether it existed
/// when the command ran.
#[derive(Default)]
pub struct RecordingRunner {
    log: RefCell<Vec<String>>,
    fail_on: Option<&'static str>,
    watch: Option<PathBuf>,
}

impl RecordingRunner {
    pub fn failing_on(subcommand: &'static str) -> Self {
        Self {
            fail_on: Some(subcommand),
            ..Self::default()
        }
    }

    /// Also record `file-present`/`file-absent` for `path` before each command
    pub fn watching(path: &Path) -> Self {
        Self {
            watch: Some(path.to_path_buf()),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter(|entry| !entry.starts_with("file-"))
            .cloned()
            .collect()
    }

    /// Every entry, file observations included
    pub fn events(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// Subcommands only, e.g. `["daemon-reload", "enable"]`
    pub fn subcommands(&self) -> Vec<String> {
        self.commands()
            .iter()
            .filter_map(|line| line.split_whitespace().nth(2).map(str::to_string))
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<()> {
        if let Some(path) = &self.watch {
            let state = if path.exists() { "file-present" } else { "file-absent" };
            self.log.borrow_mut().push(state.to_string());
        }

        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        self.log.borrow_mut().push(command_line(program, &owned));

        if self.fail_on.is_some_and(|sub| args.contains(&sub)) {
            return Err(Error::ExternalCommandFailed {
                program: program.to_path_buf(),
                args: owned,
                failure: CommandFailure::Status(exit_status(1)),
            });
        }
        Ok(())
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}
