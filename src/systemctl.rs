//! `systemctl --user` control commands

use std::path::Path;

use crate::cmd::CommandRunner;
use crate::error::Result;
use crate::paths::USER_SCOPE_FLAG;

/// Issues control commands to the calling user's systemd instance
pub struct Systemctl<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a Path,
}

impl<'a, R: CommandRunner> Systemctl<'a, R> {
    pub fn new(runner: &'a R, program: &'a Path) -> Self {
        Self { runner, program }
    }

    /// Make the manager pick up added, changed or removed unit files
    pub fn daemon_reload(&self) -> Result<()> {
        self.user(&["daemon-reload"])
    }

    /// Start the unit on every login
    pub fn enable(&self, unit: &str) -> Result<()> {
        self.user(&["enable", unit])
    }

    /// Start the unit, or restart it if it is already running
    pub fn restart(&self, unit: &str) -> Result<()> {
        self.user(&["restart", unit])
    }

    pub fn disable(&self, unit: &str) -> Result<()> {
        self.user(&["disable", unit])
    }

    pub fn stop(&self, unit: &str) -> Result<()> {
        self.user(&["stop", unit])
    }

    fn user(&self, args: &[&str]) -> Result<()> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(USER_SCOPE_FLAG);
        full.extend_from_slice(args);
        self.runner.run(self.program, &full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    #[test]
    fn every_command_is_user_scoped() {
        let runner = RecordingRunner::default();
        let ctl = Systemctl::new(&runner, Path::new("/usr/bin/systemctl"));

        ctl.daemon_reload().unwrap();
        ctl.enable("myapp").unwrap();
        ctl.restart("myapp").unwrap();
        ctl.disable("myapp").unwrap();
        ctl.stop("myapp").unwrap();

        assert_eq!(
            runner.commands(),
            vec![
                "/usr/bin/systemctl --user daemon-reload",
                "/usr/bin/systemctl --user enable myapp",
                "/usr/bin/systemctl --user restart myapp",
                "/usr/bin/systemctl --user disable myapp",
                "/usr/bin/systemctl --user stop myapp",
            ]
        );
    }

    #[test]
    fn failure_is_propagated() {
        let runner = RecordingRunner::failing_on("stop");
        let ctl = Systemctl::new(&runner, Path::new("/usr/bin/systemctl"));

        let err = ctl.stop("myapp").unwrap_err();
        assert_eq!(err.failed_subcommand(), Some("stop"));
    }
}
