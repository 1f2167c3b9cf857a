//! Error taxonomy for unit deployment
//!
//! Every failure is reported where it happens and returned to the caller.
//! Deploy and undeploy stop at the first failing step.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use crate::paths::USER_SCOPE_FLAG;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unit name '{0}' is not valid (only ASCII letters, digits and '_' are allowed)")]
    InvalidName(String),

    #[error("invalid unit options: {0}")]
    InvalidOptions(#[from] toml::de::Error),

    #[error("could not find '{tool}' on PATH")]
    ControlToolNotFound { tool: &'static str },

    #[error("refusing to manage user services as root")]
    PrivilegedAccountRejected,

    #[error("user services are not supported on this platform")]
    UnsupportedPlatform,

    #[error("could not determine the user's home directory")]
    HomeDirectoryUnresolvable,

    #[error("could not create user unit directory '{}'", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("could not resolve the path of the running executable")]
    ExecutableUnresolvable(#[source] io::Error),

    #[error("could not create unit file '{}'", path.display())]
    FileCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write unit file")]
    RenderWriteFailed(#[source] io::Error),

    #[error("executable path '{}' is not valid UTF-8", path.display())]
    NonUtf8Binary { path: PathBuf },

    #[error("problem running '{}': {failure}", command_line(program, args))]
    ExternalCommandFailed {
        program: PathBuf,
        args: Vec<String>,
        #[source]
        failure: CommandFailure,
    },

    #[error("could not remove unit file '{}'", path.display())]
    FileDeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Subcommand of a failed control command (e.g. `"enable"`), skipping the scope flag
    pub fn failed_subcommand(&self) -> Option<&str> {
        match self {
            Error::ExternalCommandFailed { args, .. } => args
                .iter()
                .map(String::as_str)
                .find(|arg| *arg != USER_SCOPE_FLAG),
            _ => None,
        }
    }
}

/// Why an external command did not succeed
#[derive(Debug)]
pub enum CommandFailure {
    /// The program could not be launched
    Spawn(io::Error),
    /// Waiting for the child failed
    Wait(io::Error),
    /// The child exited non-zero or was killed by a signal
    Status(ExitStatus),
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandFailure::Spawn(e) => write!(f, "could not start: {}", e),
            CommandFailure::Wait(e) => write!(f, "could not wait for completion: {}", e),
            CommandFailure::Status(status) => match status.code() {
                Some(code) => write!(f, "exit code non-zero: {}", code),
                None => write!(f, "terminated abnormally ({})", status),
            },
        }
    }
}

impl std::error::Error for CommandFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandFailure::Spawn(e) | CommandFailure::Wait(e) => Some(e),
            CommandFailure::Status(_) => None,
        }
    }
}

pub(crate) fn command_line(program: &std::path::Path, args: &[String]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
