//! Host environment checks
//!
//! Runs once when a [`Unit`](crate::Unit) is created. Each precondition is
//! checked in order and the first one that fails is returned.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths::{CONTROL_TOOL, UNIT_DIR_MODE, USER_UNIT_DIR};

/// Facts about the host that deployment depends on
pub trait Host {
    /// Absolute path of the control tool, if it is on `PATH`
    fn control_tool(&self) -> Option<PathBuf>;

    /// Real user id of the calling process, `None` where uids do not exist
    fn uid(&self) -> Option<u32>;

    /// Home directory of the calling user
    fn home_dir(&self) -> Option<PathBuf>;

    /// Absolute path of the running executable
    fn current_exe(&self) -> io::Result<PathBuf>;
}

/// The real host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn control_tool(&self) -> Option<PathBuf> {
        which::which(CONTROL_TOOL).ok()
    }

    #[cfg(unix)]
    fn uid(&self) -> Option<u32> {
        Some(nix::unistd::getuid().as_raw())
    }

    #[cfg(not(unix))]
    fn uid(&self) -> Option<u32> {
        None
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn current_exe(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }
}

/// Everything the probe resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probed {
    pub control_tool: PathBuf,
    pub service_dir: PathBuf,
    pub binary: PathBuf,
}

/// Check the host and prepare the user unit directory
pub fn probe(host: &dyn Host) -> Result<Probed> {
    let control_tool = host.control_tool().ok_or(Error::ControlToolNotFound {
        tool: CONTROL_TOOL,
    })?;
    tracing::debug!("Using {}", control_tool.display());

    match host.uid() {
        None => return Err(Error::UnsupportedPlatform),
        Some(0) => return Err(Error::PrivilegedAccountRejected),
        Some(_) => {}
    }

    let home = host.home_dir().ok_or(Error::HomeDirectoryUnresolvable)?;
    let service_dir = home.join(USER_UNIT_DIR);
    ensure_dir(&service_dir)?;

    let binary = host.current_exe().map_err(Error::ExecutableUnresolvable)?;

    Ok(Probed {
        control_tool,
        service_dir,
        binary,
    })
}

/// Create `dir` and its parents if missing, then confirm it is a directory
fn ensure_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).map_err(|source| Error::DirectoryCreateFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    // Only reachable if the directory is replaced or removed after creation
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        }),
    }
}

#[cfg(unix)]
fn create_dir_all(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(UNIT_DIR_MODE)
        .create(dir)
}

#[cfg(not(unix))]
fn create_dir_all(dir: &Path) -> io::Result<()> {
    let _ = UNIT_DIR_MODE;
    std::fs::create_dir_all(dir)
}
