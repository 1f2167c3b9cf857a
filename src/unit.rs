//! Deploy and undeploy a named user service

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::cmd::{CommandRunner, SystemRunner};
use crate::error::{Error, Result};
use crate::name::is_valid_name;
use crate::options::UnitOptions;
use crate::paths::UNIT_EXTENSION;
use crate::probe::{self, Host, SystemHost};
use crate::systemctl::Systemctl;
use crate::template;

/// Validated name plus the paths resolved when the unit was created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDescriptor {
    name: String,
    binary: PathBuf,
    control_tool: PathBuf,
    service_dir: PathBuf,
}

impl UnitDescriptor {
    /// Build a descriptor from already-resolved paths.
    ///
    /// Only the name and the encoding of `binary` are checked: unit files are
    /// UTF-8, so a binary path that is not cannot be written into `ExecStart=`.
    pub fn new(
        name: &str,
        binary: PathBuf,
        control_tool: PathBuf,
        service_dir: PathBuf,
    ) -> Result<Self> {
        if !is_valid_name(name) {
            return Err(Error::InvalidName(name.to_string()));
        }
        if binary.to_str().is_none() {
            return Err(Error::NonUtf8Binary { path: binary });
        }
        Ok(Self {
            name: name.to_string(),
            binary,
            control_tool,
            service_dir,
        })
    }

    /// Validate `name`, then probe `host`
    pub fn probe(name: &str, host: &dyn Host) -> Result<Self> {
        if !is_valid_name(name) {
            return Err(Error::InvalidName(name.to_string()));
        }
        let probed = probe::probe(host)?;
        Self::new(name, probed.binary, probed.control_tool, probed.service_dir)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executable the service runs
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn control_tool(&self) -> &Path {
        &self.control_tool
    }

    pub fn service_dir(&self) -> &Path {
        &self.service_dir
    }

    /// `<service_dir>/<name>.service`
    pub fn unit_file_path(&self) -> PathBuf {
        self.service_dir
            .join(format!("{}.{}", self.name, UNIT_EXTENSION))
    }
}

/// A systemd user service for the running binary.
///
/// Creating a `Unit` checks the environment but changes nothing; only
/// [`deploy`](Unit::deploy) and [`undeploy`](Unit::undeploy) touch the system.
/// Both can be re-run safely after a partial failure.
#[derive(Debug, Clone)]
pub struct Unit<R: CommandRunner = SystemRunner> {
    descriptor: UnitDescriptor,
    runner: R,
}

impl Unit {
    pub fn new(name: &str) -> Result<Self> {
        Self::with_options(name, &UnitOptions::default())
    }

    pub fn with_options(name: &str, options: &UnitOptions) -> Result<Self> {
        // Nothing to apply yet; this stops compiling once options gain fields
        let UnitOptions {} = options;
        let descriptor = UnitDescriptor::probe(name, &SystemHost)?;
        Ok(Self::from_descriptor(descriptor, SystemRunner))
    }
}

impl<R: CommandRunner> Unit<R> {
    pub fn from_descriptor(descriptor: UnitDescriptor, runner: R) -> Self {
        Self { descriptor, runner }
    }

    pub fn descriptor(&self) -> &UnitDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Full path of the unit file used by deploy and undeploy
    pub fn unit_file_path(&self) -> PathBuf {
        self.descriptor.unit_file_path()
    }

    /// Write the unit file, then enable and (re)start the service
    pub fn deploy(&self) -> Result<()> {
        let path = self.unit_file_path();
        self.write_unit_file(&path)?;

        let ctl = self.systemctl();
        ctl.daemon_reload()?;
        ctl.enable(self.name())?;
        ctl.restart(self.name())?;

        tracing::info!("Deployed {} ({})", self.name(), path.display());
        Ok(())
    }

    /// Disable and stop the service, remove its unit file and reload
    pub fn undeploy(&self) -> Result<()> {
        let ctl = self.systemctl();
        // Disable first so the manager does not bring a stopped unit back
        ctl.disable(self.name())?;
        ctl.stop(self.name())?;

        let path = self.unit_file_path();
        tracing::debug!("Removing {}", path.display());
        std::fs::remove_file(&path).map_err(|source| Error::FileDeleteFailed {
            path: path.clone(),
            source,
        })?;

        ctl.daemon_reload()?;

        tracing::info!("Undeployed {}", self.name());
        Ok(())
    }

    fn write_unit_file(&self, path: &Path) -> Result<()> {
        tracing::debug!("Writing {}", path.display());
        let mut file = File::create(path).map_err(|source| Error::FileCreateFailed {
            path: path.to_path_buf(),
            source,
        })?;
        template::render(&self.descriptor, &mut file)?;
        file.sync_all().map_err(Error::RenderWriteFailed)
    }

    fn systemctl(&self) -> Systemctl<'_, R> {
        Systemctl::new(&self.runner, self.descriptor.control_tool())
    }
}
