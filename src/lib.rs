//! Deploy the running binary as a systemd user service.
//!
//! ```no_run
//! let unit = userunit::Unit::new("myapp")?;
//! unit.deploy()?;
//! # Ok::<(), userunit::Error>(())
//! ```

pub mod cmd;
pub mod error;
pub mod name;
pub mod options;
pub mod paths;
pub mod probe;
pub mod systemctl;
pub mod template;
pub mod unit;

#[cfg(test)]
mod testing;

pub use error::{CommandFailure, Error, Result};
pub use options::UnitOptions;
pub use unit::{Unit, UnitDescriptor};
