//! Unit file rendering
//!
//! The unit template is compiled in as the format string of a `write!`, so a
//! malformed template fails the build. Fields are substituted without
//! escaping; callers guarantee the name is valid and the binary path is
//! absolute UTF-8.

use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::unit::UnitDescriptor;

/// Write the unit file for `unit` into `out`
pub fn render(unit: &UnitDescriptor, out: &mut dyn Write) -> Result<()> {
    write_unit(unit, out).map_err(Error::RenderWriteFailed)
}

fn write_unit(unit: &UnitDescriptor, out: &mut dyn Write) -> io::Result<()> {
    write!(
        out,
        include_str!("../templates/basic.service"),
        description = unit.name(),
        exec_start = unit.binary().display(),
    )?;
    out.flush()
}

/// Render `unit` into a string
pub fn render_to_string(unit: &UnitDescriptor) -> Result<String> {
    let mut buf = Vec::new();
    render(unit, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
