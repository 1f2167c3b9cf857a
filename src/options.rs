use serde::Deserialize;

use crate::error::Result;

/// Per-unit options.
///
/// No options are recognized yet: an empty document is accepted and any key
/// is rejected, so adding a field later does not change how existing
/// documents parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitOptions {}

impl UnitOptions {
    /// Parse options from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
