/// Service manager control executable, looked up on `PATH`
pub const CONTROL_TOOL: &str = "systemctl";

/// Flag scoping every control command to the calling user's manager
pub const USER_SCOPE_FLAG: &str = "--user";

/// Per-user unit directory, relative to the home directory
pub const USER_UNIT_DIR: &str = ".config/systemd/user";

/// Extension of rendered unit files
pub const UNIT_EXTENSION: &str = "service";

/// Mode used when creating the unit directory (subject to umask)
pub const UNIT_DIR_MODE: u32 = 0o755;
