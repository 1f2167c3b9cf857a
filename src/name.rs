/// Check that a unit name is safe to use as a file name and a systemd unit id.
///
/// Only non-empty strings of ASCII letters, digits and `_` are accepted.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
