//! Stable error codes, shared by every error enum in the workspace.

pub const INVALID_SEVERITY: &str = "INVALID_SEVERITY";
pub const CVSS_OUT_OF_RANGE: &str = "CVSS_OUT_OF_RANGE";
pub const EMPTY_FIELD: &str = "EMPTY_FIELD";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const IO_ERROR: &str = "IO_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Maps an error onto a machine-readable code.
pub trait ArenaErrorCode {
    fn error_code(&self) -> &'static str;
}
