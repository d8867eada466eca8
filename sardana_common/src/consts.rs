//! Process-wide constants for the sardana workspace.
//!
//! Single source of truth for sentinel values and default paths.

/// Maximum difference between two floats so that they are considered equal.
pub const EPSILON_ERROR: f64 = 1e-16;

/// Identifier reserved for "no element".
pub const INVALID_ID: u32 = 0;

/// Axis number reserved for "no axis" (axes are 1-based).
pub const INVALID_AXIS: u32 = 0;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/sardana/sardana.toml";

/// Prefix some device servers put in front of type and access names.
pub const VENDOR_PREFIX: &str = "pytango.";
