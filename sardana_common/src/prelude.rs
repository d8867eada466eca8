//! Prelude module for common re-exports.
//!
//! ```rust
//! use sardana_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SardanaConfig, SharedConfig};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{EPSILON_ERROR, INVALID_AXIS, INVALID_ID};

// ─── Context ────────────────────────────────────────────────────────
pub use crate::context::{InitError, SardanaContext};

// ─── Data types ─────────────────────────────────────────────────────
pub use crate::data::{
    AccessDescriptor, DataAccess, DataFormat, DataType, NativeType, TypeDescriptor,
    normalize_access, normalize_type,
};

// ─── Elements ───────────────────────────────────────────────────────
pub use crate::element::{ElementClass, ElementType, ElementTypeSet, State};

// ─── Interfaces ─────────────────────────────────────────────────────
pub use crate::interface::{InterfaceError, InterfaceGraph, InterfaceTable};

// ─── Values ─────────────────────────────────────────────────────────
pub use crate::numeric::{AttrValue, ScalarNumberFilter, is_number};
