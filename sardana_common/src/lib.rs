//! Sardana Common Library
//!
//! Shared definitions used by every sardana client: the closed data type
//! system exchanged with device pool controllers, the element type registry
//! with its classification sets, and the interface (capability) graph with
//! its transitive expansion.
//!
//! # Module Structure
//!
//! - [`data`] - Data types, formats, access modes and descriptor normalization
//! - [`element`] - Element types, element states and classification sets
//! - [`interface`] - Interface declarations and the expanded interface graph
//! - [`numeric`] - Number classification and the scalar change filter
//! - [`experiment`] - Experiment configuration model exchanged with a Door
//! - [`context`] - Process context built once at bootstrap
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use sardana_common::prelude::*;
//!
//! let ctx = SardanaContext::init(&SardanaConfig::default())?;
//! assert!(ctx.interfaces().is_a("Motor", "Moveable"));
//! assert!(ElementType::Motor.is_moveable());
//! assert_eq!(
//!     normalize_type(&"DevVarDoubleArray".into()),
//!     (DataType::Double, DataFormat::OneD)
//! );
//! # Ok::<(), InitError>(())
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod consts;
pub mod context;
pub mod data;
pub mod element;
pub mod experiment;
pub mod interface;
pub mod numeric;
pub mod prelude;
