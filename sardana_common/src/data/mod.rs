//! Data types exchanged with device pool controllers.
//!
//! - [`types`] - the closed `DataType` / `DataFormat` / `DataAccess` enumerations
//! - [`normalize`] - mapping loose descriptors onto the canonical values

pub mod normalize;
pub mod types;

pub use normalize::{AccessDescriptor, NativeType, TypeDescriptor, normalize_access, normalize_type};
pub use types::{DataAccess, DataFormat, DataType};
