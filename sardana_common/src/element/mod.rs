//! Element types, element states and classification sets.
//!
//! The classification sets are fixed bitmasks over [`ElementType`]; every
//! membership query is a single AND.

pub mod class;
pub mod kind;
pub mod state;

pub use class::{ElementClass, ElementTypeSet};
pub use kind::ElementType;
pub use state::State;
