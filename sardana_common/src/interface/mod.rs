//! Interfaces (capabilities) and their inheritance.
//!
//! [`InterfaceTable`] holds the direct parents declared for each interface.
//! [`InterfaceGraph`] is built from a table once, validates it (no dangling
//! parents, no cycles) and stores the transitive expansion of every name.

pub mod graph;
pub mod table;

pub use graph::{InterfaceError, InterfaceGraph};
pub use table::{BUILTIN_INTERFACES, InterfaceTable};
