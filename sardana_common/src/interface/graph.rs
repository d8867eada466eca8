//! Expanded interface graph.
//!
//! Built once from an [`InterfaceTable`]. Construction expands every
//! declared name eagerly (depth-first, memoized) so that queries afterwards
//! are plain hash lookups with no side effects.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;
use tracing::debug;

use super::table::InterfaceTable;

/// Misconfigured interface table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterfaceError {
    /// A declared parent has no declaration of its own.
    #[error("interface '{name}' declares unknown parent '{parent}'")]
    DanglingParent { name: String, parent: String },

    /// Following parents leads back to the start. `path` begins and ends
    /// with the same name.
    #[error("interface cycle: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },
}

/// Interface declarations plus their transitive expansion.
///
/// For every declared name `n`:
/// - `n ∈ expand(n)`
/// - `expand(p) ⊆ expand(n)` for every direct parent `p`
#[derive(Debug, Clone)]
pub struct InterfaceGraph {
    table: InterfaceTable,
    expanded: HashMap<String, BTreeSet<String>>,
}

impl InterfaceGraph {
    /// Validate `table` and expand every name.
    ///
    /// # Errors
    ///
    /// - [`InterfaceError::DanglingParent`] if a parent is not declared
    /// - [`InterfaceError::Cycle`] if the parent relation is cyclic
    pub fn build(table: InterfaceTable) -> Result<Self, InterfaceError> {
        let mut expanded = HashMap::with_capacity(table.len());
        let mut path = Vec::new();

        for name in table.names() {
            expand_into(name, &table, &mut expanded, &mut path)?;
        }

        debug!(interfaces = expanded.len(), "interface graph expanded");
        Ok(Self { table, expanded })
    }

    /// Graph over [`BUILTIN_INTERFACES`](super::BUILTIN_INTERFACES).
    pub fn builtin() -> Result<Self, InterfaceError> {
        Self::build(InterfaceTable::builtin())
    }

    /// All interfaces `name` implements, itself included. `None` if `name`
    /// is not declared.
    pub fn expand(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.expanded.get(name)
    }

    /// Does `name` implement `interface`? `false` for undeclared names.
    pub fn is_a(&self, name: &str, interface: &str) -> bool {
        self.expanded
            .get(name)
            .is_some_and(|set| set.contains(interface))
    }

    /// Direct parents of `name`.
    pub fn parents(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.table.parents(name)
    }

    /// Declared names implementing `interface`, sorted.
    pub fn implementors<'a>(&'a self, interface: &'a str) -> impl Iterator<Item = &'a str> {
        self.table
            .names()
            .filter(move |name| self.is_a(name, interface))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.expanded.contains_key(name)
    }

    /// Declared names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.names()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn table(&self) -> &InterfaceTable {
        &self.table
    }
}

/// Expand `name` into `expanded`, expanding parents first when needed.
///
/// `path` holds the names currently being expanded; meeting one of them
/// again is a cycle.
fn expand_into(
    name: &str,
    table: &InterfaceTable,
    expanded: &mut HashMap<String, BTreeSet<String>>,
    path: &mut Vec<String>,
) -> Result<(), InterfaceError> {
    if expanded.contains_key(name) {
        return Ok(());
    }
    if let Some(start) = path.iter().position(|n| n == name) {
        let mut cycle = path[start..].to_vec();
        cycle.push(name.to_string());
        return Err(InterfaceError::Cycle { path: cycle });
    }

    let mut set = BTreeSet::new();
    set.insert(name.to_string());

    path.push(name.to_string());
    for parent in table.parents(name).into_iter().flatten() {
        if !table.contains(parent) {
            return Err(InterfaceError::DanglingParent {
                name: name.to_string(),
                parent: parent.clone(),
            });
        }
        expand_into(parent, table, expanded, path)?;
        if let Some(parent_set) = expanded.get(parent.as_str()) {
            set.extend(parent_set.iter().cloned());
        }
    }
    path.pop();

    expanded.insert(name.to_string(), set);
    Ok(())
}
