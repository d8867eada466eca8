//! Interface declarations.

use std::collections::{BTreeMap, BTreeSet};

/// Direct parents of every interface sardana declares.
///
/// `Object` is the root. Pool-side and macro-server-side hierarchies share
/// `SardanaObject` / `SardanaElement`.
pub const BUILTIN_INTERFACES: &[(&str, &[&str])] = &[
    ("Object", &[]),
    ("SardanaObject", &["Object"]),
    ("Element", &["Object"]),
    ("SardanaElement", &["Element"]),
    ("Class", &["SardanaObject"]),
    ("Library", &["SardanaObject"]),
    ("PoolObject", &["SardanaObject"]),
    ("PoolElement", &["SardanaElement", "PoolObject"]),
    ("Pool", &["PoolElement"]),
    ("Controller", &["PoolElement"]),
    ("Moveable", &["PoolElement"]),
    ("Acquirable", &["PoolElement"]),
    ("Instrument", &["PoolElement"]),
    ("Motor", &["Moveable", "Acquirable"]),
    ("PseudoMotor", &["Moveable", "Acquirable"]),
    ("IORegister", &["Moveable", "Acquirable"]),
    ("ExpChannel", &["Acquirable"]),
    ("CTExpChannel", &["ExpChannel"]),
    ("ZeroDExpChannel", &["ExpChannel"]),
    ("OneDExpChannel", &["ExpChannel"]),
    ("TwoDExpChannel", &["ExpChannel"]),
    ("PseudoCounter", &["ExpChannel"]),
    ("ComChannel", &["PoolElement"]),
    ("MotorGroup", &["Moveable", "Acquirable"]),
    ("MeasurementGroup", &["PoolElement"]),
    ("ControllerLibrary", &["Library", "PoolObject"]),
    ("ControllerClass", &["Class", "PoolObject"]),
    ("Constraint", &["PoolObject"]),
    ("External", &["Object"]),
    ("MacroServerObject", &["SardanaObject"]),
    ("MacroServerElement", &["SardanaElement", "MacroServerObject"]),
    ("MacroServer", &["MacroServerElement"]),
    ("MacroLibrary", &["Library", "MacroServerObject"]),
    ("MacroClass", &["Class", "MacroServerObject"]),
    ("Macro", &["MacroClass"]),
];

/// Interface name → direct parent names.
///
/// Declaring a name twice replaces its parents. The table is not validated;
/// see [`InterfaceGraph::build`](super::InterfaceGraph::build).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceTable {
    parents: BTreeMap<String, BTreeSet<String>>,
}

impl InterfaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The declarations in [`BUILTIN_INTERFACES`].
    pub fn builtin() -> Self {
        BUILTIN_INTERFACES
            .iter()
            .map(|(name, parents)| (*name, parents.iter().copied()))
            .collect()
    }

    /// Declare `name` with the given direct parents.
    pub fn declare<I, S>(&mut self, name: impl Into<String>, parents: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents
            .insert(name.into(), parents.into_iter().map(Into::into).collect());
        self
    }

    /// Direct parents of `name`, `None` if undeclared.
    pub fn parents(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.parents.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parents.contains_key(name)
    }

    /// Declared names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parents.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl<N, I, S> FromIterator<(N, I)> for InterfaceTable
where
    N: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (name, parents) in iter {
            table.declare(name, parents);
        }
        table
    }
}
