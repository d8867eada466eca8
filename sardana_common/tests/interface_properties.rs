//! Properties of the expanded interface graph over the builtin table:
//! reflexivity, monotonic closure over parents, idempotent queries, and
//! agreement with the element type classification.

use sardana_common::element::{ElementType, ElementTypeSet};
use sardana_common::interface::{BUILTIN_INTERFACES, InterfaceError, InterfaceGraph, InterfaceTable};

fn builtin() -> InterfaceGraph {
    InterfaceGraph::builtin().expect("builtin table is valid")
}

#[test]
fn every_builtin_name_is_expanded() {
    let graph = builtin();
    assert_eq!(graph.len(), BUILTIN_INTERFACES.len());
    for (name, _) in BUILTIN_INTERFACES {
        assert!(graph.contains(name), "{name} missing");
    }
}

#[test]
fn expansion_is_reflexive() {
    let graph = builtin();
    for name in graph.names() {
        let set = graph.expand(name).expect("declared");
        assert!(set.contains(name), "{name} not in its own expansion");
    }
}

#[test]
fn expansion_contains_parent_expansions() {
    let graph = builtin();
    for name in graph.names() {
        let set = graph.expand(name).expect("declared");
        for parent in graph.parents(name).expect("declared") {
            let parent_set = graph.expand(parent).expect("parent declared");
            assert!(
                parent_set.is_subset(set),
                "expand({parent}) not contained in expand({name})"
            );
        }
    }
}

#[test]
fn expansion_is_idempotent() {
    let graph = builtin();
    for name in graph.names() {
        assert_eq!(graph.expand(name), graph.expand(name));
    }
    let rebuilt = builtin();
    for name in graph.names() {
        assert_eq!(graph.expand(name), rebuilt.expand(name));
    }
}

#[test]
fn everything_is_an_object() {
    let graph = builtin();
    assert_eq!(graph.implementors("Object").count(), graph.len());
}

#[test]
fn element_types_have_interfaces() {
    let graph = builtin();
    for element_type in ElementType::ALL {
        if let Some(interface) = element_type.interface() {
            assert!(graph.contains(interface), "{interface} not declared");
        }
    }
}

#[test]
fn moveable_interface_covers_moveable_elements() {
    let graph = builtin();
    for element_type in ElementTypeSet::MOVEABLE.element_types() {
        let name = element_type.name();
        assert!(graph.is_a(name, "Moveable"), "{name} should be Moveable");
    }
}

#[test]
fn acquirable_elements_implement_acquirable() {
    let graph = builtin();
    for element_type in ElementTypeSet::ACQUIRABLE.element_types() {
        let name = element_type.name();
        // Communication channels are acquirable elements but only declare PoolElement.
        let expected = element_type != ElementType::ComChannel;
        assert_eq!(graph.is_a(name, "Acquirable"), expected, "{name}");
    }
}

#[test]
fn chain_scenario() {
    let table: InterfaceTable = [("A", vec![]), ("B", vec!["A"]), ("C", vec!["B"])]
        .into_iter()
        .collect();
    let graph = InterfaceGraph::build(table).unwrap();
    let c: Vec<&str> = graph
        .expand("C")
        .unwrap()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(c, ["A", "B", "C"]);
}

#[test]
fn cycle_scenario_produces_no_graph() {
    let table: InterfaceTable = [("X", vec!["Y"]), ("Y", vec!["X"])].into_iter().collect();
    let result = InterfaceGraph::build(table);
    assert!(matches!(result, Err(InterfaceError::Cycle { .. })));
}

#[test]
fn builtin_extended_with_cycle_is_rejected() {
    let mut table = InterfaceTable::builtin();
    table.declare("Object", ["Macro"]);
    assert!(matches!(
        InterfaceGraph::build(table),
        Err(InterfaceError::Cycle { path }) if path.first() == path.last()
    ));
}
