//! Parse → emit → structural isomorphism.
//!
//! The plan writer emits a reduced schema (no cost/reach maps), so the
//! comparison is structural: same node names with the same OR/AND kinds,
//! and the same directed edge set, recovered from the writer's inverted
//! `from`/`to` attribute convention.

use std::collections::BTreeSet;

use aoplan_graph::assembly::NodeKind;
use aoplan_io::reader::read_assembly;
use aoplan_io::writer::write_plan_xml;
use aoplan_scenarios::{fanout_problem, interaction_problem, single_action_problem};

/// `(name, is_or)` per node and `(source, destination)` per edge.
type Structure = (BTreeSet<(String, bool)>, BTreeSet<(String, String)>);

fn structure_of_graph(graph: &aoplan_graph::assembly::AssemblyGraph) -> Structure {
    let nodes = graph
        .nodes()
        .map(|(_, n)| {
            (
                n.name().to_string(),
                matches!(n.kind(), NodeKind::Subassembly | NodeKind::Interassembly),
            )
        })
        .collect();
    let edges = graph
        .edges()
        .map(|(_, _, src, dst)| {
            (
                graph.node_data(src).unwrap().name().to_string(),
                graph.node_data(dst).unwrap().name().to_string(),
            )
        })
        .collect();
    (nodes, edges)
}

fn structure_of_output_xml(xml: &str) -> Structure {
    let doc = roxmltree::Document::parse(xml).expect("writer output is well-formed");
    let graph = doc.root_element();
    assert_eq!(graph.tag_name().name(), "graph");

    let nodes = graph
        .children()
        .find(|c| c.has_tag_name("nodes"))
        .expect("<nodes> present")
        .children()
        .filter(|c| c.has_tag_name("node"))
        .map(|n| {
            (
                n.attribute("name").unwrap().to_string(),
                n.attribute("type").unwrap() == "OR",
            )
        })
        .collect();

    // from = destination, to = source; undo the inversion.
    let edges = graph
        .children()
        .find(|c| c.has_tag_name("edges"))
        .expect("<edges> present")
        .children()
        .filter(|c| c.has_tag_name("edge"))
        .map(|e| {
            (
                e.attribute("to").unwrap().to_string(),
                e.attribute("from").unwrap().to_string(),
            )
        })
        .collect();

    (nodes, edges)
}

fn assert_roundtrip(problem: &str) {
    let (graph, _) = read_assembly(problem).expect("input parses");
    let emitted = write_plan_xml(&graph);
    assert_eq!(
        structure_of_graph(&graph),
        structure_of_output_xml(&emitted),
        "emitted graph must be isomorphic to the parsed one"
    );
}

#[test]
fn single_action_graph_roundtrips() {
    assert_roundtrip(&single_action_problem());
}

#[test]
fn fanout_graph_roundtrips() {
    assert_roundtrip(&fanout_problem());
}

#[test]
fn interaction_graph_roundtrips() {
    assert_roundtrip(&interaction_problem());
}

#[test]
fn root_attribute_survives_the_roundtrip() {
    let (graph, _) = read_assembly(&fanout_problem()).unwrap();
    let emitted = write_plan_xml(&graph);
    let doc = roxmltree::Document::parse(&emitted).unwrap();
    assert_eq!(doc.root_element().attribute("root"), Some("S0"));
}
