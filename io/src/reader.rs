//! Input XML reader.
//!
//! Consumes the `<assembly>` document — agents, typed graph nodes with
//! their reachability/cost maps, edges, and the root designation — and
//! produces the assembly graph plus configuration the planner runs on.
//! The walk is DOM-shaped: each parse helper owns one element kind and
//! fails on the first missing attribute, naming the offending element.

use aoplan_graph::assembly::AssemblyGraph;
use aoplan_graph::config::{ActionSpec, Agent, Configuration, Reach, SubassemblySpec};
use aoplan_graph::error::GraphError;
use aoplan_graph::factory::GraphFactory;
use aoplan_graph::validate::validate;
use roxmltree::{Document, Node};

use crate::error::{ParseError, ReadError};

/// Read, parse, and validate a full assembly problem from a file.
///
/// # Errors
///
/// Returns [`ReadError::Parse`] carrying [`ParseError::Io`] when the
/// file cannot be read; otherwise behaves as [`read_assembly`].
pub fn read_assembly_file(
    path: &std::path::Path,
) -> Result<(AssemblyGraph, Configuration), ReadError> {
    let xml = std::fs::read_to_string(path).map_err(|e| {
        ReadError::Parse(ParseError::Io {
            detail: format!("{}: {e}", path.display()),
        })
    })?;
    read_assembly(&xml)
}

/// Parse and validate a full assembly problem.
///
/// # Errors
///
/// Returns [`ReadError::Parse`] for malformed documents and
/// [`ReadError::Validation`] when the parsed problem fails the
/// structural gate.
pub fn read_assembly(xml: &str) -> Result<(AssemblyGraph, Configuration), ReadError> {
    let (graph, config) = parse_assembly(xml).map_err(ReadError::Parse)?;
    validate(&graph, &config).map_err(ReadError::Validation)?;
    Ok((graph, config))
}

/// Parse the input document without validating it.
///
/// # Errors
///
/// Returns [`ParseError`] identifying the first offending element.
pub fn parse_assembly(xml: &str) -> Result<(AssemblyGraph, Configuration), ParseError> {
    let doc = Document::parse(xml).map_err(|e| ParseError::Xml {
        detail: e.to_string(),
    })?;
    let assembly = doc.root_element();
    if !assembly.has_tag_name("assembly") {
        return Err(ParseError::MissingElement {
            name: "assembly".into(),
        });
    }

    let mut config = Configuration::default();
    parse_agents(child_element(assembly, "agents")?, &mut config)?;

    let graph_element = child_element(assembly, "graph")?;
    let mut factory = GraphFactory::new();
    parse_nodes(
        child_element(graph_element, "nodes")?,
        &mut factory,
        &mut config,
    )?;
    parse_edges(child_element(graph_element, "edges")?, &mut factory)?;

    let root = require_attr(graph_element, "root")?;
    // An unknown root name is left unset here; the validator reports it.
    factory.set_root(root);

    Ok((factory.finish(), config))
}

fn child_element<'a>(parent: Node<'a, 'a>, name: &str) -> Result<Node<'a, 'a>, ParseError> {
    parent
        .children()
        .find(|c| c.has_tag_name(name))
        .ok_or_else(|| ParseError::MissingElement { name: name.into() })
}

fn require_attr<'a>(element: Node<'a, 'a>, attribute: &str) -> Result<&'a str, ParseError> {
    element
        .attribute(attribute)
        .ok_or_else(|| ParseError::MissingAttribute {
            element: element.tag_name().name().to_string(),
            attribute: attribute.to_string(),
        })
}

fn parse_agents(agents: Node<'_, '_>, config: &mut Configuration) -> Result<(), ParseError> {
    for agent in agents.children().filter(|c| c.has_tag_name("agent")) {
        config.upsert_agent(Agent {
            name: require_attr(agent, "name")?.to_string(),
            host: require_attr(agent, "host")?.to_string(),
            port: require_attr(agent, "port")?.to_string(),
        });
    }
    Ok(())
}

fn parse_nodes(
    nodes: Node<'_, '_>,
    factory: &mut GraphFactory,
    config: &mut Configuration,
) -> Result<(), ParseError> {
    for node in nodes.children().filter(|c| c.has_tag_name("node")) {
        let name = require_attr(node, "name")?;
        let kind = require_attr(node, "type")?;
        match kind {
            "OR" => {
                factory.insert_or(name).map_err(factory_error)?;
                let reachability = parse_reachmap(node, name, config)?;
                config.subassemblies.insert(
                    name.to_string(),
                    SubassemblySpec {
                        name: name.to_string(),
                        reachability,
                    },
                );
            }
            "AND" => {
                factory.insert_and(name).map_err(factory_error)?;
                let costs = parse_costmap(node)?;
                config.actions.insert(
                    name.to_string(),
                    ActionSpec {
                        name: name.to_string(),
                        costs,
                    },
                );
            }
            other => {
                return Err(ParseError::UnsupportedNodeType {
                    found: other.to_string(),
                })
            }
        }
    }
    Ok(())
}

fn parse_edges(edges: Node<'_, '_>, factory: &mut GraphFactory) -> Result<(), ParseError> {
    for edge in edges.children().filter(|c| c.has_tag_name("edge")) {
        let start = require_attr(edge, "start")?;
        let end = require_attr(edge, "end")?;
        factory.insert_edge(start, end).map_err(factory_error)?;
    }
    Ok(())
}

fn parse_reachmap(
    subassembly: Node<'_, '_>,
    subassembly_name: &str,
    config: &mut Configuration,
) -> Result<std::collections::BTreeMap<String, Reach>, ParseError> {
    let mut reach_map = std::collections::BTreeMap::new();
    for reach in subassembly.children().filter(|c| c.has_tag_name("reach")) {
        let agent = require_attr(reach, "agent")?;
        let reachable = require_attr(reach, "reachable")?.to_ascii_lowercase();
        let entry = match reachable.as_str() {
            "true" => Reach {
                reachable: true,
                interaction: None,
            },
            "false" => {
                let interaction =
                    parse_interaction(reach, subassembly_name, agent)?;
                // Interactions join the action table so the validator
                // checks their cost maps like any other action's.
                config
                    .actions
                    .insert(interaction.name.clone(), interaction.clone());
                Reach {
                    reachable: false,
                    interaction: Some(interaction),
                }
            }
            other => {
                return Err(ParseError::UnsupportedReachable {
                    found: other.to_string(),
                })
            }
        };
        reach_map.insert(agent.to_string(), entry);
    }
    Ok(reach_map)
}

fn parse_interaction(
    reach: Node<'_, '_>,
    subassembly_name: &str,
    agent: &str,
) -> Result<ActionSpec, ParseError> {
    let interaction = reach
        .children()
        .find(|c| c.has_tag_name("interaction"))
        .ok_or_else(|| ParseError::MissingInteraction {
            subassembly: subassembly_name.to_string(),
            agent: agent.to_string(),
        })?;
    let name = require_attr(interaction, "name")?;
    Ok(ActionSpec {
        name: name.to_string(),
        costs: parse_costmap(interaction)?,
    })
}

fn parse_costmap(
    element: Node<'_, '_>,
) -> Result<std::collections::BTreeMap<String, f64>, ParseError> {
    let mut costs = std::collections::BTreeMap::new();
    for cost in element.children().filter(|c| c.has_tag_name("cost")) {
        let agent = require_attr(cost, "agent")?;
        let raw = require_attr(cost, "value")?.to_ascii_lowercase();
        let value = if raw == "inf" {
            f64::INFINITY
        } else {
            match raw.parse::<f64>() {
                Ok(parsed) if parsed.is_nan() => {
                    return Err(ParseError::InvalidCost { value: raw })
                }
                Ok(parsed) => parsed,
                Err(_) => return Err(ParseError::InvalidCost { value: raw }),
            }
        };
        costs.insert(agent.to_string(), value);
    }
    Ok(costs)
}

fn factory_error(err: GraphError) -> ParseError {
    match err {
        GraphError::NameCollision { name } => ParseError::NameCollision { name },
        GraphError::UnknownName { name } => ParseError::UnknownNodeName { name },
        // The factory resolves names to live handles before touching the
        // container, so handle-level failures cannot arise from input.
        GraphError::NodeNotFound { .. } | GraphError::EdgeNotFound { .. } => {
            unreachable!("factory passed a stale handle to the container: {err}")
        }
    }
}
