//! Shared problem builders for the aoplan benchmarks.

use aoplan_graph::assembly::AssemblyGraph;
use aoplan_graph::config::{ActionSpec, Agent, Configuration, Reach, SubassemblySpec};
use aoplan_graph::factory::GraphFactory;
use std::collections::BTreeMap;

/// A disassembly chain: `S0 -> A0 -> S1 -> A1 -> ... -> S<depth>`, the
/// last subassembly primitive, with the given agent pool.
#[must_use]
pub fn chain_problem(depth: usize, agent_count: usize) -> (AssemblyGraph, Configuration) {
    let agents: Vec<String> = (0..agent_count).map(|i| format!("r{i}")).collect();

    let mut factory = GraphFactory::new();
    let mut config = Configuration {
        agents: agents
            .iter()
            .map(|name| Agent {
                name: name.clone(),
                host: "localhost".into(),
                port: "9000".into(),
            })
            .collect(),
        ..Configuration::default()
    };

    let full_reach: BTreeMap<String, Reach> = agents
        .iter()
        .map(|a| {
            (
                a.clone(),
                Reach {
                    reachable: true,
                    interaction: None,
                },
            )
        })
        .collect();

    for i in 0..=depth {
        let subassembly = format!("S{i}");
        factory.insert_or(&subassembly).expect("fresh name");
        config.subassemblies.insert(
            subassembly.clone(),
            SubassemblySpec {
                name: subassembly.clone(),
                reachability: full_reach.clone(),
            },
        );
        if i < depth {
            let action = format!("A{i}");
            factory.insert_and(&action).expect("fresh name");
            factory.insert_edge(&subassembly, &action).expect("known names");
            config.actions.insert(
                action.clone(),
                ActionSpec {
                    name: action,
                    costs: agents
                        .iter()
                        .enumerate()
                        .map(|(k, a)| (a.clone(), 1.0 + k as f64))
                        .collect(),
                },
            );
        }
        if i > 0 {
            factory
                .insert_edge(&format!("A{}", i - 1), &subassembly)
                .expect("known names");
        }
    }
    factory.set_root("S0");
    (factory.finish(), config)
}

/// A one-level fan-out: the root splits into `width` parallel branches,
/// each realized by a single-action chain to a primitive part.
#[must_use]
pub fn fanout_problem(width: usize, agent_count: usize) -> (AssemblyGraph, Configuration) {
    let agents: Vec<String> = (0..agent_count).map(|i| format!("r{i}")).collect();

    let mut factory = GraphFactory::new();
    let mut config = Configuration {
        agents: agents
            .iter()
            .map(|name| Agent {
                name: name.clone(),
                host: "localhost".into(),
                port: "9000".into(),
            })
            .collect(),
        ..Configuration::default()
    };

    let full_reach: BTreeMap<String, Reach> = agents
        .iter()
        .map(|a| {
            (
                a.clone(),
                Reach {
                    reachable: true,
                    interaction: None,
                },
            )
        })
        .collect();

    let mut add_subassembly = |config: &mut Configuration, name: &str| {
        config.subassemblies.insert(
            name.to_string(),
            SubassemblySpec {
                name: name.to_string(),
                reachability: full_reach.clone(),
            },
        );
    };
    let costs: BTreeMap<String, f64> = agents.iter().map(|a| (a.clone(), 1.0)).collect();

    factory.insert_or("root").expect("fresh name");
    add_subassembly(&mut config, "root");
    factory.insert_and("split").expect("fresh name");
    factory.insert_edge("root", "split").expect("known names");
    config.actions.insert(
        "split".into(),
        ActionSpec {
            name: "split".into(),
            costs: costs.clone(),
        },
    );

    for i in 0..width {
        let part = format!("P{i}");
        let action = format!("B{i}");
        let leaf = format!("L{i}");
        factory.insert_or(&part).expect("fresh name");
        factory.insert_and(&action).expect("fresh name");
        factory.insert_or(&leaf).expect("fresh name");
        factory.insert_edge("split", &part).expect("known names");
        factory.insert_edge(&part, &action).expect("known names");
        factory.insert_edge(&action, &leaf).expect("known names");
        add_subassembly(&mut config, &part);
        add_subassembly(&mut config, &leaf);
        config.actions.insert(
            action.clone(),
            ActionSpec {
                name: action,
                costs: costs.clone(),
            },
        );
    }
    factory.set_root("root");
    (factory.finish(), config)
}
