//! Shared XML problem builders for the scenario tests.

use std::fmt::Write as _;

/// One agent named `r1`; a root-only product with no actions.
#[must_use]
pub fn trivial_problem() -> String {
    problem_xml(
        &[("r1", "localhost", "9100")],
        "S0",
        &[or_node("S0", &[("r1", true, None)])],
        &[],
    )
}

/// `S0 -> A1 -> S1` with one agent at cost 3.
#[must_use]
pub fn single_action_problem() -> String {
    problem_xml(
        &[("r1", "localhost", "9100")],
        "S0",
        &[
            or_node("S0", &[("r1", true, None)]),
            and_node("A1", &[("r1", "3.0")]),
            or_node("S1", &[("r1", true, None)]),
        ],
        &[("S0", "A1"), ("A1", "S1")],
    )
}

/// `S0 -> {A1 (2), A2 (5)}`, both leading to primitive parts.
#[must_use]
pub fn choice_problem() -> String {
    problem_xml(
        &[("r1", "localhost", "9100")],
        "S0",
        &[
            or_node("S0", &[("r1", true, None)]),
            and_node("A1", &[("r1", "2.0")]),
            and_node("A2", &[("r1", "5.0")]),
            or_node("S1", &[("r1", true, None)]),
            or_node("S2", &[("r1", true, None)]),
        ],
        &[("S0", "A1"), ("S0", "A2"), ("A1", "S1"), ("A2", "S2")],
    )
}

/// `S0 -> A1 -> {S1, S2}`; `S1 -> A11 -> S11`, `S2 -> A21 -> S21`; two
/// agents, unit costs past the split.
#[must_use]
pub fn fanout_problem() -> String {
    let agents: &[(&str, bool, Option<(&str, &[(&str, &str)])>)] =
        &[("r1", true, None), ("r2", true, None)];
    problem_xml(
        &[("r1", "localhost", "9100"), ("r2", "localhost", "9200")],
        "S0",
        &[
            or_node("S0", agents),
            and_node("A1", &[("r1", "1.0"), ("r2", "1.0")]),
            or_node("S1", agents),
            or_node("S2", agents),
            and_node("A11", &[("r1", "1.0"), ("r2", "1.0")]),
            and_node("A21", &[("r1", "1.0"), ("r2", "1.0")]),
            or_node("S11", agents),
            or_node("S21", agents),
        ],
        &[
            ("S0", "A1"),
            ("A1", "S1"),
            ("A1", "S2"),
            ("S1", "A11"),
            ("S2", "A21"),
            ("A11", "S11"),
            ("A21", "S21"),
        ],
    )
}

/// `S0 -> A1 -> S1 -> A2 -> S2`; agent `r1` cannot reach `S0` and pays
/// interaction `I1` on top of `A1`, agent `r2` reaches it directly at a
/// comparable direct cost.
#[must_use]
pub fn interaction_problem() -> String {
    let interaction: Option<(&str, &[(&str, &str)])> =
        Some(("I1", &[("r1", "4.0"), ("r2", "4.0")]));
    let both: &[(&str, bool, Option<(&str, &[(&str, &str)])>)] =
        &[("r1", true, None), ("r2", true, None)];
    problem_xml(
        &[("r1", "localhost", "9100"), ("r2", "localhost", "9200")],
        "S0",
        &[
            or_node("S0", &[("r1", false, interaction), ("r2", true, None)]),
            and_node("A1", &[("r1", "3.0"), ("r2", "3.5")]),
            or_node("S1", both),
            and_node("A2", &[("r1", "2.0"), ("r2", "2.0")]),
            or_node("S2", both),
        ],
        &[("S0", "A1"), ("A1", "S1"), ("S1", "A2"), ("A2", "S2")],
    )
}

/// `S0 -> {A1 (inf for everyone), A2 (finite)}`.
#[must_use]
pub fn infinite_cost_problem() -> String {
    problem_xml(
        &[("r1", "localhost", "9100")],
        "S0",
        &[
            or_node("S0", &[("r1", true, None)]),
            and_node("A1", &[("r1", "inf")]),
            and_node("A2", &[("r1", "6.0")]),
            or_node("S1", &[("r1", true, None)]),
            or_node("S2", &[("r1", true, None)]),
        ],
        &[("S0", "A1"), ("S0", "A2"), ("A1", "S1"), ("A2", "S2")],
    )
}

/// An OR node: `(name, reaches)` where each reach is
/// `(agent, reachable, optional (interaction name, costs))`.
#[must_use]
pub fn or_node(
    name: &str,
    reaches: &[(&str, bool, Option<(&str, &[(&str, &str)])>)],
) -> String {
    let mut out = format!("<node name=\"{name}\" type=\"OR\">\n");
    for (agent, reachable, interaction) in reaches {
        match interaction {
            None => {
                let _ = writeln!(
                    out,
                    "  <reach agent=\"{agent}\" reachable=\"{reachable}\"/>"
                );
            }
            Some((interaction_name, costs)) => {
                let _ = writeln!(
                    out,
                    "  <reach agent=\"{agent}\" reachable=\"{reachable}\">"
                );
                let _ = writeln!(out, "    <interaction name=\"{interaction_name}\">");
                for (cost_agent, value) in *costs {
                    let _ = writeln!(
                        out,
                        "      <cost agent=\"{cost_agent}\" value=\"{value}\"/>"
                    );
                }
                let _ = writeln!(out, "    </interaction>");
                let _ = writeln!(out, "  </reach>");
            }
        }
    }
    out.push_str("</node>");
    out
}

/// An AND node with its cost map.
#[must_use]
pub fn and_node(name: &str, costs: &[(&str, &str)]) -> String {
    let mut out = format!("<node name=\"{name}\" type=\"AND\">\n");
    for (agent, value) in costs {
        let _ = writeln!(out, "  <cost agent=\"{agent}\" value=\"{value}\"/>");
    }
    out.push_str("</node>");
    out
}

/// Assemble a full input document.
#[must_use]
pub fn problem_xml(
    agents: &[(&str, &str, &str)],
    root: &str,
    nodes: &[String],
    edges: &[(&str, &str)],
) -> String {
    let mut out = String::from("<assembly>\n<agents>\n");
    for (name, host, port) in agents {
        let _ = writeln!(
            out,
            "  <agent name=\"{name}\" host=\"{host}\" port=\"{port}\"/>"
        );
    }
    out.push_str("</agents>\n");
    let _ = writeln!(out, "<graph root=\"{root}\">");
    out.push_str("<nodes>\n");
    for node in nodes {
        out.push_str(node);
        out.push('\n');
    }
    out.push_str("</nodes>\n<edges>\n");
    for (start, end) in edges {
        let _ = writeln!(out, "  <edge start=\"{start}\" end=\"{end}\"/>");
    }
    out.push_str("</edges>\n</graph>\n</assembly>\n");
    out
}
