//! End-to-end planning scenarios: XML in, plan out.

use aoplan_io::reader::read_assembly;
use aoplan_search::astar::{plan, Termination};
use aoplan_search::plan::{annotate_assembly, extract_plan, Plan};
use aoplan_scenarios::{
    choice_problem, fanout_problem, infinite_cost_problem, interaction_problem,
    single_action_problem, trivial_problem,
};

fn plan_from_xml(xml: &str) -> (Plan, aoplan_search::astar::SearchReport) {
    let (assembly, config) = read_assembly(xml).expect("problem parses and validates");
    let (report, search) = plan(&assembly, &config);
    let goal = report.goal().expect("a plan exists");
    (extract_plan(&search, goal), report)
}

// ---------------------------------------------------------------------------
// A primitive root is already a goal
// ---------------------------------------------------------------------------

#[test]
fn trivial_product_needs_no_steps() {
    let (extracted, report) = plan_from_xml(&trivial_problem());
    assert!(extracted.is_empty());
    assert_eq!(extracted.total_cost, 0.0);
    assert_eq!(report.expansions, 0);
}

// ---------------------------------------------------------------------------
// A single action plan costs exactly that action
// ---------------------------------------------------------------------------

#[test]
fn single_action_assigns_the_only_agent() {
    let (extracted, _) = plan_from_xml(&single_action_problem());
    assert_eq!(extracted.len(), 1);
    assert_eq!(extracted.total_cost, 3.0);
    let step = &extracted.steps[0];
    assert_eq!(step.assignments.len(), 1);
    assert_eq!(step.assignments[0].agent, "r1");
    assert_eq!(step.assignments[0].action, "A1");
}

// ---------------------------------------------------------------------------
// Between two realizations the cheaper action wins
// ---------------------------------------------------------------------------

#[test]
fn choice_takes_the_cheaper_action() {
    let (extracted, _) = plan_from_xml(&choice_problem());
    assert_eq!(extracted.len(), 1);
    assert_eq!(extracted.total_cost, 2.0);
    assert_eq!(extracted.steps[0].assignments[0].action, "A1");
}

// ---------------------------------------------------------------------------
// Parallel fan-out pairs both branch actions into one step
// ---------------------------------------------------------------------------

#[test]
fn fanout_pairs_both_agents_in_one_step() {
    let (extracted, _) = plan_from_xml(&fanout_problem());
    assert_eq!(extracted.len(), 2);
    assert_eq!(extracted.total_cost, 3.0);

    let split = &extracted.steps[0];
    assert_eq!(split.assignments.len(), 1);
    assert_eq!(split.assignments[0].action, "A1");

    // Exploration order lands on the paired step before any sequential
    // completion of the same total cost.
    let paired = &extracted.steps[1];
    assert_eq!(paired.assignments.len(), 2);
    assert_eq!(paired.assignments[0].agent, "r1");
    assert_eq!(paired.assignments[0].action, "A11");
    assert_eq!(paired.assignments[1].agent, "r2");
    assert_eq!(paired.assignments[1].action, "A21");
    assert_eq!(paired.cost, 2.0);
}

// ---------------------------------------------------------------------------
// An unreachable target penalizes the primary agent by the interaction
// ---------------------------------------------------------------------------

#[test]
fn interaction_surcharge_steers_to_the_reaching_agent() {
    let (extracted, _) = plan_from_xml(&interaction_problem());
    // r1 on A1 would cost 3.0 + 4.0 interaction; r2 pays 3.5 direct.
    assert_eq!(extracted.steps[0].assignments[0].agent, "r2");
    assert_eq!(extracted.steps[0].cost, 3.5);
    assert_eq!(extracted.total_cost, 5.5);
}

#[test]
fn interaction_node_lands_in_the_annotated_graph_when_charged() {
    // Force the interaction path: only r1 exists, so A1 must be done by
    // r1 through I1.
    let xml = interaction_problem()
        .replace("<agent name=\"r2\" host=\"localhost\" port=\"9200\"/>\n", "")
        .replace("  <reach agent=\"r2\" reachable=\"true\"/>\n", "");
    let (assembly, config) = read_assembly(&xml).expect("single-agent variant validates");
    let (report, search) = plan(&assembly, &config);
    let goal = report.goal().expect("a plan exists");
    let extracted = extract_plan(&search, goal);
    assert_eq!(extracted.total_cost, 3.0 + 4.0 + 2.0);

    let annotated = annotate_assembly(&assembly, &config, &extracted);
    let interaction = annotated
        .nodes()
        .find(|(_, n)| n.kind() == aoplan_graph::assembly::NodeKind::Interaction)
        .expect("interaction node emitted");
    assert_eq!(interaction.1.name(), "I1");
    assert_eq!(interaction.1.assigned_agent(), Some("r1"));
}

// ---------------------------------------------------------------------------
// Infinite-cost actions are enumerated but dominated
// ---------------------------------------------------------------------------

#[test]
fn infinite_cost_branch_is_dominated() {
    let (extracted, _) = plan_from_xml(&infinite_cost_problem());
    assert_eq!(extracted.len(), 1);
    assert_eq!(extracted.total_cost, 6.0);
    assert_eq!(extracted.steps[0].assignments[0].action, "A2");
}

// ---------------------------------------------------------------------------
// Report invariants
// ---------------------------------------------------------------------------

#[test]
fn goal_frontier_is_all_primitive() {
    let xml = fanout_problem();
    let (assembly, config) = read_assembly(&xml).unwrap();
    let (report, search) = plan(&assembly, &config);
    let goal = report.goal().unwrap();
    let state = search.node_data(goal).unwrap();
    for &s in state.subassemblies.values() {
        assert_eq!(assembly.number_of_successors(s), 0);
    }
}

#[test]
fn exhausted_search_reports_no_plan_with_diagnostics() {
    // Validation forbids an empty agent pool precisely because nothing
    // can be assigned; bypassing it is the one way a finite decomposition
    // exhausts the open set.
    let (assembly, mut config) =
        aoplan_io::reader::parse_assembly(&single_action_problem()).unwrap();
    config.agents.clear();

    let (report, _) = plan(&assembly, &config);
    assert!(report.goal().is_none());
    match report.termination {
        Termination::OpenSetExhausted { last_popped } => {
            assert!(last_popped.is_some(), "the popped root is the diagnostic");
        }
        Termination::GoalReached { .. } => panic!("no plan should exist"),
    }
}
