//! `aoplan` — plan a multi-agent assembly from an XML problem description.
//!
//! Exit codes: 0 on success, 1 on parse or validation errors, 2 when the
//! search exhausts without finding a plan.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use aoplan_io::dot::export_dot_file;
use aoplan_io::reader::read_assembly_file;
use aoplan_io::writer::write_plan_file;
use aoplan_search::astar::{plan, Termination};
use aoplan_search::plan::{annotate_assembly, extract_plan};

const EXIT_INPUT_ERROR: u8 = 1;
const EXIT_NO_PLAN: u8 = 2;

#[derive(Parser)]
#[command(
    name = "aoplan",
    about = "Multi-agent AND/OR assembly planner",
    version
)]
struct Cli {
    /// Input assembly problem XML.
    input: PathBuf,

    /// Output path for the annotated plan XML.
    output: PathBuf,

    /// Also write a Graphviz DOT visualization of the plan graph.
    #[arg(long, value_name = "OUT.DOT")]
    dot: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run(cli: &Cli) -> Result<(), u8> {
    let (assembly, config) = read_assembly_file(&cli.input).map_err(|e| {
        eprintln!("error: {e}");
        EXIT_INPUT_ERROR
    })?;

    let (report, search) = plan(&assembly, &config);
    let goal = match report.termination {
        Termination::GoalReached { node } => node,
        Termination::OpenSetExhausted { .. } => {
            eprintln!(
                "no plan found: open set exhausted after {} expansions",
                report.expansions
            );
            return Err(EXIT_NO_PLAN);
        }
    };

    let steps = extract_plan(&search, goal);
    let annotated = annotate_assembly(&assembly, &config, &steps);

    write_plan_file(&annotated, &cli.output).map_err(|e| {
        eprintln!("error: {e}");
        EXIT_INPUT_ERROR
    })?;

    if let Some(dot_path) = &cli.dot {
        export_dot_file(&annotated, dot_path).map_err(|e| {
            eprintln!("error: {e}");
            EXIT_INPUT_ERROR
        })?;
    }

    println!(
        "Planned {} step(s) at total cost {} ({} expansions, {} search nodes).",
        steps.len(),
        steps.total_cost,
        report.expansions,
        report.nodes_created
    );
    Ok(())
}
