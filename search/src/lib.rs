//! aoplan Search: deterministic best-first planning over AND/OR
//! assembly graphs.
//!
//! This crate is the planning engine. It grows a search graph on demand —
//! each search node is a planning state, each child materializes one
//! legal agent→action assignment vector — and traverses it best-first
//! until a state with no open subassemblies is popped.
//!
//! # Crate dependency graph
//!
//! ```text
//! aoplan_graph  ←  aoplan_search  ←  aoplan_io, aoplan_cli
//! (containers)     (expansion, A*)   (XML/DOT, front end)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`] — a planning state with score bookkeeping
//! - [`combinator::generate_assignments`] — the normative enumeration of
//!   agent→action assignments
//! - [`expander::NodeExpander`] — lazy hyper-expansion of search nodes
//! - [`astar::plan`] — end-to-end planning entry point
//! - [`plan::Plan`] — extracted steps, JSON rendering, graph annotation

#![forbid(unsafe_code)]

pub mod astar;
pub mod combinator;
pub mod expander;
pub mod frontier;
pub mod node;
pub mod plan;
