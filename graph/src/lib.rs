//! aoplan Graph: the data layer of the aoplan assembly planner.
//!
//! This crate owns everything the planner's search layer reads: the generic
//! arena multigraph, the AND/OR assembly node model, the name-keyed graph
//! factory, the agent/cost/reachability configuration, and the structural
//! validator that gates planning.
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
//! - [`container::Graph`] — directed multigraph with stable integer handles
//! - [`assembly::AssemblyNode`] — tagged AND/OR node payload
//! - [`factory::GraphFactory`] — name-keyed assembly graph construction
//! - [`config::Configuration`] — agents, action costs, reachability
//! - [`validate::validate`] — structural gate run before any planning

#![forbid(unsafe_code)]

pub mod assembly;
pub mod config;
pub mod container;
pub mod error;
pub mod factory;
pub mod validate;
