//! Grounding, state-space search and plan validation.
//!
//! The three entry points are [`ground`], [`search`] and [`validate`]. A
//! [`Task`] is built from a parsed domain and problem, grounded once into
//! [`GroundOperators`], and those operators are then shared by every search
//! and validation run on the task.

mod action_schema;
mod atom;
mod atom_schema;
mod config;
mod effect;
mod error;
mod formula;
mod goal;
mod grounder;
pub mod heuristics;
mod negatable;
mod operator;
mod plan;
mod predicate;
pub mod search_engines;
pub mod states;
pub mod successor_generators;
mod symbol_table;
mod task;
mod utils;
mod validate;
mod verbosity;

pub use action_schema::{ActionSchema, SchemaParameter};
pub use atom::Atom;
pub use atom_schema::{AtomSchema, SchemaArgument};
pub use config::{PlannerConfig, DEFAULT_OPERATOR_CAP};
pub use effect::{EffectSchema, GroundEffect, QuantifiedEffect};
pub use error::{ConfigError, FailureReason, PlanningError, TaskError, ValidationFailure};
pub use formula::{FormulaSchema, GroundFormula, QuantifiedVariable};
pub use goal::Goal;
pub use grounder::{ground, ground_step, GroundOperators};
pub use heuristics::{Heuristic, HeuristicValue, StateHeuristicNames};
pub use negatable::Negatable;
pub use operator::{Operator, Precondition};
pub use plan::Plan;
pub use predicate::Predicate;
pub use search_engines::{search, CancellationToken, SearchEngine, SearchStrategy, TerminationCondition};
pub use states::State;
pub use successor_generators::SuccessorGeneratorName;
pub use symbol_table::SymbolTable;
pub use task::Task;
#[allow(unused_imports)]
pub(crate) use utils::object_tuple;
pub use utils::ObjectTuple;
pub use validate::{validate, PlanTrace};
pub use verbosity::Verbosity;
