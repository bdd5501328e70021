//! The in-memory form of domain, problem and plan files as produced by the
//! [`parsers`](crate::parsers). Nothing here is resolved against a symbol
//! table yet; see [`Task`](crate::search::Task) for the lowered form.

mod action_definition;
mod atom;
mod domain;
mod names;
mod plan;
mod problem;
mod prop_condition;
mod prop_effect;
mod requirements;
mod typed;

pub use action_definition::ActionDefinition;
pub use atom::{Atom, Literal, Term};
pub use domain::{Domain, PredicateDefinition};
pub use names::{ActionName, Name, PredicateName, Variable};
pub use plan::{Plan, PlanStep};
pub use problem::Problem;
pub use prop_condition::PropCondition;
pub use prop_effect::PropEffect;
pub use requirements::{Requirement, Requirements};
pub use typed::{PrimitiveType, ToTyped, Type, Typed, TypedList, OBJECT_TYPE_NAME};

pub type TypedNames = TypedList<Name>;
pub type TypedVariables = TypedList<Variable>;
pub type NameLiteral = Literal<Name>;
