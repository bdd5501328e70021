use crate::parsed_types::Name;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Task`](crate::search::Task) from parsed
/// input, or while patching one.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {what}: {message}")]
    Parse { what: &'static str, message: String },
    #[error("problem is for domain {problem_domain} but the domain is {domain}")]
    DomainMismatch { domain: Name, problem_domain: Name },
    #[error("unknown predicate {0}")]
    UnknownPredicate(Name),
    #[error("unknown object {0}")]
    UnknownObject(Name),
    #[error("unknown action {0}")]
    UnknownAction(Name),
    #[error("action {0} is defined more than once")]
    DuplicateAction(Name),
    #[error("predicate {predicate} has arity {expected} but is used with {found} arguments")]
    ArityMismatch {
        predicate: Name,
        expected: usize,
        found: usize,
    },
    #[error("action {action} expects {expected} arguments but got {found}")]
    WrongNumberOfArguments {
        action: Name,
        expected: usize,
        found: usize,
    },
    #[error("variable ?{variable} is not bound in action {action}")]
    UnboundVariable { action: Name, variable: Name },
    #[error("object {object} is declared with an `either` type")]
    AmbiguousObjectType { object: Name },
    #[error("type {0} is used but neither declared as a type nor as a unary predicate")]
    UnknownType(Name),
    #[error("initial state both asserts and denies {0}")]
    ContradictoryInitialLiteral(String),
    #[error(
        "quantified effect of action {action} ranges over type {type_name}, \
         which is changed by some action"
    )]
    DynamicQuantifiedEffectType { action: Name, type_name: Name },
    #[error("cannot patch static predicate {0}")]
    StaticPatch(Name),
    #[error("state has {found} predicates but the task declares {expected}")]
    StateMismatch { expected: usize, found: usize },
}

/// Errors raised by grounding, operator application and search.
#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("grounding produced more than {cap} operators (while grounding {schema})")]
    GroundingOverflow { cap: usize, schema: Name },
    #[error("operator {operator} is not applicable")]
    PreconditionViolation { operator: String },
    #[error("search space exhausted without reaching the goal")]
    PlanNotFound,
    #[error(transparent)]
    ValidationFailure(#[from] ValidationFailure),
    #[error("search was cancelled")]
    Cancelled,
    #[error("time limit exceeded")]
    TimeLimitExceeded,
    #[error("memory limit exceeded")]
    MemoryLimitExceeded,
}

/// Why a plan failed to validate. `step` is the index of the offending plan
/// step, or the plan length if every step applied but the goal does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("plan invalid at step {step}: {reason}")]
pub struct ValidationFailure {
    pub step: usize,
    pub reason: FailureReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("precondition {0} does not hold")]
    UnmetPrecondition(String),
    #[error("no disjunct of {0} holds")]
    UnmetDisjunction(String),
    #[error("static precondition or parameter type {0} does not hold")]
    StaticPrecondition(String),
    #[error("goal {0} does not hold in the final state")]
    GoalUnmet(String),
}

/// Errors raised while loading a [`PlannerConfig`](crate::search::PlannerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
