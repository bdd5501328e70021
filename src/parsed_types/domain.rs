//! The parsed form of a domain file.

use crate::parsed_types::{
    ActionDefinition, Name, PredicateName, Requirements, TypedNames, TypedVariables,
};

/// A predicate signature from the `:predicates` section, e.g.
/// `(Obstructs ?l - Location ?occluder ?o)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PredicateDefinition {
    predicate: PredicateName,
    variables: TypedVariables,
}

impl PredicateDefinition {
    pub const fn new(predicate: PredicateName, variables: TypedVariables) -> Self {
        Self {
            predicate,
            variables,
        }
    }

    pub fn name(&self) -> &Name {
        self.predicate.name()
    }

    pub fn arity(&self) -> usize {
        self.variables.len()
    }

    pub fn variables(&self) -> &TypedVariables {
        &self.variables
    }
}

/// A whole domain file. Every section except the name is optional.
///
/// ## Example
/// ```
/// # use eagerground::parsed_types::{Domain, Name};
/// # use eagerground::parsers::Parser;
/// let input = r#"
/// (define
///     (domain dinner-table)
///     (:requirements :strips :negative-preconditions :universal-preconditions)
///     (:types Location IsTray)
///
///     (:predicates
///          (RobotAt ?l - Location)
///          (At ?o ?l - Location)
///          (InGripper ?o)
///     )
///
///     (:action pickTray
///         :parameters (?t - IsTray ?l - Location)
///         :precondition (and (At ?t ?l) (forall (?o) (not (InGripper ?o))))
///         :effect (and (InGripper ?t) (not (At ?t ?l)))
///     )
/// )"#;
///
/// let domain = Domain::from_str(input).unwrap();
///
/// assert_eq!(domain.name(), &Name::new("dinner-table"));
/// assert_eq!(domain.requirements().len(), 3);
/// assert_eq!(domain.types().len(), 2);
/// assert_eq!(domain.constants().len(), 0);
/// assert_eq!(domain.predicates().len(), 3);
/// assert_eq!(domain.actions().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    name: Name,
    requirements: Requirements,
    /// Each declared type, paired with its supertype. Types double as unary
    /// predicates over objects.
    types: TypedNames,
    constants: TypedNames,
    predicates: Vec<PredicateDefinition>,
    actions: Vec<ActionDefinition>,
}

impl Domain {
    pub const fn new(
        name: Name,
        requirements: Requirements,
        types: TypedNames,
        constants: TypedNames,
        predicates: Vec<PredicateDefinition>,
        actions: Vec<ActionDefinition>,
    ) -> Self {
        Self {
            name,
            requirements,
            types,
            constants,
            predicates,
            actions,
        }
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    pub const fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    pub const fn types(&self) -> &TypedNames {
        &self.types
    }

    pub const fn constants(&self) -> &TypedNames {
        &self.constants
    }

    pub fn predicates(&self) -> &[PredicateDefinition] {
        &self.predicates
    }

    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }
}
