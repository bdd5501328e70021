//! Contains the [`Problem`] type.

use crate::parsed_types::{Name, NameLiteral, Requirements, TypedNames};

/// A domain-specific problem declaration.
///
/// ## Usages
/// This is the top-level type of a problem description within a
/// [`Domain`](crate::parsed_types::Domain).
///
/// ## Example
/// ```
/// # use eagerground::parsers::Parser;
/// # use eagerground::parsed_types::*;
/// let input = r#"(define (problem carry-tray)
///         (:domain dinner-table)
///         (:objects robot trayA locTable)
///         (:init (RobotAt locTable) (At trayA locTable) (not (Heavy trayA)))
///         (:goal (and (InGripper trayA)))
///     )"#;
///
/// let problem = Problem::from_str(input).unwrap();
///
/// assert_eq!(problem.name(), &Name::new("carry-tray"));
/// assert_eq!(problem.domain(), &Name::new("dinner-table"));
/// assert!(problem.requirements().is_empty());
/// assert_eq!(problem.objects().len(), 3);
/// assert_eq!(problem.init().len(), 3);
/// assert_eq!(problem.goals().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// The problem name.
    name: Name,
    /// The name of the [`Domain`](crate::parsed_types::Domain) this problem
    /// belongs to.
    domain: Name,
    /// The optional list of requirements.
    requires: Requirements,
    /// The optional list of object declarations.
    objects: TypedNames,
    /// The initial state definition. Negative literals assert absence.
    init: Vec<NameLiteral>,
    /// The goal definition.
    goal: Vec<NameLiteral>,
}

impl Problem {
    /// Creates a new [`Problem`] instance.
    pub const fn new(
        name: Name,
        domain: Name,
        requires: Requirements,
        objects: TypedNames,
        init: Vec<NameLiteral>,
        goal: Vec<NameLiteral>,
    ) -> Self {
        Self {
            name,
            domain,
            requires,
            objects,
            init,
            goal,
        }
    }

    /// Creates a builder to easily construct problems.
    pub fn builder<P: Into<Name>, D: Into<Name>>(
        problem_name: P,
        domain_name: D,
        init: Vec<NameLiteral>,
        goal: Vec<NameLiteral>,
    ) -> Self {
        Self {
            name: problem_name.into(),
            domain: domain_name.into(),
            requires: Requirements::default(),
            objects: TypedNames::default(),
            init,
            goal,
        }
    }

    /// Adds a list of object declarations to the problem.
    pub fn with_objects<O: Into<TypedNames>>(mut self, objects: O) -> Self {
        self.objects = objects.into();
        self
    }

    /// Returns the problem name.
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the domain name.
    pub const fn domain(&self) -> &Name {
        &self.domain
    }

    /// Returns the optional problem requirements.
    pub const fn requirements(&self) -> &Requirements {
        &self.requires
    }

    /// Returns the optional object declarations.
    pub const fn objects(&self) -> &TypedNames {
        &self.objects
    }

    /// Returns the initialization of the problem.
    pub const fn init(&self) -> &Vec<NameLiteral> {
        &self.init
    }

    /// Returns the goal statement of the problem.
    pub const fn goals(&self) -> &Vec<NameLiteral> {
        &self.goal
    }
}
