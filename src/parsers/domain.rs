//! Provides parsers for domain definitions.

use crate::parsed_types::{Domain, PredicateDefinition};
use crate::parsers::{
    parens, parse_action_definition, parse_name, parse_predicate_name, parse_requirements,
    parse_variable, prefix_expr, space_separated_list1, surrounding_whitespace, typed_list,
    ParseResult, Span,
};
use nom::combinator::{map, opt};
use nom::sequence::{pair, tuple};

/// Parses a predicate signature, e.g. `(Obstructs ?l ?o1 ?o2)`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_predicate_definition, preamble::*};
/// let (_, definition) = parse_predicate_definition(Span::new("(Obstructs ?l ?o1 ?o2)")).unwrap();
/// assert_eq!(definition.name().as_str(), "Obstructs");
/// assert_eq!(definition.arity(), 3);
/// ```
pub fn parse_predicate_definition<'a, T: Into<Span<'a>>>(
    input: T,
) -> ParseResult<'a, PredicateDefinition> {
    map(
        parens(pair(parse_predicate_name, typed_list(parse_variable))),
        |(name, variables)| PredicateDefinition::new(name, variables),
    )(input.into())
}

/// Parses a domain definition. Sections must appear in the order
/// requirements, types, constants, predicates, actions; all of them are
/// optional.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_domain, preamble::*};
/// # use eagerground::parsed_types::*;
/// let input = r#"
/// (define
///     (domain dinner-table)
///     (:requirements :strips :typing)
///     (:types Location)
///     (:constants kitchen - Location)
///
///     (:predicates
///          (RobotAt ?l - Location)
///          (Connected ?from ?to - Location)
///     )
///
///     (:action moveTo
///         :parameters (?from ?to - Location)
///         :precondition (and (RobotAt ?from) (Connected ?from ?to))
///         :effect (and (RobotAt ?to) (not (RobotAt ?from)))
///     )
/// )"#;
///
/// let (remainder, domain) = parse_domain(input).unwrap();
///
/// assert!(remainder.is_empty());
/// assert_eq!(domain.name(), &Name::new("dinner-table"));
/// assert_eq!(domain.requirements().len(), 2);
/// assert_eq!(domain.types().len(), 1);
/// assert_eq!(domain.constants().len(), 1);
/// assert_eq!(domain.predicates().len(), 2);
/// assert_eq!(domain.actions().len(), 1);
/// ```
pub fn parse_domain<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Domain> {
    map(
        surrounding_whitespace(prefix_expr(
            "define",
            tuple((
                prefix_expr("domain", parse_name),
                opt(parse_requirements),
                opt(prefix_expr(":types", typed_list(parse_name))),
                opt(prefix_expr(":constants", typed_list(parse_name))),
                opt(prefix_expr(
                    ":predicates",
                    space_separated_list1(parse_predicate_definition),
                )),
                opt(space_separated_list1(parse_action_definition)),
            )),
        )),
        |(name, requirements, types, constants, predicates, actions)| {
            Domain::new(
                name,
                requirements.unwrap_or_default(),
                types.unwrap_or_default(),
                constants.unwrap_or_default(),
                predicates.unwrap_or_default(),
                actions.unwrap_or_default(),
            )
        },
    )(input.into())
}

impl crate::parsers::Parser for PredicateDefinition {
    type Item = PredicateDefinition;

    /// See [`parse_predicate_definition`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_predicate_definition(input)
    }
}

impl crate::parsers::Parser for Domain {
    type Item = Domain;

    /// See [`parse_domain`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_domain(input)
    }
}
