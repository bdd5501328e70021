//! Provides parsers for problem definitions.

use crate::parsed_types::Problem;
use crate::parsers::{
    literal, parse_name, parse_requirements, prefix_expr, space_separated_list0,
    surrounding_whitespace, typed_list, ParseResult, Span,
};
use nom::branch::alt;
use nom::combinator::{map, opt};
use nom::sequence::tuple;

/// Parses a problem definition. The initial state may contain negative
/// literals, which assert that an atom is absent.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_problem, preamble::*};
/// # use eagerground::parsed_types::*;
/// let input = r#"(define (problem carry-tray)
///         (:domain dinner-table)
///         (:objects robot - Robot trayA - IsTray locTable)
///         (:init (RobotAt locTable) (At trayA locTable))
///         (:goal (and (InGripper trayA) (not (At trayA locTable))))
///     )"#;
///
/// let (_, problem) = parse_problem(input).unwrap();
///
/// assert_eq!(problem.name(), &Name::new("carry-tray"));
/// assert_eq!(problem.domain(), &Name::new("dinner-table"));
/// assert_eq!(problem.objects().len(), 3);
/// assert_eq!(problem.init().len(), 2);
/// assert_eq!(problem.goals().len(), 2);
/// assert!(problem.goals()[1].is_negated());
/// ```
pub fn parse_problem<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Problem> {
    map(
        surrounding_whitespace(prefix_expr(
            "define",
            tuple((
                prefix_expr("problem", parse_name),
                prefix_expr(":domain", parse_name),
                opt(parse_requirements),
                opt(prefix_expr(":objects", typed_list(parse_name))),
                prefix_expr(":init", space_separated_list0(literal(parse_name))),
                prefix_expr(
                    ":goal",
                    alt((
                        prefix_expr("and", space_separated_list0(literal(parse_name))),
                        map(literal(parse_name), |goal| vec![goal]),
                    )),
                ),
            )),
        )),
        |(name, domain, requirements, objects, init, goal)| {
            Problem::new(
                name,
                domain,
                requirements.unwrap_or_default(),
                objects.unwrap_or_default(),
                init,
                goal,
            )
        },
    )(input.into())
}

impl crate::parsers::Parser for Problem {
    type Item = Problem;

    /// See [`parse_problem`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_problem(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn dinner_problems_parse() {
        for text in [
            DINNER_SINGLE_PICK_PROBLEM_TEXT,
            DINNER_HEAVY_TRAY_PROBLEM_TEXT,
            DINNER_OBSTRUCTED_PROBLEM_TEXT,
            DINNER_SERVE_PROBLEM_TEXT,
        ] {
            let (remainder, problem) = parse_problem(text).unwrap();
            assert!(remainder.is_empty());
            assert_eq!(problem.domain().as_str(), "dinner-table");
            assert!(!problem.goals().is_empty());
        }
    }
}
