//! Provides parsers for plan files.

use crate::parsed_types::{Plan, PlanStep};
use crate::parsers::{
    parens, parse_action_name, parse_name, space_separated_list0, surrounding_whitespace,
    ParseResult, Span,
};
use nom::combinator::map;
use nom::sequence::pair;

/// Parses a single step, `(<action> <object>*)`.
pub fn parse_plan_step<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PlanStep> {
    map(
        parens(pair(parse_action_name, space_separated_list0(parse_name))),
        |(action, objects)| PlanStep::new(action, objects),
    )(input.into())
}

/// Parses a plan, i.e. a whitespace separated list of plan steps. Line
/// comments, such as a trailing `; cost = 3 (unit cost)`, are skipped.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_plan, preamble::*};
/// let input = "(pickTray robot trayA locTable)
///              (moveTo robot locTable locDoor)
///              ; cost = 2 (unit cost)";
/// let (remainder, plan) = parse_plan(input).unwrap();
/// assert!(remainder.is_empty());
/// assert_eq!(plan.steps().len(), 2);
/// assert_eq!(plan.steps()[1].parameters().len(), 3);
/// ```
pub fn parse_plan<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Plan> {
    map(
        surrounding_whitespace(space_separated_list0(parse_plan_step)),
        Plan::new,
    )(input.into())
}

impl crate::parsers::Parser for PlanStep {
    type Item = PlanStep;

    /// See [`parse_plan_step`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan_step(input)
    }
}

impl crate::parsers::Parser for Plan {
    type Item = Plan;

    /// See [`parse_plan`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{ActionName, Name};
    use crate::parsers::Match;

    #[test]
    fn empty_plan() {
        let (remainder, plan) = parse_plan("; no steps\n").unwrap();
        assert!(remainder.is_empty());
        assert!(plan.steps().is_empty());
    }

    #[test]
    fn step_without_objects() {
        assert!(parse_plan_step(Span::new("(noop)"))
            .is_exactly(PlanStep::new(ActionName::from("noop"), vec![])));
    }

    #[test]
    fn step_objects_keep_their_order() {
        let (_, step) = parse_plan_step("( grasp objA loc2 locTable )").unwrap();
        assert_eq!(step.name(), &ActionName::from("grasp"));
        assert_eq!(
            step.parameters(),
            &[Name::from("objA"), Name::from("loc2"), Name::from("locTable")]
        );
    }
}
