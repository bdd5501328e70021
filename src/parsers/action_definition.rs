//! Provides parsers for action definitions.

use crate::parsed_types::ActionDefinition;
use crate::parsers::{
    leading_whitespace, parens, parse_action_name, parse_effect_list, parse_prop_condition,
    parse_variable, prefix_expr, space_separated_list0, typed_list, ParseResult, Span,
};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, multispace1};
use nom::combinator::{map, map_opt, opt, recognize};
use nom::sequence::{pair, preceded, tuple};

/// Parses an action definition. Besides the usual `:parameters`,
/// `:precondition` and `:effect` sections an action may carry a trailing
/// `:cost <number>`; without it the action costs 1.
///
/// ## Example
/// ```
/// # use eagerground::parsed_types::*;
/// # use eagerground::parsers::{parse_action_definition, preamble::*};
/// let input = r#"(:action putDownTray
///                    :parameters  (?t ?l)
///                    :precondition (InGripper ?t)
///                    :effect (and (At ?t ?l) (not (InGripper ?t))))"#;
///
/// let action = parse_action_definition(Span::new(input));
///
/// assert!(action.is_value(
///     ActionDefinition::new(
///         ActionName::from_str("putDownTray"),
///         TypedList::from_iter([
///             Variable::from_str("t").to_typed(Type::default()),
///             Variable::from_str("l").to_typed(Type::default()),
///         ]),
///         vec![
///             PropCondition::new_atom(Atom::new(
///                 PredicateName::from_str("InGripper"),
///                 vec![Term::Variable(Variable::from_str("t"))])),
///         ],
///         vec![
///             PropEffect::new_add(Atom::new(
///                 PredicateName::from_str("At"),
///                 vec![
///                     Term::Variable(Variable::from_str("t")),
///                     Term::Variable(Variable::from_str("l")),
///                 ])),
///             PropEffect::new_delete(Atom::new(
///                 PredicateName::from_str("InGripper"),
///                 vec![Term::Variable(Variable::from_str("t"))])),
///         ]
///     )
/// ));
/// ```
pub fn parse_action_definition<'a, T: Into<Span<'a>>>(
    input: T,
) -> ParseResult<'a, ActionDefinition> {
    let parameters = keyword_section(":parameters", parens(typed_list(parse_variable)));
    let precondition = keyword_section(
        ":precondition",
        alt((
            prefix_expr("and", space_separated_list0(parse_prop_condition)),
            map(parse_prop_condition, |condition| vec![condition]),
        )),
    );
    let effect = keyword_section(":effect", parse_effect_list);
    let cost = keyword_section(":cost", parse_cost);

    map(
        prefix_expr(
            ":action",
            tuple((
                parse_action_name,
                parameters,
                opt(precondition),
                opt(effect),
                opt(cost),
            )),
        ),
        |(name, parameters, preconditions, effects, cost)| {
            let action = ActionDefinition::new(
                name,
                parameters,
                preconditions.unwrap_or_default(),
                effects.unwrap_or_default(),
            );
            match cost {
                Some(cost) => action.with_cost(cost),
                None => action,
            }
        },
    )(input.into())
}

/// Parses `<keyword> <inner>` where the keyword is one of the `:`-prefixed
/// section markers inside an action.
fn keyword_section<'a, F, O>(
    keyword: &'a str,
    inner: F,
) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(
        leading_whitespace(tag(keyword)),
        preceded(multispace1, inner),
    )
}

/// Parses a non-negative decimal number such as `2` or `0.5`.
fn parse_cost<'a>(input: Span<'a>) -> ParseResult<'a, f64> {
    map_opt(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        |x: Span<'a>| x.fragment().parse::<f64>().ok(),
    )(input)
}

impl crate::parsers::Parser for ActionDefinition {
    type Item = ActionDefinition;

    /// See [`parse_action_definition`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_action_definition(input)
    }
}
