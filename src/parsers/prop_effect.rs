//! Provides parsers for propositional effects.

use crate::parsed_types::PropEffect;
use crate::parsers::{
    atom, leading_whitespace, parens, parse_term, parse_variable, prefix_expr,
    space_separated_list0, typed_list, ParseResult, Span,
};
use nom::branch::alt;
use nom::combinator::map;
use nom::sequence::tuple;

/// Parses propositional effects.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_prop_effect, preamble::*};
/// # use eagerground::parsed_types::*;
/// assert!(parse_prop_effect("(InGripper ?o)").is_value(
///     PropEffect::new_add(Atom::new(
///        PredicateName::from("InGripper"),
///        vec![Term::Variable("o".into())]
///     ))
/// ));
///
/// assert!(parse_prop_effect("(not (At ?o ?l2))").is_value(
///     PropEffect::new_delete(Atom::new(
///        PredicateName::from("At"),
///        vec![Term::Variable("o".into()), Term::Variable("l2".into())]
///     ))
/// ));
/// ```
pub fn parse_prop_effect<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PropEffect> {
    let forall = map(
        prefix_expr(
            "forall",
            tuple((
                parens(typed_list(parse_variable)),
                leading_whitespace(parse_effect_list),
            )),
        ),
        |(variables, effects)| PropEffect::new_forall(variables, effects),
    );
    let is = map(atom(parse_term), PropEffect::new_add);
    let is_not = map(prefix_expr("not", atom(parse_term)), PropEffect::new_delete);

    alt((forall, is_not, is))(input.into())
}

/// Parses either a conjunction of effects or a single effect.
pub fn parse_effect_list<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<PropEffect>> {
    alt((
        prefix_expr("and", space_separated_list0(parse_prop_effect)),
        map(parse_prop_effect, |effect| vec![effect]),
    ))(input.into())
}

impl crate::parsers::Parser for PropEffect {
    type Item = PropEffect;

    /// See [`parse_prop_effect`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_prop_effect(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantified_delete() {
        let input = "(forall (?l ?x) (not (Obstructs ?l ?o ?x)))";
        let (remainder, effect) = parse_prop_effect(Span::new(input)).unwrap();
        assert!(remainder.is_empty());
        match effect {
            PropEffect::Forall(variables, effects) => {
                assert_eq!(variables.len(), 2);
                assert_eq!(effects.len(), 1);
                assert!(matches!(effects[0], PropEffect::Delete(_)));
            }
            other => panic!("expected forall, got {other:?}"),
        }
    }

    #[test]
    fn quantified_conjunction() {
        let input = "(forall (?t) (and (not (OnTray ?o ?t)) (not (Topmost ?o ?t))))";
        let (_, effect) = parse_prop_effect(Span::new(input)).unwrap();
        let mut deletes = 0;
        effect.for_each_atom(&mut |_, is_add| {
            if !is_add {
                deletes += 1
            }
        });
        assert_eq!(deletes, 2);
    }
}
