//! Provides parsers for precondition formulas.

use crate::parsed_types::PropCondition;
use crate::parsers::{atom, parens, parse_term, parse_variable, typed_list, ParseResult, Span};
use crate::parsers::{leading_whitespace, prefix_expr, space_separated_list0};
use nom::branch::alt;
use nom::character::complete::multispace1;
use nom::combinator::map;
use nom::sequence::{preceded, tuple};

/// Parser for precondition formulas.
///
/// Keywords are tried before plain atoms, so a predicate cannot be named
/// `and`, `or`, `not`, `imply`, `forall` or `exists`.
///
/// ## Examples
/// ```
/// # use eagerground::parsers::{parse_prop_condition, preamble::*};
/// # use eagerground::parsed_types::*;
/// // Atom
/// assert!(parse_prop_condition("(On ?o objB)").is_value(
///    PropCondition::new_atom(
///       Atom::new(
///          PredicateName::from("On"),
///          vec![Term::Variable("o".into()), Term::Name("objB".into())]
///       )
///    )
/// ));
///
/// // Negation
/// assert!(parse_prop_condition("(not (Heavy ?t))").is_value(
///    PropCondition::new_not(
///       PropCondition::new_atom(Atom::new(
///          PredicateName::from("Heavy"),
///          vec![Term::Variable("t".into())]
///       ))
///    )
/// ));
///
/// // Implication
/// assert!(parse_prop_condition("(imply (OnTray ?o ?t) (Topmost ?o ?t))").is_value(
///     PropCondition::new_imply(
///         PropCondition::new_atom(Atom::new(
///             PredicateName::from("OnTray"),
///             vec![Term::Variable("o".into()), Term::Variable("t".into())]
///         )),
///         PropCondition::new_atom(Atom::new(
///             PredicateName::from("Topmost"),
///             vec![Term::Variable("o".into()), Term::Variable("t".into())]
///         ))
///     )
/// ));
///
/// // Universal quantification
/// assert!(parse_prop_condition("(forall (?x) (not (InGripper ?x)))").is_value(
///     PropCondition::new_forall(
///         TypedList::from_iter([Variable::from_str("x").to_typed(Type::default())]),
///         PropCondition::new_not(PropCondition::new_atom(Atom::new(
///             PredicateName::from("InGripper"),
///             vec![Term::Variable("x".into())]
///         )))
///     )
/// ));
///
/// // Equality
/// assert!(parse_prop_condition("(not (= ?from ?to))").is_value(
///     PropCondition::new_not(
///         PropCondition::new_equality(
///             Term::Variable("from".into()),
///             Term::Variable("to".into())
///        )
///     )
/// ));
/// ```
pub fn parse_prop_condition<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PropCondition> {
    let and = map(
        prefix_expr("and", space_separated_list0(parse_prop_condition)),
        PropCondition::new_and,
    );

    let or = map(
        prefix_expr("or", space_separated_list0(parse_prop_condition)),
        PropCondition::new_or,
    );

    let not = map(
        prefix_expr("not", parse_prop_condition),
        PropCondition::new_not,
    );

    let imply = map(
        prefix_expr(
            "imply",
            tuple((
                parse_prop_condition,
                preceded(multispace1, parse_prop_condition),
            )),
        ),
        PropCondition::new_imply_tuple,
    );

    let forall = map(
        prefix_expr(
            "forall",
            tuple((
                parens(typed_list(parse_variable)),
                leading_whitespace(parse_prop_condition),
            )),
        ),
        |(variables, body)| PropCondition::new_forall(variables, body),
    );

    let exists = map(
        prefix_expr(
            "exists",
            tuple((
                parens(typed_list(parse_variable)),
                leading_whitespace(parse_prop_condition),
            )),
        ),
        |(variables, body)| PropCondition::new_exists(variables, body),
    );

    let equality = map(
        prefix_expr("=", tuple((parse_term, preceded(multispace1, parse_term)))),
        |(a, b)| PropCondition::new_equality(a, b),
    );

    let atom = map(atom(parse_term), PropCondition::new_atom);

    alt((and, or, not, imply, forall, exists, equality, atom))(input.into())
}

impl crate::parsers::Parser for PropCondition {
    type Item = PropCondition;

    /// See [`parse_prop_condition`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_prop_condition(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Type, Variable};

    #[test]
    fn typed_exists() {
        let input = "(exists (?a - Location) (and (RobotAt ?a) (IsAccessPointFor ?a ?l)))";
        let (remainder, condition) = parse_prop_condition(Span::new(input)).unwrap();
        assert!(remainder.is_empty());
        match condition {
            PropCondition::Exists(variables, body) => {
                assert_eq!(variables.len(), 1);
                assert_eq!(variables[0].value(), &Variable::from_str("a"));
                assert_eq!(variables[0].type_(), &Type::from("Location"));
                assert!(matches!(*body, PropCondition::And(ref v) if v.len() == 2));
            }
            other => panic!("expected exists, got {other:?}"),
        }
    }

    #[test]
    fn predicate_prefixed_by_keyword_is_an_atom() {
        let (_, condition) = parse_prop_condition(Span::new("(order-placed ?o)")).unwrap();
        assert!(matches!(condition, PropCondition::Atom(_)));
    }

    #[test]
    fn comments_between_conjuncts() {
        let input = "(and (RobotAt ?l1)
                          ; the robot must stand at an access point
                          (IsAccessPointFor ?l1 ?l2))";
        let (_, condition) = parse_prop_condition(Span::new(input)).unwrap();
        assert!(matches!(condition, PropCondition::And(ref v) if v.len() == 2));
    }
}
