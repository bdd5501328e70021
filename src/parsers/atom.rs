//! Provides parsers for atoms and literals.

use crate::parsed_types::{Atom, Literal};
use crate::parsers::{leading_whitespace, parens, prefix_expr, space_separated_list0};
use crate::parsers::{parse_predicate_name, ParseResult, Span};
use nom::branch::alt;
use nom::combinator::map;
use nom::sequence::tuple;

/// Parses an atom, i.e. `(<predicate> <value>*)`, where each value is parsed
/// by `inner`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{atom, parse_name, preamble::*};
/// # use eagerground::parsed_types::*;
/// assert!(atom(parse_name)(Span::new("(At trayA locTable)")).is_value(
///     Atom::new(
///         PredicateName::from("At"),
///         vec![Name::from("trayA"), Name::from("locTable")]
///     )
/// ));
/// ```
pub fn atom<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Atom<O>>
where
    F: Clone + FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    map(
        parens(tuple((
            parse_predicate_name,
            leading_whitespace(space_separated_list0(inner)),
        ))),
        |tuple| Atom::new(tuple.0, tuple.1),
    )
}

/// Parses a literal, i.e. an atom or `(not <atom>)`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{literal, parse_name, preamble::*};
/// # use eagerground::parsed_types::*;
/// assert!(literal(parse_name)(Span::new("(not (Heavy trayA))")).is_value(
///     Literal::new_not(Atom::new(PredicateName::from("Heavy"), vec![Name::from("trayA")]))
/// ));
/// ```
pub fn literal<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Literal<O>>
where
    F: Clone + FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    let is = map(atom(inner.clone()), Literal::new);
    let is_not = map(prefix_expr("not", atom(inner)), Literal::new_not);

    alt((is_not, is))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{parse_name, parse_term};

    #[test]
    fn variables_and_names() {
        let input = "(Obstructs ?l1 ?x objA)";
        let (_, atom) = atom(parse_term)(Span::new(input)).unwrap();
        assert_eq!(atom.len(), 3);
    }

    #[test]
    fn nullary_atom() {
        let (remainder, atom) = atom(parse_name)(Span::new("(arm-empty)")).unwrap();
        assert!(remainder.is_empty());
        assert!(atom.is_empty());
    }

    #[test]
    fn predicates_starting_with_not_are_positive() {
        let (_, literal) = literal(parse_name)(Span::new("(notified robot)")).unwrap();
        assert!(!literal.is_negated());
    }
}
