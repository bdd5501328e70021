//! Provides parsers for types and typed lists.

use crate::parsed_types::{PrimitiveType, Type, Typed, TypedList};
use crate::parsers::{
    leading_whitespace, parse_name, prefix_expr, space_separated_list0, space_separated_list1,
    ParseResult, Span,
};
use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::{preceded, tuple};

/// Parses a primitive type name.
pub fn parse_primitive_type<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PrimitiveType> {
    map(parse_name, PrimitiveType::new)(input.into())
}

/// Parses a type, i.e. `<primitive-type>` or `(either <primitive-type>+)`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_type, preamble::*};
/// # use eagerground::parsed_types::Type;
/// assert!(parse_type(Span::new("Location")).is_value(Type::from("Location")));
/// assert!(parse_type(Span::new("(either IsTray Object)"))
///     .is_value(Type::from(vec!["IsTray", "Object"])));
/// ```
pub fn parse_type<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Type> {
    alt((
        map(
            prefix_expr("either", space_separated_list1(parse_primitive_type)),
            Type::EitherOf,
        ),
        map(parse_primitive_type, Type::Exactly),
    ))(input.into())
}

/// Parses a typed list such as `?o ?t - IsTray ?l - Location ?x`. Elements
/// without a trailing `- type` are typed as `object`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_variable, typed_list, preamble::*};
/// # use eagerground::parsed_types::*;
/// let (_, list) = typed_list(parse_variable)(Span::new("?o ?t - IsTray ?x")).unwrap();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[0].type_(), &Type::from("IsTray"));
/// assert_eq!(list[1].value(), &Variable::from_str("t"));
/// assert!(list[2].type_().is_unconstrained());
/// ```
pub fn typed_list<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, TypedList<O>>
where
    F: Clone + FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    let typed_group = tuple((
        space_separated_list1(inner.clone()),
        preceded(leading_whitespace(char('-')), leading_whitespace(parse_type)),
    ));

    map(
        tuple((many0(typed_group), space_separated_list0(inner))),
        |(groups, untyped)| {
            let mut list = Vec::new();
            for (values, r#type) in groups {
                list.extend(values.into_iter().map(|v| Typed::new(v, r#type.clone())));
            }
            list.extend(untyped.into_iter().map(Typed::new_object));
            TypedList::new(list)
        },
    )
}

impl crate::parsers::Parser for Type {
    type Item = Type;

    /// See [`parse_type`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_type(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Name;
    use crate::parsers::Match;

    #[test]
    fn untyped_list_defaults_to_object() {
        let mut parser = typed_list(parse_name);
        let (remainder, list) = parser(Span::new("robot trayA locTable")).unwrap();
        assert!(remainder.is_empty());
        assert_eq!(list.len(), 3);
        assert!(list.iter().all(|t| t.type_().is_unconstrained()));
    }

    #[test]
    fn groups_share_their_type() {
        let mut parser = typed_list(parse_name);
        let (_, list) = parser(Span::new("locDoor locTable - Location trayA - IsTray")).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].type_(), &Type::from("Location"));
        assert_eq!(list[1].type_(), &Type::from("Location"));
        assert_eq!(list[2].value(), &Name::from("trayA"));
        assert_eq!(list[2].type_(), &Type::from("IsTray"));
    }

    #[test]
    fn empty_list() {
        let mut parser = typed_list(parse_name);
        assert!(parser(Span::new("")).is_exactly(TypedList::default()));
    }
}
