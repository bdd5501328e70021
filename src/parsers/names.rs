//! Provides parsers for names, variables and terms.

use crate::parsed_types::{ActionName, Name, PredicateName, Term, Variable};
use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::bytes::complete::take_while;
use nom::character::complete::{char, satisfy};
use nom::combinator::{map, recognize};
use nom::sequence::{pair, preceded};

/// Parses a name: a letter followed by letters, digits, `-` and `_`.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_name, preamble::*};
/// # use eagerground::parsed_types::Name;
/// assert!(parse_name(Span::new("locTable")).is_value(Name::from("locTable")));
/// assert!(parse_name(Span::new("dinner-table_2")).is_value(Name::from("dinner-table_2")));
/// assert!(parse_name(Span::new("2nd")).is_err());
/// assert!(parse_name(Span::new("?x")).is_err());
/// ```
pub fn parse_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Name> {
    map(
        recognize(pair(
            satisfy(|c| c.is_ascii_alphabetic()),
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
        )),
        |name: Span<'a>| Name::new(name.fragment()),
    )(input.into())
}

pub fn parse_predicate_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PredicateName> {
    map(parse_name, PredicateName::new)(input.into())
}

/// Parses an action name.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_action_name, preamble::*};
/// # use eagerground::parsed_types::ActionName;
/// assert!(parse_action_name(Span::new("putDownTray")).is_value(ActionName::from_str("putDownTray")));
/// assert!(parse_action_name(Span::new("?x")).is_err());
/// ```
pub fn parse_action_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, ActionName> {
    map(parse_name, ActionName::new)(input.into())
}

/// Parses a variable, i.e. `?` followed by a name.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_variable, preamble::*};
/// # use eagerground::parsed_types::Variable;
/// assert!(parse_variable(Span::new("?tray")).is_value(Variable::from_str("tray")));
/// assert!(parse_variable(Span::new("tray")).is_err());
/// ```
pub fn parse_variable<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Variable> {
    map(preceded(char('?'), parse_name), Variable::new)(input.into())
}

/// Parses a term, i.e. a variable or a name.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_term, preamble::*};
/// # use eagerground::parsed_types::*;
/// assert!(parse_term(Span::new("?o")).is_value(Term::Variable(Variable::from_str("o"))));
/// assert!(parse_term(Span::new("trayA")).is_value(Term::Name(Name::from("trayA"))));
/// ```
pub fn parse_term<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Term> {
    alt((
        map(parse_variable, Term::Variable),
        map(parse_name, Term::Name),
    ))(input.into())
}

macro_rules! impl_parser {
    ($($item:ty => $parser:ident),* $(,)?) => {
        $(
            impl crate::parsers::Parser for $item {
                type Item = $item;

                #[doc = concat!("See [`", stringify!($parser), "`].")]
                fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
                    $parser(input)
                }
            }
        )*
    };
}

impl_parser!(
    Name => parse_name,
    PredicateName => parse_predicate_name,
    ActionName => parse_action_name,
    Variable => parse_variable,
    Term => parse_term,
);
