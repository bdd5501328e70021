//! Provides parsers for requirements.

use crate::parsed_types::{Requirement, Requirements};
use crate::parsers::{parse_name, prefix_expr, space_separated_list1, ParseResult, Span};
use nom::character::complete::char;
use nom::combinator::{map, map_opt, recognize};
use nom::sequence::pair;
use std::str::FromStr;

/// Parses a requirements section, e.g. `(:requirements :strips :typing)`.
pub fn parse_requirements<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Requirements> {
    map(
        prefix_expr(
            ":requirements",
            space_separated_list1(parse_requirement_key),
        ),
        Requirements::new,
    )(input.into())
}

/// Parses a single requirement key. Unsupported keys are rejected.
///
/// ## Example
/// ```
/// # use eagerground::parsers::{parse_requirement_key, preamble::*};
/// # use eagerground::parsed_types::Requirement;
/// assert!(parse_requirement_key(":negative-preconditions")
///     .is_value(Requirement::NegativePreconditions));
/// assert!(parse_requirement_key(":durative-actions").is_err());
/// ```
pub fn parse_requirement_key<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Requirement> {
    map_opt(recognize(pair(char(':'), parse_name)), |x: Span<'a>| {
        Requirement::from_str(x.fragment()).ok()
    })(input.into())
}

impl crate::parsers::Parser for Requirements {
    type Item = Requirements;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_requirements(input)
    }
}

impl crate::parsers::Parser for Requirement {
    type Item = Requirement;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_requirement_key(input)
    }
}
