//! A nom based reader for domain, problem and plan files.
//!
//! Every parser accepts anything convertible into a [`Span`], so positions
//! are tracked for error reporting.

mod action_definition;
mod atom;
mod domain;
mod names;
mod plan;
mod problem;
mod prop_condition;
mod prop_effect;
mod requirements;
mod test_helpers;
mod types;
mod utilities;

#[cfg(test)]
pub(crate) use test_helpers::Match;
pub use test_helpers::UnwrapValue;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    fn parse_span(input: Span) -> ParseResult<Self::Item> {
        Self::parse(input)
    }

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Renders a parse failure as `line:column: message`, using the furthest
/// position any alternative reached.
pub fn describe_error(input: &str, error: &nom::Err<ParseError>) -> String {
    match error {
        nom::Err::Incomplete(_) => "unexpected end of input".to_string(),
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let offset = nom_greedyerror::error_position(e).unwrap_or(0);
            let consumed = &input[..offset.min(input.len())];
            let line = consumed.matches('\n').count() + 1;
            let column = consumed.len() - consumed.rfind('\n').map_or(0, |i| i + 1) + 1;
            let context: String = input[offset.min(input.len())..]
                .chars()
                .take(30)
                .take_while(|c| *c != '\n')
                .collect();
            format!("{line}:{column}: could not parse near `{context}`")
        }
    }
}

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

// Parsers
pub use action_definition::parse_action_definition;
pub use domain::{parse_domain, parse_predicate_definition};
pub use names::{parse_action_name, parse_name, parse_predicate_name, parse_term, parse_variable};
pub use plan::{parse_plan, parse_plan_step};
pub use problem::parse_problem;
pub use prop_condition::parse_prop_condition;
pub use prop_effect::{parse_effect_list, parse_prop_effect};
pub use requirements::{parse_requirement_key, parse_requirements};
pub use types::{parse_primitive_type, parse_type};

// Parser combinators
pub use atom::{atom, literal};
pub use types::typed_list;
pub use utilities::skip_comments;

#[allow(unused_imports)]
pub(crate) use utilities::{
    leading_whitespace, parens, prefix_expr, space_separated_list0, space_separated_list1,
    surrounding_whitespace,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Domain;

    #[test]
    fn error_reports_line_and_column() {
        let input = "(define (domain d)\n  (:predicates (p ?x)\n  (:action a :parameters ?x))";
        let error = Domain::from_str(input).unwrap_err();
        let message = describe_error(input, &error);
        assert!(message.contains(':'), "{message}");
        assert!(message.contains("could not parse"), "{message}");
    }
}
