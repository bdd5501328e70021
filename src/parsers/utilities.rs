//! Whitespace, comment and bracketing combinators shared by the parsers.
//!
//! Line comments run from `;` to the end of the line and may appear anywhere
//! whitespace may.

use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag};
use nom::character::complete::{char, multispace1};
use nom::combinator::{opt, value};
use nom::multi::{many0_count, many1_count, separated_list0, separated_list1};
use nom::sequence::{delimited, pair, preceded};

fn line_comment(input: Span) -> ParseResult<()> {
    value((), pair(char(';'), opt(is_not("\r\n"))))(input)
}

/// Skips any run of whitespace and line comments, including none.
pub fn skip_comments<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value((), many0_count(alt((value((), multispace1), line_comment))))(input.into())
}

/// Like [`skip_comments`] but fails unless something was skipped. Used to
/// separate list elements.
fn separator(input: Span) -> ParseResult<()> {
    value((), many1_count(alt((value((), multispace1), line_comment))))(input)
}

/// Runs `inner` after skipping whitespace and comments.
pub fn leading_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(skip_comments, inner)
}

/// Runs `inner`, skipping whitespace and comments on both sides.
pub fn surrounding_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(skip_comments, inner, skip_comments)
}

/// Parses `( <inner> )`.
pub fn parens<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(
        leading_whitespace(char('(')),
        leading_whitespace(inner),
        leading_whitespace(char(')')),
    )
}

/// Parses `( <keyword> <inner> )`, e.g. `(:objects ...)` or `(not ...)`.
pub fn prefix_expr<'a, F, O>(keyword: &'a str, inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    parens(preceded(tag(keyword), leading_whitespace(inner)))
}

/// Zero or more `inner`s separated by whitespace or comments.
pub fn space_separated_list0<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    leading_whitespace(separated_list0(separator, inner))
}

/// One or more `inner`s separated by whitespace or comments.
pub fn space_separated_list1<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    leading_whitespace(separated_list1(separator, inner))
}
