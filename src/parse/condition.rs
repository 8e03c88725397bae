use winnow::combinator::{alt, opt};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use crate::Comparator;

/// The three tokens of an operand: `field comparator literal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConditionParts<'a> {
    pub(crate) field: &'a str,
    pub(crate) comparator: &'a str,
    pub(crate) literal: &'a str,
}

// -- Tokens -----------------------------------------------------------------

fn blank(input: &mut &str) -> ModalResult<()> {
    take_while(1.., |c: char| c.is_whitespace()).void().parse_next(input)
}

fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !c.is_whitespace()).parse_next(input)
}

fn parts<'i>(input: &mut &'i str) -> ModalResult<ConditionParts<'i>> {
    opt(blank).parse_next(input)?;
    let field = word.parse_next(input)?;
    blank.parse_next(input)?;
    let comparator = word.parse_next(input)?;
    blank.parse_next(input)?;
    let literal = word.parse_next(input)?;
    opt(blank).parse_next(input)?;
    Ok(ConditionParts {
        field,
        comparator,
        literal,
    })
}

fn comparator(input: &mut &str) -> ModalResult<Comparator> {
    alt((
        ">=".value(Comparator::Gte),
        ">".value(Comparator::Gt),
        "<=".value(Comparator::Lte),
        "<".value(Comparator::Lt),
        "!=".value(Comparator::Neq),
        "=".value(Comparator::Eq),
    ))
    .parse_next(input)
}

// -- Entry points -----------------------------------------------------------

/// Split a condition into exactly three whitespace-separated tokens.
pub(crate) fn split_condition(condition: &str) -> Option<ConditionParts<'_>> {
    parts.parse(condition).ok()
}

/// Recognise a comparator token. The whole token must match.
pub(crate) fn parse_comparator(token: &str) -> Option<Comparator> {
    comparator.parse(token).ok()
}

/// Strip one pair of surrounding single quotes. A lone `'` becomes empty.
pub(crate) fn unquote(literal: &str) -> &str {
    if literal.starts_with('\'') && literal.ends_with('\'') {
        literal.get(1..literal.len() - 1).unwrap_or("")
    } else {
        literal
    }
}
