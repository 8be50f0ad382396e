//! Interval tokens: a quality symbol followed by a decimal degree.

use winnow::prelude::*;
use winnow::ascii::digit1;
use winnow::token::any;

use crate::ast::{IntervalParts, Quality};

type PResult<T> = winnow::ModalResult<T>;

/// Parse a quality symbol (M, m, A, D, P, and the + / - aliases)
pub fn parse_quality(input: &mut &str) -> PResult<Quality> {
    any.verify_map(Quality::from_symbol).parse_next(input)
}

/// Parse a degree. Fails when the digits overflow `u32`.
pub fn parse_degree(input: &mut &str) -> PResult<u32> {
    digit1.try_map(|digits: &str| digits.parse::<u32>()).parse_next(input)
}

/// Parse quality and degree. Degree-class rules are checked by the caller.
pub fn parse_interval(input: &mut &str) -> PResult<IntervalParts> {
    let quality = parse_quality(input)?;
    let degree = parse_degree(input)?;

    Ok(IntervalParts { quality, degree })
}
