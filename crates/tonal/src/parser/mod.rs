//! Notation parser using winnow.
//!
//! Entry points take the whole text and answer "no match" with `None`
//! instead of an error, so callers can probe validity cheaply. Turning a
//! miss into an error is left to `Pitch::new` and `Interval::new`.

mod interval;
mod pitch;

use winnow::Parser;

use crate::ast::{IntervalParts, PitchParts};

/// Parse a whole string as a pitch.
pub fn pitch(text: &str) -> Option<PitchParts> {
    pitch::parse_pitch.parse(text).ok()
}

/// Parse a whole string as an interval, rejecting qualities that do not
/// belong to the degree (P2, M5) and degree 0.
pub fn interval(text: &str) -> Option<IntervalParts> {
    interval::parse_interval
        .parse(text)
        .ok()
        .filter(IntervalParts::is_valid)
}
