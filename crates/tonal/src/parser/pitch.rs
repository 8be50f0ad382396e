//! Pitch tokens: a letter, a run of one accidental symbol, an optional octave digit.

use winnow::prelude::*;
use winnow::combinator::{alt, opt};
use winnow::token::{any, one_of, take_while};

use crate::ast::{Accidental, NoteName, PitchParts};

type PResult<T> = winnow::ModalResult<T>;

/// Parse a letter A-G in either case
pub fn parse_note_name(input: &mut &str) -> PResult<NoteName> {
    any.verify_map(NoteName::from_char).parse_next(input)
}

/// Parse a homogeneous run of `#` or `b`. An empty run is natural.
pub fn parse_accidental(input: &mut &str) -> PResult<Accidental> {
    let run: Option<&str> =
        opt(alt((take_while(1.., '#'), take_while(1.., 'b')))).parse_next(input)?;
    Ok(match run {
        None => Accidental::Natural,
        Some(run) if run.starts_with('#') => Accidental::Sharp(run.len() as u32),
        Some(run) => Accidental::Flat(run.len() as u32),
    })
}

/// Parse an optional octave digit 0-7
pub fn parse_octave(input: &mut &str) -> PResult<Option<u8>> {
    let digit = opt(one_of('0'..='7')).parse_next(input)?;
    Ok(digit.and_then(|c: char| c.to_digit(10)).map(|d| d as u8))
}

/// Parse a complete pitch
pub fn parse_pitch(input: &mut &str) -> PResult<PitchParts> {
    let letter = parse_note_name(input)?;
    let accidental = parse_accidental(input)?;
    let octave = parse_octave(input)?;

    Ok(PitchParts {
        letter,
        accidental,
        octave,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_name() {
        let mut input = "C";
        assert_eq!(parse_note_name(&mut input).unwrap(), NoteName::C);

        let mut input = "g";
        assert_eq!(parse_note_name(&mut input).unwrap(), NoteName::G);

        let mut input = "H";
        assert!(parse_note_name(&mut input).is_err());
    }

    #[test]
    fn test_parse_note_name_matches_from_char() {
        for c in (0u8..128).map(char::from) {
            let text = c.to_string();
            let mut input = text.as_str();
            assert_eq!(parse_note_name(&mut input).ok(), NoteName::from_char(c), "{:?}", c);
        }
    }

    #[test]
    fn test_parse_accidental() {
        let mut input = "#";
        assert_eq!(parse_accidental(&mut input).unwrap(), Accidental::Sharp(1));

        let mut input = "###";
        assert_eq!(parse_accidental(&mut input).unwrap(), Accidental::Sharp(3));

        let mut input = "bb";
        assert_eq!(parse_accidental(&mut input).unwrap(), Accidental::Flat(2));

        let mut input = "4";
        assert_eq!(parse_accidental(&mut input).unwrap(), Accidental::Natural);
        assert_eq!(input, "4");
    }

    #[test]
    fn test_parse_accidental_stops_at_mixed_run() {
        let mut input = "#b";
        assert_eq!(parse_accidental(&mut input).unwrap(), Accidental::Sharp(1));
        assert_eq!(input, "b");
    }

    #[test]
    fn test_parse_octave() {
        let mut input = "0";
        assert_eq!(parse_octave(&mut input).unwrap(), Some(0));

        let mut input = "7";
        assert_eq!(parse_octave(&mut input).unwrap(), Some(7));

        let mut input = "8";
        assert_eq!(parse_octave(&mut input).unwrap(), None);
        assert_eq!(input, "8");

        let mut input = "";
        assert_eq!(parse_octave(&mut input).unwrap(), None);
    }

    #[test]
    fn test_parse_pitch() {
        let mut input = "c#4";
        let parts = parse_pitch(&mut input).unwrap();
        assert_eq!(parts.letter, NoteName::C);
        assert_eq!(parts.accidental, Accidental::Sharp(1));
        assert_eq!(parts.octave, Some(4));

        // Lowercase b is a letter first, then a flat
        let mut input = "bb";
        let parts = parse_pitch(&mut input).unwrap();
        assert_eq!(parts.letter, NoteName::B);
        assert_eq!(parts.accidental, Accidental::Flat(1));
        assert_eq!(parts.octave, None);
    }
}
