//! Named pitches: a letter, an accidental run and an optional octave.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::ast::{Accidental, NoteName, PitchParts};
use crate::error::{Result, TheoryError};
use crate::interval::Interval;
use crate::parser;

/// Octave assumed for ordering when a pitch has none.
const DEFAULT_OCTAVE: u8 = 4;

/// A spelled pitch such as `C#4`, `Bbb2` or the bare pitch class `F`.
///
/// Equality compares spelling: `C#4` and `Db4` are different values even
/// though they sound the same. Ordering compares sound; see [`Pitch::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    letter: NoteName,
    accidental: Accidental,
    octave: Option<u8>,
}

impl Pitch {
    /// Parse pitch notation, returning `None` for anything that is not a
    /// valid pitch. Never fails any other way.
    pub fn parse(text: &str) -> Option<PitchParts> {
        parser::pitch(text)
    }

    /// Construct from notation like `"C#4"`, `"eb"` or `"Bbb2"`.
    pub fn new(text: &str) -> Result<Self> {
        match Self::parse(text) {
            Some(parts) => Ok(Pitch {
                letter: parts.letter,
                accidental: parts.accidental,
                octave: parts.octave,
            }),
            None => {
                debug!(text, "rejected pitch notation");
                Err(TheoryError::InvalidPitch(text.to_string()))
            }
        }
    }

    pub fn letter(&self) -> NoteName {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn octave(&self) -> Option<u8> {
        self.octave
    }

    /// Semitones above the natural C of the same octave.
    ///
    /// Not wrapped: `Cb` is -1 and `B#` is 12. Use [`Pitch::pitch_class`]
    /// for the value reduced into 0-11.
    pub fn step(&self) -> i32 {
        self.letter.to_semitone() + self.accidental.to_semitone_offset()
    }

    /// `step` reduced modulo 12
    pub fn pitch_class(&self) -> i32 {
        self.step().rem_euclid(12)
    }

    /// Letter position, C=0 through B=6
    pub fn index(&self) -> usize {
        self.letter.index()
    }

    /// Transpose up by an interval, or by interval notation.
    ///
    /// The result keeps the octave-less form when `self` has no octave.
    /// Fails with [`TheoryError::InvalidPitch`] when the result leaves
    /// octaves 0-7.
    pub fn add<I: AsInterval + ?Sized>(&self, interval: &I) -> Result<Pitch> {
        self.shift(&interval.as_interval()?, 1)
    }

    /// Subtract an interval (giving a pitch) or another pitch (giving the
    /// interval between them). Text is read as an interval.
    pub fn subtract<S: Subtrahend + ?Sized>(&self, other: &S) -> Result<S::Output> {
        other.subtract_from(self)
    }

    /// The unsigned interval between two pitches.
    ///
    /// When both pitches carry an octave the distance is measured between
    /// them as written. Otherwise they are treated as pitch classes and
    /// measured upward from the lower letter within one octave.
    pub fn interval_to(&self, other: &Pitch) -> Result<Interval> {
        let (a, b) = match (self.octave, other.octave) {
            (Some(_), Some(_)) => (self.absolute(), other.absolute()),
            _ => (self.relative(), other.relative()),
        };
        let (low, high) = if a.0 <= b.0 { (a, b) } else { (b, a) };
        let degree = high.0 - low.0 + 1;
        let semitones = if degree == 1 {
            (high.1 - low.1).abs()
        } else {
            high.1 - low.1
        };
        Interval::from_degree_and_semitones(degree, semitones)
    }

    /// Order by `(octave, step)` with a missing octave counted as 4.
    pub fn compare(&self, other: &Pitch) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    fn sort_key(&self) -> (u8, i32) {
        (self.octave.unwrap_or(DEFAULT_OCTAVE), self.step())
    }

    /// (letter position, semitones) within the pitch's own octave
    fn relative(&self) -> (i64, i64) {
        (self.index() as i64, i64::from(self.step()))
    }

    /// (letter position, semitones) counted from C0
    fn absolute(&self) -> (i64, i64) {
        let octave = i64::from(self.octave.unwrap_or(DEFAULT_OCTAVE));
        let (index, step) = self.relative();
        (octave * 7 + index, octave * 12 + step)
    }

    /// Move by an interval in `direction` (1 up, -1 down). The letter moves
    /// by degree and the accidental absorbs whatever semitones are left.
    fn shift(&self, interval: &Interval, direction: i64) -> Result<Pitch> {
        let letters = direction * (i64::from(interval.degree()) - 1);
        let position = self.index() as i64 + letters;
        let octave_carry = position.div_euclid(7);
        let letter = NoteName::from_index(position);

        let target = i64::from(self.step()) + direction * interval.step();
        let natural = i64::from(letter.to_semitone()) + octave_carry * 12;
        let alteration = i32::try_from(target - natural)
            .map_err(|_| TheoryError::InvalidPitch(self.to_string()))?;
        let accidental = Accidental::from_offset(alteration);

        let text = match self.octave {
            Some(octave) => format!("{}{}{}", letter, accidental, i64::from(octave) + octave_carry),
            None => format!("{}{}", letter, accidental),
        };
        let result = Pitch::new(&text)?;
        debug!(from = %self, %interval, direction, to = %result, "transposed pitch");
        Ok(result)
    }
}

/// Anything a pitch can be transposed by.
pub trait AsInterval {
    fn as_interval(&self) -> Result<Interval>;
}

impl AsInterval for Interval {
    fn as_interval(&self) -> Result<Interval> {
        Ok(*self)
    }
}

impl AsInterval for str {
    fn as_interval(&self) -> Result<Interval> {
        Interval::new(self)
    }
}

/// Right-hand side of [`Pitch::subtract`].
pub trait Subtrahend {
    type Output;

    fn subtract_from(&self, pitch: &Pitch) -> Result<Self::Output>;
}

impl Subtrahend for Interval {
    type Output = Pitch;

    fn subtract_from(&self, pitch: &Pitch) -> Result<Pitch> {
        pitch.shift(self, -1)
    }
}

impl Subtrahend for str {
    type Output = Pitch;

    fn subtract_from(&self, pitch: &Pitch) -> Result<Pitch> {
        pitch.shift(&Interval::new(self)?, -1)
    }
}

impl Subtrahend for Pitch {
    type Output = Interval;

    fn subtract_from(&self, pitch: &Pitch) -> Result<Interval> {
        pitch.interval_to(self)
    }
}

/// Agrees with [`Pitch::compare`], except that pitches with the same key but
/// different spelling (`C#4` and `Db4`, or `C` and `C4`) are unordered rather
/// than equal.
impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental)?;
        if let Some(octave) = self.octave {
            write!(f, "{}", octave)?;
        }
        Ok(())
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Pitch::new(s)
    }
}

impl TryFrom<String> for Pitch {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self> {
        Pitch::new(&value)
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.to_string()
    }
}
