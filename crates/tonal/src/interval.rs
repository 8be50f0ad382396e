//! Diatonic intervals: a quality and a degree.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::ast::{is_perfect_class, IntervalParts, Quality};
use crate::error::{Result, TheoryError};
use crate::parser;

/// Semitones above the root for degrees 1-7, taking perfect or major quality.
const DEGREE_SEMITONES: [i64; 7] = [0, 2, 4, 5, 7, 9, 11];

/// A named distance such as `M3`, `P5` or `m10`.
///
/// Two intervals are equal only when quality and degree both match, so the
/// augmented fourth and diminished fifth are different values. Ordering goes
/// by semitone size; see [`Interval::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    quality: Quality,
    degree: u32,
}

impl Interval {
    /// Parse interval notation, returning `None` for anything that is not a
    /// valid interval. Never fails any other way.
    pub fn parse(text: &str) -> Option<IntervalParts> {
        parser::interval(text)
    }

    /// Construct from notation like `"M3"`, `"P5"` or `"+4"`.
    pub fn new(text: &str) -> Result<Self> {
        match Self::parse(text) {
            Some(parts) => Ok(Interval {
                quality: parts.quality,
                degree: parts.degree,
            }),
            None => {
                debug!(text, "rejected interval notation");
                Err(TheoryError::InvalidInterval(text.to_string()))
            }
        }
    }

    /// Name the interval spanning `semitones` over `degree`.
    pub fn from_degree_and_semitones(degree: i64, semitones: i64) -> Result<Self> {
        let unnamed = TheoryError::UnnamedInterval { degree, semitones };
        let Ok(degree) = u32::try_from(degree) else {
            return Err(unnamed);
        };
        if degree == 0 {
            return Err(unnamed);
        }

        let perfect = is_perfect_class(degree);
        let offset = semitones - natural_semitones(degree);
        let quality = i32::try_from(offset)
            .ok()
            .and_then(|offset| Quality::from_semitone_offset(offset, perfect));
        match quality {
            Some(quality) => Ok(Interval { quality, degree }),
            None => Err(unnamed),
        }
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Spans more than an octave
    pub fn is_compound(&self) -> bool {
        self.degree > 8
    }

    /// Size in semitones. `M3` is 4, `P5` is 7, `M9` is 14.
    pub fn step(&self) -> i64 {
        let offset = match self
            .quality
            .semitone_offset(is_perfect_class(self.degree))
        {
            Some(offset) => offset,
            None => unreachable!(), // quality and degree class were checked at construction
        };
        natural_semitones(self.degree) + i64::from(offset)
    }

    /// The same quality folded into a single octave (degree 2-8).
    /// Intervals up to an octave come back unchanged.
    pub fn single_octave(&self) -> Interval {
        if self.degree <= 8 {
            return *self;
        }
        let folded = Interval {
            quality: self.quality,
            degree: (self.degree - 2) % 7 + 2,
        };
        debug_assert!(IntervalParts::from(folded).is_valid());
        folded
    }

    /// Inversion of the single-octave form: degrees sum to nine,
    /// major swaps with minor and augmented with diminished.
    pub fn inverted(&self) -> Interval {
        let simple = self.single_octave();
        Interval {
            quality: simple.quality.inverted(),
            degree: 9 - simple.degree,
        }
    }

    /// Stack two intervals: `M3` then `m3` is `P5`.
    pub fn combine(&self, other: &Interval) -> Result<Interval> {
        let degree = i64::from(self.degree) + i64::from(other.degree) - 1;
        Self::from_degree_and_semitones(degree, self.step() + other.step())
    }

    /// Order by semitone size alone.
    pub fn compare(&self, other: &Interval) -> Ordering {
        self.step().cmp(&other.step())
    }
}

/// Semitones of the perfect or major interval of this degree, octaves included.
fn natural_semitones(degree: u32) -> i64 {
    let octaves = i64::from((degree - 1) / 7);
    DEGREE_SEMITONES[((degree - 1) % 7) as usize] + octaves * 12
}

/// Agrees with [`Interval::compare`], except that intervals of the same size
/// but different spelling are unordered rather than equal.
impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl From<Interval> for IntervalParts {
    fn from(interval: Interval) -> Self {
        IntervalParts {
            quality: interval.quality,
            degree: interval.degree,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality, self.degree)
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Interval::new(s)
    }
}

impl TryFrom<String> for Interval {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self> {
        Interval::new(&value)
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn iv(text: &str) -> Interval {
        Interval::new(text).unwrap()
    }

    #[test]
    fn test_steps() {
        assert_eq!(iv("M3").step(), 4);
        assert_eq!(iv("P5").step(), 7);
        assert_eq!(iv("P4").step(), 5);
        assert_eq!(iv("m2").step(), 1);
        assert_eq!(iv("P1").step(), 0);
        assert_eq!(iv("M7").step(), 11);
        assert_eq!(iv("P8").step(), 12);
        assert_eq!(iv("m6").step(), 8);
        assert_eq!(iv("A4").step(), 6);
        assert_eq!(iv("D5").step(), 6);
        assert_eq!(iv("D3").step(), 2);
        assert_eq!(iv("D1").step(), -1);
    }

    #[test]
    fn test_compound_steps() {
        assert_eq!(iv("M9").step(), 14);
        assert_eq!(iv("M10").step(), 16);
        assert_eq!(iv("P11").step(), 17);
        assert_eq!(iv("P12").step(), 19);
        assert_eq!(iv("P15").step(), 24);
        assert_eq!(iv("m16").step(), 25);
    }

    #[test]
    fn test_large_degrees() {
        let wide = iv("M70000");
        assert_eq!(wide.degree(), 70000);
        assert_eq!(wide.step(), 11 + 9999 * 12);
        assert!(wide.is_compound());
        assert_eq!(wide.single_octave(), iv("M7"));

        let widest = iv("m4294967295");
        assert_eq!(widest.step(), 4 - 1 + 613566756 * 12);
        assert!(Interval::parse("M4294967296").is_none());
    }

    #[test]
    fn test_aliases_normalize() {
        assert_eq!(iv("+4"), iv("A4"));
        assert_eq!(iv("-5"), iv("D5"));
        assert_eq!(iv("+4").to_string(), "A4");
        assert_eq!(iv("-5").to_string(), "D5");
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            Interval::new("P2"),
            Err(TheoryError::InvalidInterval("P2".to_string()))
        );
        assert!(Interval::parse("P2").is_none());
        assert!(Interval::new("M5").is_err());
        assert!(Interval::new("m0").is_err());
        assert!(Interval::new("Q3").is_err());
        assert!("M".parse::<Interval>().is_err());
    }

    #[test]
    fn test_single_octave() {
        assert_eq!(iv("M9").single_octave(), iv("M2"));
        assert_eq!(iv("m10").single_octave(), iv("m3"));
        assert_eq!(iv("P11").single_octave(), iv("P4"));
        assert_eq!(iv("P15").single_octave(), iv("P8"));
        assert_eq!(iv("M16").single_octave(), iv("M2"));
        assert_eq!(iv("M3").single_octave(), iv("M3"));
        assert_eq!(iv("P8").single_octave(), iv("P8"));
    }

    #[test]
    fn test_inverted() {
        assert_eq!(iv("M3").inverted(), iv("m6"));
        assert_eq!(iv("m2").inverted(), iv("M7"));
        assert_eq!(iv("P4").inverted(), iv("P5"));
        assert_eq!(iv("A4").inverted(), iv("D5"));
        assert_eq!(iv("P1").inverted(), iv("P8"));
        assert_eq!(iv("P8").inverted(), iv("P1"));
        assert_eq!(iv("M9").inverted(), iv("m7"));
    }

    #[test]
    fn test_inversions_fill_an_octave() {
        for text in ["m2", "M2", "m3", "M3", "P4", "A4", "D5", "P5", "m6", "M6", "m7", "M7"] {
            let interval = iv(text);
            assert_eq!(interval.step() + interval.inverted().step(), 12, "{}", text);
        }
    }

    #[test]
    fn test_combine() {
        assert_eq!(iv("M3").combine(&iv("m3")).unwrap(), iv("P5"));
        assert_eq!(iv("M3").combine(&iv("M3")).unwrap(), iv("A5"));
        assert_eq!(iv("P5").combine(&iv("P4")).unwrap(), iv("P8"));
        assert_eq!(iv("P8").combine(&iv("M2")).unwrap(), iv("M9"));
        assert_eq!(
            iv("A5").combine(&iv("A5")),
            Err(TheoryError::UnnamedInterval {
                degree: 9,
                semitones: 16
            })
        );
    }

    #[test]
    fn test_from_degree_and_semitones() {
        assert_eq!(Interval::from_degree_and_semitones(3, 3).unwrap(), iv("m3"));
        assert_eq!(Interval::from_degree_and_semitones(8, 12).unwrap(), iv("P8"));
        assert_eq!(Interval::from_degree_and_semitones(2, 0).unwrap(), iv("D2"));
        assert!(Interval::from_degree_and_semitones(1, 2).is_err());
        assert!(Interval::from_degree_and_semitones(0, 0).is_err());
        assert!(Interval::from_degree_and_semitones(-2, 0).is_err());
    }

    #[test]
    fn test_identity_and_order_diverge() {
        let a4 = iv("A4");
        let d5 = iv("D5");
        assert_ne!(a4, d5);
        assert_eq!(a4.compare(&d5), Ordering::Equal);
        assert!(!(a4 < d5));
        assert!(!(d5 < a4));
        assert_eq!(a4.partial_cmp(&d5), None);
    }

    #[test]
    fn test_ordering_by_size() {
        assert!(iv("M3") < iv("P4"));
        assert!(iv("m2") < iv("M2"));
        assert!(iv("M9") > iv("P8"));
        assert_eq!(iv("P5").partial_cmp(&iv("P5")), Some(Ordering::Equal));

        let mut intervals = vec![iv("P8"), iv("m3"), iv("P1"), iv("M2")];
        intervals.sort_by(Interval::compare);
        assert_eq!(intervals, vec![iv("P1"), iv("M2"), iv("m3"), iv("P8")]);
    }

    #[test]
    fn test_serde_as_text() {
        let json = serde_json::to_string(&iv("m10")).unwrap();
        assert_eq!(json, "\"m10\"");
        let back: Interval = serde_json::from_str("\"+4\"").unwrap();
        assert_eq!(back, iv("A4"));
        assert!(serde_json::from_str::<Interval>("\"P2\"").is_err());
    }
}
