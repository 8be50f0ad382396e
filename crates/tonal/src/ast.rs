//! Building blocks of pitch and interval notation.
//!
//! These are the pieces the parser produces. `Pitch` and `Interval` wrap
//! them once the whole text has been validated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven natural letters, in the fixed C..B cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// Semitone offset of the natural letter from C (0-11)
    pub fn to_semitone(self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    /// All note names in order
    pub fn all() -> [NoteName; 7] {
        [
            NoteName::C,
            NoteName::D,
            NoteName::E,
            NoteName::F,
            NoteName::G,
            NoteName::A,
            NoteName::B,
        ]
    }

    /// Position in the C..B cycle (C=0, B=6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Letter at a position in the cycle. Wraps in both directions, so -1 is B.
    pub fn from_index(index: i64) -> NoteName {
        Self::all()[index.rem_euclid(7) as usize]
    }

    /// Case-insensitive letter lookup
    pub fn from_char(c: char) -> Option<NoteName> {
        match c.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A run of identical accidental symbols.
///
/// `Sharp(2)` is written `##`, `Flat(3)` is written `bbb`. The counts are
/// never zero when produced by this crate: an empty run is `Natural`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp(u32),
    Flat(u32),
}

impl Accidental {
    /// Build the run that alters a letter by `offset` semitones.
    pub fn from_offset(offset: i32) -> Self {
        match offset {
            0 => Accidental::Natural,
            n if n > 0 => Accidental::Sharp(n.unsigned_abs()),
            n => Accidental::Flat(n.unsigned_abs()),
        }
    }

    /// Convert to semitone offset: each sharp raises by one, each flat lowers by one
    pub fn to_semitone_offset(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp(n) => n as i32,
            Accidental::Flat(n) => -(n as i32),
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (symbol, count) = match *self {
            Accidental::Natural => return Ok(()),
            Accidental::Sharp(n) => ("#", n),
            Accidental::Flat(n) => ("b", n),
        };
        for _ in 0..count {
            f.write_str(symbol)?;
        }
        Ok(())
    }
}

/// Interval quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl Quality {
    /// Parse a quality symbol. `+` and `-` are accepted as Augmented and Diminished.
    pub fn from_symbol(c: char) -> Option<Quality> {
        match c {
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'm' => Some(Quality::Minor),
            'A' | '+' => Some(Quality::Augmented),
            'D' | '-' => Some(Quality::Diminished),
            _ => None,
        }
    }

    /// Canonical symbol. Never `+` or `-`.
    pub fn symbol(self) -> char {
        match self {
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Augmented => 'A',
            Quality::Diminished => 'D',
        }
    }

    /// Quality of the inverted interval
    pub fn inverted(self) -> Quality {
        match self {
            Quality::Perfect => Quality::Perfect,
            Quality::Major => Quality::Minor,
            Quality::Minor => Quality::Major,
            Quality::Augmented => Quality::Diminished,
            Quality::Diminished => Quality::Augmented,
        }
    }

    /// Semitone adjustment relative to the perfect or major interval of the
    /// same degree. `None` when the quality does not belong to that degree class.
    pub fn semitone_offset(self, perfect_class: bool) -> Option<i32> {
        match (perfect_class, self) {
            (true, Quality::Perfect) => Some(0),
            (true, Quality::Augmented) => Some(1),
            (true, Quality::Diminished) => Some(-1),
            (false, Quality::Major) => Some(0),
            (false, Quality::Minor) => Some(-1),
            (false, Quality::Augmented) => Some(1),
            (false, Quality::Diminished) => Some(-2),
            _ => None,
        }
    }

    /// Reverse of [`Quality::semitone_offset`]
    pub fn from_semitone_offset(offset: i32, perfect_class: bool) -> Option<Quality> {
        match (perfect_class, offset) {
            (true, 0) => Some(Quality::Perfect),
            (true, 1) => Some(Quality::Augmented),
            (true, -1) => Some(Quality::Diminished),
            (false, 0) => Some(Quality::Major),
            (false, -1) => Some(Quality::Minor),
            (false, 1) => Some(Quality::Augmented),
            (false, -2) => Some(Quality::Diminished),
            _ => None,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Fields of a pitch as read from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchParts {
    pub letter: NoteName,
    pub accidental: Accidental,
    /// 0-7, or `None` for a bare pitch class
    pub octave: Option<u8>,
}

/// Fields of an interval as read from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalParts {
    pub quality: Quality,
    pub degree: u32,
}

impl IntervalParts {
    /// Degree is at least a unison and the quality belongs to the degree's class.
    pub fn is_valid(&self) -> bool {
        self.degree >= 1
            && self
                .quality
                .semitone_offset(is_perfect_class(self.degree))
                .is_some()
    }
}

/// Unisons, fourths, fifths, octaves and their compounds.
pub fn is_perfect_class(degree: u32) -> bool {
    matches!(degree % 7, 1 | 4 | 5)
}
