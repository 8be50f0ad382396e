//! Pitch and interval values parsed from compact music-theory notation.
//!
//! A [`Pitch`] is a spelled note such as `C#4` or the pitch class `Bb`. An
//! [`Interval`] is a named distance such as `M3` or `P5`. Both are immutable,
//! parsed from text, and combined with named operations rather than
//! operator overloads.
//!
//! # Example
//!
//! ```
//! use tonal::{Interval, Pitch};
//!
//! let c4 = Pitch::new("C4")?;
//! let e4 = c4.add(&Interval::new("M3")?)?;
//! assert_eq!(e4.to_string(), "E4");
//!
//! // Text works wherever an interval is expected
//! assert_eq!(e4.subtract("M3")?, c4);
//!
//! // Pitch minus pitch gives the interval between them
//! assert_eq!(e4.subtract(&c4)?, Interval::new("M3")?);
//!
//! // Parsing without constructing answers "no match" instead of failing
//! assert!(Pitch::parse("H4").is_none());
//! # Ok::<(), tonal::TheoryError>(())
//! ```
//!
//! # Notation
//!
//! - Pitch: `<A-G or a-g><# run or b run><optional octave 0-7>`
//! - Interval: `<M m A D P + -><degree>`; `+` and `-` stand for `A` and `D`,
//!   and `P` is only valid on unisons, fourths, fifths and their compounds.

pub mod ast;
pub mod error;
pub mod interval;
pub mod parser;
pub mod pitch;

pub use ast::{Accidental, IntervalParts, NoteName, PitchParts, Quality};
pub use error::{Result, TheoryError};
pub use interval::Interval;
pub use pitch::{AsInterval, Pitch, Subtrahend};
