use thiserror::Error;

/// Errors from constructing or combining pitches and intervals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("Invalid pitch '{0}'")]
    InvalidPitch(String),

    #[error("Invalid interval '{0}'")]
    InvalidInterval(String),

    /// The distance exists but no quality names it, e.g. a doubly augmented unison.
    #[error("No interval quality spans {semitones} semitones over degree {degree}")]
    UnnamedInterval { degree: i64, semitones: i64 },
}

pub type Result<T> = std::result::Result<T, TheoryError>;
