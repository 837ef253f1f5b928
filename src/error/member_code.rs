use chrono::NaiveDate;
use sea_orm::DbErr;
use thiserror::Error;

/// Failures that abort a member code request.
///
/// Recovery problems (store unreachable at startup, malformed persisted codes) are
/// not represented here; they are logged and absorbed by the generator.
#[derive(Error, Debug)]
pub enum MemberCodeError {
    /// Every sequence value for the day has already been handed out.
    ///
    /// The counter never wraps, so a day is capped at 9999 codes.
    #[error("Member code sequence exhausted for {day}")]
    SequenceExhausted {
        /// Calendar day whose sequence space is used up
        day: NaiveDate,
    },

    /// Every candidate within the retry budget was already taken.
    ///
    /// The owning record must not be created when this is returned.
    #[error("Failed to generate unique member code after {attempts} attempts")]
    CodeGenerationExhausted {
        /// Number of candidates tried
        attempts: u32,
    },

    /// The existence check against the record store failed.
    #[error(transparent)]
    Store(#[from] DbErr),
}

/// Reasons a string is not a member code for the expected day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeParseError {
    #[error("Member code '{code}' has length {length}, expected 13")]
    InvalidLength { code: String, length: usize },

    #[error("Member code '{code}' does not start with 'M'")]
    InvalidPrefix { code: String },

    #[error("Member code '{code}' is not dated {expected}")]
    DateMismatch { code: String, expected: String },

    #[error("Member code '{code}' has a non-numeric sequence")]
    InvalidSequence { code: String },
}
