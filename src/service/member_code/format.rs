//! Rendering and parsing of member codes.
//!
//! A code is `M` + the local calendar day as `YYYYMMDD` + a 4-digit zero-padded
//! sequence, e.g. `M202404070001`.

use chrono::NaiveDate;

use crate::error::member_code::CodeParseError;

/// Leading letter of every member code.
pub const CODE_PREFIX: char = 'M';

/// Total length of a member code.
pub const CODE_LENGTH: usize = 13;

/// Highest sequence a single day can hand out.
pub const MAX_SEQUENCE: u16 = 9999;

const DAY_KEY_FORMAT: &str = "%Y%m%d";

/// Returns the 8-digit day key (`YYYYMMDD`) for a date.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Returns the code prefix shared by every code issued on `date` (`MYYYYMMDD`).
pub fn prefix(date: NaiveDate) -> String {
    format!("{}{}", CODE_PREFIX, day_key(date))
}

/// Renders the code for `sequence` on `date`.
pub fn format(date: NaiveDate, sequence: u16) -> String {
    format!("{}{:04}", prefix(date), sequence)
}

/// Extracts the sequence from a code issued on `date`.
///
/// # Arguments
/// - `code` - Persisted member code
/// - `date` - Day the code is expected to belong to
///
/// # Returns
/// - `Ok(u16)` - The trailing sequence value
/// - `Err(CodeParseError)` - The code is malformed or belongs to another day
pub fn parse_sequence(code: &str, date: NaiveDate) -> Result<u16, CodeParseError> {
    if code.len() != CODE_LENGTH {
        return Err(CodeParseError::InvalidLength {
            code: code.to_string(),
            length: code.len(),
        });
    }

    if !code.starts_with(CODE_PREFIX) {
        return Err(CodeParseError::InvalidPrefix {
            code: code.to_string(),
        });
    }

    let expected = day_key(date);
    // Length is checked above but the string may hold multi-byte characters.
    let (Some(day), Some(sequence)) = (code.get(1..9), code.get(9..)) else {
        return Err(CodeParseError::InvalidSequence {
            code: code.to_string(),
        });
    };

    if day != expected {
        return Err(CodeParseError::DateMismatch {
            code: code.to_string(),
            expected,
        });
    }

    if !sequence.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodeParseError::InvalidSequence {
            code: code.to_string(),
        });
    }

    sequence
        .parse::<u16>()
        .map_err(|_| CodeParseError::InvalidSequence {
            code: code.to_string(),
        })
}
