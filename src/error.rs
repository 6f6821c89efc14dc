//! Error types

use thiserror::Error;

/// The three classes of failure a caller can distinguish.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// Seed or argument shape rejected before anything is parsed.
    Validation,
    /// Malformed tap or nonlinear expression.
    Parse,
    /// A bit vector too short for the function evaluated over it.
    Index,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorKind::Validation => f.write_str("Validation Error"),
            ErrorKind::Parse => f.write_str("Parse Error"),
            ErrorKind::Index => f.write_str("Index Error"),
        }
    }
}

/// Keystream error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Empty input sequence")]
    EmptySeed,

    #[error("The input sequence {input} contains characters other than 0 and 1")]
    NonBinaryInput { input: String },

    #[error("A combining generator needs at least one register")]
    NoRegisters,

    #[error("Got {seeds} seeds but {taps} tap functions")]
    RegisterCountMismatch { seeds: usize, taps: usize },

    #[error("Message has {message} bits but keystream has {keystream}")]
    LengthMismatch { message: usize, keystream: usize },

    #[error("Given wrong function {expr}: empty term introduced")]
    EmptyTerm { expr: String },

    #[error("Given wrong function {expr}: empty multiplier introduced")]
    EmptyFactor { expr: String },

    #[error("Wrong index in term {term}")]
    InvalidIndex { term: String },

    #[error("Index x{index} is out of range for a register of length {len}")]
    TapOutOfRange { index: usize, len: usize },

    #[error("Given wrong term {term}")]
    UnknownTerm { term: String },

    #[error("Variable x{index} is out of range for {width} input bits")]
    VariableOutOfRange { index: usize, width: usize },

    #[error("Index x{index} is out of range for a bit vector of length {len}")]
    BitIndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptySeed
            | Error::NonBinaryInput { .. }
            | Error::NoRegisters
            | Error::RegisterCountMismatch { .. }
            | Error::LengthMismatch { .. } => ErrorKind::Validation,
            Error::EmptyTerm { .. }
            | Error::EmptyFactor { .. }
            | Error::InvalidIndex { .. }
            | Error::TapOutOfRange { .. }
            | Error::UnknownTerm { .. }
            | Error::VariableOutOfRange { .. } => ErrorKind::Parse,
            Error::BitIndexOutOfRange { .. } => ErrorKind::Index,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_group_variants() {
        assert_eq!(Error::EmptySeed.kind(), ErrorKind::Validation);
        assert_eq!(
            Error::TapOutOfRange { index: 9, len: 5 }.kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            Error::BitIndexOutOfRange { index: 3, len: 2 }.kind(),
            ErrorKind::Index
        );
    }

    #[test]
    fn messages_use_one_based_indices() {
        let err = Error::TapOutOfRange { index: 9, len: 5 };
        assert_eq!(
            err.to_string(),
            "Index x9 is out of range for a register of length 5"
        );
        assert_eq!(ErrorKind::Parse.to_string(), "Parse Error");
    }
}
