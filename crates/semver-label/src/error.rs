//! Error types for version parsing

use std::fmt;
use thiserror::Error;

/// One of the three numeric fields of a core version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The dotted label following the core version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Introduced by `-`
    Release,
    /// Introduced by `+`
    Build,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Release => "pre-release",
            Label::Build => "build",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a numeric field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberError {
    NotANumber,
    LeadingZeroes,
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberError::NotANumber => write!(f, "not a number"),
            NumberError::LeadingZeroes => write!(f, "leading zeroes"),
        }
    }
}

/// Why a dotted identifier was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordError {
    EmptyWord,
    InvalidChar,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordError::EmptyWord => write!(f, "empty word"),
            WordError::InvalidChar => write!(f, "invalid char"),
        }
    }
}

/// Error type for version parsing and comparison
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The core did not split into exactly three dotted fields.
    #[error("invalid version syntax: wrong length (got {got}, want 3)")]
    WrongLength { got: usize },

    #[error("invalid {field}: {reason}")]
    InvalidNumber { field: Field, reason: NumberError },

    /// A `-` or `+` marker was present with nothing after it.
    #[error("empty {}", label_noun(.label))]
    EmptyLabel { label: Label },

    /// `position` is the 1-based index of the offending word.
    #[error("invalid {label} {text:?}: {reason} (pos {position})")]
    InvalidIdentifier {
        label: Label,
        text: String,
        position: usize,
        reason: WordError,
    },

    #[error("invalid operator \"{0}\"")]
    InvalidOperator(String),
}

fn label_noun(label: &Label) -> &'static str {
    match label {
        Label::Release => "pre-release",
        Label::Build => "build metadata",
    }
}

pub type Result<T> = std::result::Result<T, Error>;
