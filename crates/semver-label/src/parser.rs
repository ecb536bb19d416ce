//! Strict parsing of semantic version strings
//!
//! Grammar (see <https://semver.org/#backusnaur-form-grammar-for-valid-semver-versions>):
//!
//! ```text
//! version    := core ['-' release] ['+' build]
//! core       := numericID '.' numericID '.' numericID
//! numericID  := "0" | [1-9][0-9]*
//! release    := identifier ('.' identifier)*
//! build      := identifier ('.' identifier)*
//! identifier := [0-9A-Za-z-]+
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Field, Label, NumberError, Result, WordError};
use crate::version::Version;

lazy_static! {
    static ref DIGITS_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();

    static ref WORD_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();

    // Whole grammar in one pass, for validity checks that need no diagnostics
    static ref VERSION_RE: Regex = Regex::new(
        r"^(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$"
    ).unwrap();
}

/// Parse a version string.
///
/// The input must match the grammar exactly: surrounding whitespace or a `v`
/// prefix are rejected (see [`clean`](crate::clean) for lenient input). The
/// first violation found is reported, checking in order the field count,
/// major, minor, patch, the pre-release label and the build label.
pub fn parse(s: &str) -> Result<Version> {
    let (core, release, build) = split_labels(s);

    let fields = split_words(core);
    if fields.len() != 3 {
        return Err(Error::WrongLength { got: fields.len() });
    }
    let major = parse_number(fields[0], Field::Major)?;
    let minor = parse_number(fields[1], Field::Minor)?;
    let patch = parse_number(fields[2], Field::Patch)?;

    let release = match release {
        Some(text) => parse_label(text, Label::Release)?,
        None => Vec::new(),
    };
    let build = match build {
        Some(text) => parse_label(text, Label::Build)?,
        None => Vec::new(),
    };

    Ok(Version::from_parts(major, minor, patch, release, build))
}

/// Parse a version string, panicking if it is invalid.
///
/// Intended for literals known at compile time; use [`parse`] for anything
/// that comes from a user.
pub fn must_parse(s: &str) -> Version {
    match parse(s) {
        Ok(v) => v,
        Err(err) => panic!("parse {:?}: {}", s, err),
    }
}

/// Check if a string is a valid semantic version
pub fn is_valid(s: &str) -> bool {
    VERSION_RE.is_match(s) && parse(s).is_ok()
}

/// Split at the first `-` or `+`, returning the core and the labels whose
/// markers were present. A `-` after the first `+` belongs to the build.
pub(crate) fn split_labels(s: &str) -> (&str, Option<&str>, Option<&str>) {
    let Some(pos) = s.find(['-', '+']) else {
        return (s, None, None);
    };
    let core = &s[..pos];
    let rest = &s[pos + 1..];
    if s.as_bytes()[pos] == b'-' {
        match rest.split_once('+') {
            Some((release, build)) => (core, Some(release), Some(build)),
            None => (core, Some(rest), None),
        }
    } else {
        (core, None, Some(rest))
    }
}

/// Split on dots; the empty string has no words at all.
pub(crate) fn split_words(s: &str) -> Vec<&str> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split('.').collect()
    }
}

/// Split on dots, discarding empty words.
pub(crate) fn clean_words(s: &str) -> Vec<String> {
    s.split('.')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split on dots, keeping only non-empty words made of `[0-9A-Za-z-]`.
pub(crate) fn valid_words(s: &str) -> Vec<String> {
    s.split('.')
        .filter(|w| WORD_RE.is_match(w))
        .map(str::to_string)
        .collect()
}

fn parse_number(s: &str, field: Field) -> Result<u64> {
    if !DIGITS_RE.is_match(s) {
        return Err(Error::InvalidNumber { field, reason: NumberError::NotANumber });
    }
    if s.len() > 1 && s.starts_with('0') {
        return Err(Error::InvalidNumber { field, reason: NumberError::LeadingZeroes });
    }
    s.parse()
        .map_err(|_| Error::InvalidNumber { field, reason: NumberError::NotANumber })
}

fn parse_label(text: &str, label: Label) -> Result<Vec<String>> {
    if text.is_empty() {
        return Err(Error::EmptyLabel { label });
    }
    let words = split_words(text);
    for (i, word) in words.iter().enumerate() {
        let reason = if word.is_empty() {
            WordError::EmptyWord
        } else if !WORD_RE.is_match(word) {
            WordError::InvalidChar
        } else {
            continue;
        };
        return Err(Error::InvalidIdentifier {
            label,
            text: text.to_string(),
            position: i + 1,
            reason,
        });
    }
    Ok(words.into_iter().map(str::to_string).collect())
}
