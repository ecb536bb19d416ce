//! Version precedence

use std::cmp::Ordering;

use crate::clean::clean;
use crate::error::{Error, Result};
use crate::parser::parse;
use crate::version::Version;

/// Compare two versions in semantic version precedence order.
///
/// Core fields are compared numerically. With equal cores a pre-release sorts
/// before the release itself, and two pre-releases are compared word by word:
/// numerically if both words are all digits, by ASCII otherwise, and a shorter
/// label sorts first when it is a prefix of the other. Build metadata is never
/// consulted.
pub fn compare(v1: &Version, v2: &Version) -> Ordering {
    v1.major()
        .cmp(&v2.major())
        .then_with(|| v1.minor().cmp(&v2.minor()))
        .then_with(|| v1.patch().cmp(&v2.patch()))
        .then_with(|| compare_release(v1.release_identifiers(), v2.release_identifiers()))
}

/// Compare two strings in semantic version order.
///
/// Both sides are [`clean`]ed and parsed. If either fails to parse, the
/// original strings are compared lexicographically instead; this fallback is
/// silent so that arbitrary tags can still be sorted.
pub fn compare_strings(s1: &str, s2: &str) -> Ordering {
    match (parse(&clean(s1)), parse(&clean(s2))) {
        (Ok(v1), Ok(v2)) => compare(&v1, &v2),
        _ => {
            log::trace!("comparing {:?} and {:?} as plain strings", s1, s2);
            s1.cmp(s2)
        }
    }
}

fn compare_release(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .iter()
            .zip(b)
            .map(|(x, y)| compare_word(x, y))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
    }
}

fn compare_word(a: &str, b: &str) -> Ordering {
    if is_numeric(a) && is_numeric(b) {
        // Numeric order on digit strings of any length
        let (a, b) = (a.trim_start_matches('0'), b.trim_start_matches('0'));
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    } else {
        a.cmp(b)
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Comparisons of version strings, using [`compare_strings`]
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        compare_strings(version1, version2).is_gt()
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        compare_strings(version1, version2).is_ge()
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        compare_strings(version1, version2).is_lt()
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        compare_strings(version1, version2).is_le()
    }

    /// Check if version1 and version2 have the same precedence
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        compare_strings(version1, version2).is_eq()
    }

    /// Check if version1 and version2 differ in precedence
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        compare_strings(version1, version2).is_ne()
    }

    /// Compare version1 to version2 using the given operator.
    ///
    /// Supported operators are `>`, `>=`, `<`, `<=`, `==` (or `=`) and `!=`
    /// (or `<>`).
    pub fn compare(version1: &str, operator: &str, version2: &str) -> Result<bool> {
        let ord = compare_strings(version1, version2);
        match operator {
            ">" => Ok(ord.is_gt()),
            ">=" => Ok(ord.is_ge()),
            "<" => Ok(ord.is_lt()),
            "<=" => Ok(ord.is_le()),
            "==" | "=" => Ok(ord.is_eq()),
            "!=" | "<>" => Ok(ord.is_ne()),
            _ => Err(Error::InvalidOperator(operator.to_string())),
        }
    }
}
