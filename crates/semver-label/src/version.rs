//! The version value type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator::compare;
use crate::error::Error;
use crate::parser::{parse, valid_words};

/// A parsed semantic version label.
///
/// The default value is ready for use and represents `0.0.0`. Values are never
/// modified in place: every derivation returns a new `Version`.
///
/// Equality (`==`) is structural and includes build metadata. Precedence, as
/// reported by [`compare`] and [`Version::equiv`], ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    release: Vec<String>,
    build: Vec<String>,
}

impl Version {
    /// Create a version with the given core and no release or build labels.
    ///
    /// The fields are unsigned, so a negative literal is rejected by the compiler.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            release: Vec::new(),
            build: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        release: Vec<String>,
        build: Vec<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            release,
            build,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release label without its `-` marker, or `""` if absent.
    pub fn release(&self) -> String {
        self.release.join(".")
    }

    /// The build metadata without its `+` marker, or `""` if absent.
    pub fn build(&self) -> String {
        self.build.join(".")
    }

    pub fn release_identifiers(&self) -> &[String] {
        &self.release
    }

    pub fn build_identifiers(&self) -> &[String] {
        &self.build
    }

    /// Check whether the version carries a pre-release label
    pub fn is_prerelease(&self) -> bool {
        !self.release.is_empty()
    }

    /// Return a copy with the given offsets added to the core fields.
    ///
    /// A field that would drop below zero is set to zero instead; one that would
    /// exceed `u64::MAX` saturates.
    pub fn add(&self, dmajor: i64, dminor: i64, dpatch: i64) -> Self {
        Version {
            major: offset(self.major, dmajor),
            minor: offset(self.minor, dminor),
            patch: offset(self.patch, dpatch),
            ..self.clone()
        }
    }

    /// Return a copy with the core fields replaced.
    ///
    /// A negative argument leaves the corresponding field unchanged, so
    /// `v.with_core(-1, -1, 0)` only resets the patch number.
    pub fn with_core(&self, major: i64, minor: i64, patch: i64) -> Self {
        Version {
            major: u64::try_from(major).unwrap_or(self.major),
            minor: u64::try_from(minor).unwrap_or(self.minor),
            patch: u64::try_from(patch).unwrap_or(self.patch),
            ..self.clone()
        }
    }

    /// Return a copy with release and build cleared: the `major.minor.patch` core.
    pub fn core(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Return a copy with the pre-release label set from a dotted string.
    ///
    /// Empty words and words with characters outside `[0-9A-Za-z-]` are
    /// dropped, so `""` removes the label entirely and the result always
    /// formats to a parseable string.
    pub fn with_release(&self, id: &str) -> Self {
        Version {
            release: valid_words(id),
            ..self.clone()
        }
    }

    /// Return a copy with the build metadata set from a dotted string.
    ///
    /// Empty words and words with characters outside `[0-9A-Za-z-]` are
    /// dropped, so `""` removes the metadata entirely.
    pub fn with_build(&self, meta: &str) -> Self {
        Version {
            build: valid_words(meta),
            ..self.clone()
        }
    }

    /// Return a copy without build metadata, with numeric pre-release words
    /// stripped of leading zeroes (`007` becomes `7`).
    ///
    /// Two versions have equal keys exactly when they are [`equiv`](Self::equiv),
    /// which makes the key usable in hash maps and sets.
    pub fn key(&self) -> Self {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            release: self.release.iter().map(|w| canonical_word(w)).collect(),
            build: Vec::new(),
        }
    }

    /// Compare by semantic version precedence
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        compare(self, other)
    }

    pub fn before(&self, other: &Version) -> bool {
        compare(self, other) == Ordering::Less
    }

    pub fn after(&self, other: &Version) -> bool {
        compare(self, other) == Ordering::Greater
    }

    /// Check whether both versions have the same precedence.
    ///
    /// Unlike `==` this ignores build metadata.
    pub fn equiv(&self, other: &Version) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

fn canonical_word(word: &str) -> String {
    if !word.bytes().all(|b| b.is_ascii_digit()) {
        return word.to_string();
    }
    match word.trim_start_matches('0') {
        "" => "0".to_string(),
        digits => digits.to_string(),
    }
}

fn offset(value: u64, delta: i64) -> u64 {
    if delta >= 0 {
        value.saturating_add(delta.unsigned_abs())
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.release.is_empty() {
            write!(f, "-{}", self.release.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

/// Parses the strict grammar, additionally accepting one leading `v`.
impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.strip_prefix('v').unwrap_or(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VersionVisitor;

        impl serde::de::Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
