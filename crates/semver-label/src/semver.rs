//! Semver facade providing operations over lists of version strings

use std::cmp::Ordering;

use crate::comparator::compare_strings;

/// Operations over collections of version strings.
///
/// Every ordering goes through [`compare_strings`], so the inputs may be
/// unclean (`"v1.2"`, `" 2.0 "`).
pub struct Semver;

impl Semver {
    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    /// The highest version, or `None` if there are none
    pub fn max<'a>(versions: &[&'a str]) -> Option<&'a str> {
        versions
            .iter()
            .copied()
            .reduce(|best, v| if compare_strings(v, best).is_gt() { v } else { best })
    }

    /// The lowest version, or `None` if there are none
    pub fn min<'a>(versions: &[&'a str]) -> Option<&'a str> {
        versions
            .iter()
            .copied()
            .reduce(|best, v| if compare_strings(v, best).is_lt() { v } else { best })
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut sorted = versions.to_vec();

        // Stable, so equivalent versions keep their input order
        sorted.sort_by(|a, b| {
            let cmp: Ordering = compare_strings(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        sorted.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["0.1", "0.1", "1.0", "2.4.0-alpha", "2.4.0", "3.2.1"]);

        let versions2 = vec!["1.0.0", "1.0.0-rc.1", "1.0.0-beta.11", "1.0.0-beta.2", "1.0.0-alpha"];
        let sorted2 = Semver::sort(&versions2);
        assert_eq!(
            sorted2,
            vec!["1.0.0-alpha", "1.0.0-beta.2", "1.0.0-beta.11", "1.0.0-rc.1", "1.0.0"]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let versions = vec!["1.0.0+b", "v1", "1.0.0+a", "1.0"];
        assert_eq!(Semver::sort(&versions), vec!["1.0.0+b", "v1", "1.0.0+a", "1.0"]);
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0", "0.1", "0.1"]);
    }

    #[test]
    fn test_max_min() {
        let versions = vec!["v1.9", "1.10.0", "1.10.0-rc.2", "0.9.9"];
        assert_eq!(Semver::max(&versions), Some("1.10.0"));
        assert_eq!(Semver::min(&versions), Some("0.9.9"));
        assert_eq!(Semver::max(&[]), None);
        assert_eq!(Semver::min(&[]), None);
    }
}
