//! Lexical cleanup of version-like strings

use crate::parser::{clean_words, split_labels};

/// Return a lexically normalized form of a version-like string.
///
/// Where possible:
///
/// - leading and trailing whitespace is removed,
/// - one leading `v` or `V` is removed,
/// - missing or empty minor and patch numbers are set to `0`,
/// - empty words are dropped from the pre-release and build labels, and a
///   label left with no words loses its marker too.
///
/// If no major version can be found the input is returned unmodified. Nothing
/// else is checked, so the result may still fail [`parse`](crate::parse).
///
/// The cleanup is repeated until it no longer changes the string, which makes
/// `clean(&clean(s)) == clean(s)` hold for every input.
pub fn clean(s: &str) -> String {
    let Some(mut cleaned) = clean_once(s) else {
        log::trace!("no major version in {:?}, leaving it unmodified", s);
        return s.to_string();
    };
    while let Some(next) = clean_once(&cleaned) {
        if next == cleaned {
            break;
        }
        cleaned = next;
    }
    cleaned
}

fn clean_once(s: &str) -> Option<String> {
    let trimmed = s.trim();
    let base = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
    let (core, release, build) = split_labels(base);

    let mut fields: Vec<&str> = core.splitn(3, '.').collect();
    if fields[0].is_empty() {
        return None;
    }
    fields.resize(3, "0");
    for field in fields.iter_mut().skip(1) {
        if field.is_empty() {
            *field = "0";
        }
    }

    let mut out = fields.join(".");
    let release = clean_words(release.unwrap_or_default());
    if !release.is_empty() {
        out.push('-');
        out.push_str(&release.join("."));
    }
    let build = clean_words(build.unwrap_or_default());
    if !build.is_empty() {
        out.push('+');
        out.push_str(&build.join("."));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_major_is_unmodified() {
        for s in ["", ".", ".1.3", "v..+b-q", " .5... ", " v-rc1", "v", " \t", "-rc1", "+build"] {
            assert_eq!(clean(s), s, "input {:?}", s);
        }
    }

    #[test]
    fn test_missing_fields_are_zeroed() {
        assert_eq!(clean("1"), "1.0.0");
        assert_eq!(clean("1.5"), "1.5.0");
        assert_eq!(clean("3.1.4"), "3.1.4");
        assert_eq!(clean("1."), "1.0.0");
        assert_eq!(clean("1..7"), "1.0.7");
        assert_eq!(clean("1.2."), "1.2.0");
    }

    #[test]
    fn test_extra_fields_are_kept() {
        assert_eq!(clean("1.2.3.4"), "1.2.3.4");
        assert_eq!(clean("1.2.3."), "1.2.3.");
    }

    #[test]
    fn test_whitespace_and_prefix() {
        assert_eq!(clean(" 1 "), "1.0.0");
        assert_eq!(clean("v1 "), "1.0.0");
        assert_eq!(clean("V1 "), "1.0.0");
        assert_eq!(clean(" 1.5 "), "1.5.0");
        assert_eq!(clean("v2.79\n"), "2.79.0");
        assert_eq!(clean("\nv6.5.4\t"), "6.5.4");
        assert_eq!(clean(" v2\t"), "2.0.0");
        assert_eq!(clean("\tv3.14\r\n"), "3.14.0");
    }

    #[test]
    fn test_empty_words_are_dropped() {
        assert_eq!(clean("1-"), "1.0.0");
        assert_eq!(clean("1+"), "1.0.0");
        assert_eq!(clean("1-+"), "1.0.0");
        assert_eq!(clean("1-foo+"), "1.0.0-foo");
        assert_eq!(clean("1-+bar"), "1.0.0+bar");
        assert_eq!(clean("1+bar-"), "1.0.0+bar-");
        assert_eq!(clean("1.2-a..b+c-d.e."), "1.2.0-a.b+c-d.e");
        assert_eq!(clean(" v1.2-rc3..1\t"), "1.2.0-rc3.1");
        assert_eq!(clean("1-..+.."), "1.0.0");
    }

    #[test]
    fn test_invalid_content_passes_through() {
        assert_eq!(clean("01.x"), "01.x.0");
        assert_eq!(clean("1-b@d"), "1.0.0-b@d");
    }

    #[test]
    fn test_idempotent() {
        for s in [
            "1",
            " v1.2-rc3..1\t",
            "vv1",
            " v 1",
            "1-a .",
            "1-a. .",
            "v1.x.y.z-+.",
            "1.2-a..b+c-d.e.",
        ] {
            let once = clean(s);
            assert_eq!(clean(&once), once, "input {:?}", s);
        }
    }
}
