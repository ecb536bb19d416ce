#![cfg(feature = "serde")]

use std::collections::HashMap;

use semver_label::{must_parse, Version};

#[test]
fn test_serialize_canonical_string() {
    let v = must_parse("1.2.3-rc.1+build.5");
    assert_eq!(serde_json::to_string(&v).unwrap(), "\"1.2.3-rc.1+build.5\"");
    assert_eq!(serde_json::to_string(&Version::default()).unwrap(), "\"0.0.0\"");
}

#[test]
fn test_deserialize_accepts_leading_v() {
    let v: Version = serde_json::from_str("\"v1.2.3\"").unwrap();
    assert_eq!(v, Version::new(1, 2, 3));
    let v: Version = serde_json::from_str("\"1.0.0-alpha+exp\"").unwrap();
    assert_eq!(v, must_parse("1.0.0-alpha+exp"));
}

#[test]
fn test_deserialize_reports_parse_errors() {
    let err = serde_json::from_str::<Version>("\"05.0.0\"").unwrap_err();
    assert!(err.to_string().contains("invalid major: leading zeroes"), "{}", err);

    let err = serde_json::from_str::<Version>("\"1.2\"").unwrap_err();
    assert!(err.to_string().contains("wrong length (got 2, want 3)"), "{}", err);

    assert!(serde_json::from_str::<Version>("123").is_err());
}

#[test]
fn test_round_trip_in_map() {
    let mut deps = HashMap::new();
    deps.insert("core".to_string(), must_parse("2.0.0-beta.3"));
    deps.insert("util".to_string(), Version::new(0, 4, 1).with_build("sha.abc"));

    let json = serde_json::to_string(&deps).unwrap();
    let back: HashMap<String, Version> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, deps);
}
