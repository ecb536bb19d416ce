//! Strict Semantic Versioning 2.0.0 labels
//!
//! This crate parses, cleans, orders and formats version strings of the form
//! `major.minor.patch[-release][+build]`, as described at <https://semver.org/>.
//!
//! ```
//! use semver_label::{clean, parse, Version};
//!
//! let v = parse("1.5.3-rc1.4+modified").unwrap();
//! assert_eq!(v.core().to_string(), "1.5.3");
//! assert_eq!(v.release(), "rc1.4");
//! assert!(v.equiv(&Version::new(1, 5, 3).with_release("rc1.4")));
//!
//! assert_eq!(clean(" v1.2-rc3..1\t"), "1.2.0-rc3.1");
//! ```

mod clean;
mod comparator;
pub mod error;
mod parser;
mod semver;
mod version;

pub use clean::clean;
pub use comparator::{compare, compare_strings, Comparator};
pub use error::{Error, Field, Label, NumberError, Result, WordError};
pub use parser::{is_valid, must_parse, parse};
pub use semver::Semver;
pub use version::Version;
