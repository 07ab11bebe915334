//! Transit line names.

use serde::{Serialize, Serializer};
use std::fmt;

/// Longest permitted line name.
const MAX_LEN: usize = 4;

/// Error returned when parsing an invalid line name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line name: {reason}")]
pub struct InvalidLineName {
    reason: &'static str,
}

/// A valid transit line name: 1-4 ASCII letters or digits.
///
/// Names are case-sensitive, so `"A1"` and `"a1"` are different lines.
///
/// # Examples
///
/// ```
/// use station_server::domain::LineName;
///
/// let line = LineName::parse("Q7").unwrap();
/// assert_eq!(line.as_str(), "Q7");
///
/// assert!(LineName::parse("").is_err());
/// assert!(LineName::parse("ABCDE").is_err());
/// assert!(LineName::parse("A-1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineName(String);

impl LineName {
    /// Parse a line name from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineName> {
        if s.is_empty() || s.len() > MAX_LEN {
            return Err(InvalidLineName {
                reason: "must be 1-4 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidLineName {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(LineName(s.to_owned()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true if `name` is an acceptable line name.
pub fn is_valid_line_name(name: &str) -> bool {
    LineName::parse(name).is_ok()
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LineName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
