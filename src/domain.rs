//! Domain type, the host segment of an address.
//!
//! Only a character-class exclusion is applied: control characters and space
//! are rejected, ASCII letters are folded to lowercase. Labels, IP literals
//! and internationalized names are accepted as-is.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{InvalidAddressKind, Part};

/// A validated, lowercased domain.
///
/// Unlike nodes and resources, a domain may be empty; the empty domain is
/// only valid in the empty address.
///
/// # Examples
///
/// ```
/// use xmpp_address::Domain;
///
/// let domain = Domain::parse("Wonderland.LIT").unwrap();
/// assert_eq!(domain.as_str(), "wonderland.lit");
/// assert!(!domain.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Domain(String);

impl Domain {
    /// Parses a domain from a string and folds ASCII letters to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddressKind` if the domain exceeds 1023 bytes or
    /// contains a control character or space.
    pub fn parse(input: &str) -> Result<Self, InvalidAddressKind> {
        Part::Domain.check_length(input)?;

        for (i, c) in input.chars().enumerate() {
            if Self::is_forbidden_char(c) {
                return Err(InvalidAddressKind::InvalidDomainCharacters { char: c, position: i });
            }
        }

        Ok(Self(input.to_ascii_lowercase()))
    }

    /// Returns the domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the empty domain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the character may not appear in a domain.
    #[must_use]
    pub fn is_forbidden_char(c: char) -> bool {
        c.is_control() || c == ' '
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Domain {
    type Err = InvalidAddressKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Domain {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Domain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Domain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases_ascii() {
        let domain = Domain::parse("Bar.COM").unwrap();
        assert_eq!(domain.as_str(), "bar.com");
    }

    #[test]
    fn parse_leaves_non_ascii_case_alone() {
        let domain = Domain::parse("ÉCOLE.fr").unwrap();
        assert_eq!(domain.as_str(), "École.fr");
    }

    #[test]
    fn parse_empty_is_allowed() {
        let domain = Domain::parse("").unwrap();
        assert!(domain.is_empty());
    }

    #[test]
    fn parse_accepts_ip_literals() {
        assert_eq!(Domain::parse("127.0.0.1").unwrap().as_str(), "127.0.0.1");
        assert_eq!(Domain::parse("[::1]").unwrap().as_str(), "[::1]");
    }

    #[test]
    fn parse_space_fails() {
        assert_eq!(
            Domain::parse("w onderland.lit"),
            Err(InvalidAddressKind::InvalidDomainCharacters { char: ' ', position: 1 })
        );
    }

    #[test]
    fn parse_controls_fail() {
        for c in ['\0', '\t', '\r', '\n', '\x0b', '\x0c'] {
            let input = format!("w{c}onderland.lit");
            assert_eq!(
                Domain::parse(&input),
                Err(InvalidAddressKind::InvalidDomainCharacters { char: c, position: 1 }),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn parse_too_long_fails() {
        let long = "d".repeat(1024);
        assert!(matches!(
            Domain::parse(&long),
            Err(InvalidAddressKind::PartTooLong { part: Part::Domain, .. })
        ));
    }
}
