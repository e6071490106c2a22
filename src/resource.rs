//! Resource type, the opaque trailing segment after `/`.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::constants::STRIP_CHARS;
use crate::error::{InvalidAddressKind, Part};

/// A validated resource from an address.
///
/// The resource is opaque: space, punctuation, `@` and `/` are all allowed.
/// Only control characters are rejected.
///
/// # Examples
///
/// ```
/// use xmpp_address::Resource;
///
/// let res = Resource::parse("foo/bar@blarg test").unwrap();
/// assert_eq!(res.as_str(), "foo/bar@blarg test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource(String);

impl Resource {
    /// Parses a resource from a string (without the leading '/').
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddressKind` if the resource exceeds 1023 bytes, is
    /// blank, or contains a control character.
    pub fn parse(input: &str) -> Result<Self, InvalidAddressKind> {
        Part::Resource.check_length(input)?;

        if input.trim_matches(STRIP_CHARS).is_empty() {
            return Err(InvalidAddressKind::EmptyResource);
        }

        if let Some((i, c)) = input.chars().enumerate().find(|&(_, c)| Self::is_forbidden_char(c)) {
            return Err(InvalidAddressKind::InvalidResourceCharacters { char: c, position: i });
        }

        Ok(Self(input.to_string()))
    }

    /// Returns the resource as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the character may not appear in a resource.
    #[must_use]
    pub fn is_forbidden_char(c: char) -> bool {
        c.is_control()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Resource {
    type Err = InvalidAddressKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Resource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Resource {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
