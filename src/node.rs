//! Node type, the identifying segment before `@`.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::constants::STRIP_CHARS;
use crate::error::{InvalidAddressKind, Part};

/// A validated node from an address.
///
/// Nodes are at most 1023 bytes, not blank, and free of control characters,
/// space, and the characters `"`, `&`, `'`, `/`, `:`, `<`, `>` and `@`.
/// Case is preserved.
///
/// # Examples
///
/// ```
/// use xmpp_address::Node;
///
/// let node = Node::parse("alice").unwrap();
/// assert_eq!(node.as_str(), "alice");
///
/// assert!(Node::parse("alice's").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node(String);

impl Node {
    /// Parses a node from a string (without the trailing '@').
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddressKind` if:
    /// - The node exceeds 1023 bytes
    /// - The node is blank after trimming whitespace
    /// - The node contains a forbidden character
    pub fn parse(input: &str) -> Result<Self, InvalidAddressKind> {
        Part::Node.check_length(input)?;

        if input.trim_matches(STRIP_CHARS).is_empty() {
            return Err(InvalidAddressKind::EmptyNode);
        }

        for (i, c) in input.chars().enumerate() {
            if Self::is_forbidden_char(c) {
                return Err(InvalidAddressKind::InvalidNodeCharacters { char: c, position: i });
            }
        }

        Ok(Self(input.to_string()))
    }

    /// Returns the node as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the character may not appear in a node.
    #[must_use]
    pub fn is_forbidden_char(c: char) -> bool {
        c.is_control() || matches!(c, ' ' | '"' | '&' | '\'' | '/' | ':' | '<' | '>' | '@')
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Node {
    type Err = InvalidAddressKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Node {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
