//! Error types for address parsing and validation.

use std::fmt;

use crate::constants::MAX_PART_LENGTH;

/// Errors that can occur when constructing an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAddress {
    /// The input that failed to validate
    pub input: String,
    /// The specific rule that was violated
    pub kind: InvalidAddressKind,
}

impl InvalidAddress {
    pub(crate) fn new(input: impl Into<String>, kind: InvalidAddressKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }
}

/// One of the three segments of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The identifying segment before `@`
    Node,
    /// The host segment
    Domain,
    /// The trailing segment after `/`
    Resource,
}

impl Part {
    /// Fails with [`InvalidAddressKind::PartTooLong`] when `value` exceeds
    /// [`MAX_PART_LENGTH`] bytes.
    pub(crate) const fn check_length(self, value: &str) -> Result<(), InvalidAddressKind> {
        if value.len() > MAX_PART_LENGTH {
            return Err(InvalidAddressKind::PartTooLong {
                part: self,
                max: MAX_PART_LENGTH,
                actual: value.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Domain => write!(f, "domain"),
            Self::Resource => write!(f, "resource"),
        }
    }
}

/// Specific validation failures, reported in a fixed check order.
///
/// `UnexpectedSeparator` comes from splitting the raw input and is reported
/// before any content check. It only occurs for inputs that cannot be split
/// into node, domain and resource (such as `a@b@c`), never for
/// [`Address::from_parts`](crate::Address::from_parts) with an explicit
/// domain. The other variants are the content rules, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidAddressKind {
    /// A second `@` appeared before the domain boundary
    UnexpectedSeparator {
        /// The separator character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// A part exceeds the maximum byte length
    PartTooLong {
        /// The offending part
        part: Part,
        /// Maximum allowed length in bytes
        max: usize,
        /// Actual length in bytes
        actual: usize,
    },
    /// Node is present but blank
    EmptyNode,
    /// Node contains a control character, space, or one of `"&'/:<>@`
    InvalidNodeCharacters {
        /// The invalid character
        char: char,
        /// Position in the node
        position: usize,
    },
    /// Resource is present but blank
    EmptyResource,
    /// Resource contains a control character
    InvalidResourceCharacters {
        /// The invalid character
        char: char,
        /// Position in the resource
        position: usize,
    },
    /// Domain is empty while a node or resource is present
    EmptyDomain,
    /// Domain contains a control character or space
    InvalidDomainCharacters {
        /// The invalid character
        char: char,
        /// Position in the domain
        position: usize,
    },
}

impl fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid address '{}': {}", self.input.escape_debug(), self.kind)
    }
}

impl std::error::Error for InvalidAddress {}

impl fmt::Display for InvalidAddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedSeparator { char, position } => {
                write!(
                    f,
                    "unexpected separator '{char}' at position {position}; a node may not contain '@'"
                )
            }
            Self::PartTooLong { part, max, actual } => {
                write!(f, "{part} length {actual} exceeds maximum {max} bytes")
            }
            Self::EmptyNode => write!(f, "node cannot be empty"),
            Self::InvalidNodeCharacters { char, position } => {
                write!(
                    f,
                    "invalid node character {char:?} at position {position}; control characters, space and \"&'/:<>@ are not allowed"
                )
            }
            Self::EmptyResource => write!(f, "resource cannot be empty"),
            Self::InvalidResourceCharacters { char, position } => {
                write!(
                    f,
                    "invalid resource character {char:?} at position {position}; control characters are not allowed"
                )
            }
            Self::EmptyDomain => {
                write!(f, "domain cannot be empty when a node or resource is present")
            }
            Self::InvalidDomainCharacters { char, position } => {
                write!(
                    f,
                    "invalid domain character {char:?} at position {position}; control characters and space are not allowed"
                )
            }
        }
    }
}

impl std::error::Error for InvalidAddressKind {}
