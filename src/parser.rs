//! Structural splitting of a raw address into its three candidate parts.
//!
//! The grammar (see `grammar.abnf`) is
//!
//! ```text
//! address = [ node "@" ] domain [ "/" resource ]
//! ```
//!
//! Splitting never inspects part contents beyond the two separators; an
//! empty-but-present part is kept as `Some("")` so validation can tell it
//! apart from an absent one.

use crate::constants::{NODE_SEPARATOR, RESOURCE_SEPARATOR};
use crate::error::InvalidAddressKind;

/// Candidate parts borrowed from the raw input, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawParts<'a> {
    pub(crate) node: Option<&'a str>,
    pub(crate) domain: &'a str,
    pub(crate) resource: Option<&'a str>,
}

/// Splits `input` into node, domain and resource.
///
/// The node is only captured when an `@` comes before the first `/`.
/// Everything after the first `/` following the domain is the resource,
/// separators included.
pub(crate) fn split(input: &str) -> Result<RawParts<'_>, InvalidAddressKind> {
    let Some(idx) = find_separator(input) else {
        return Ok(RawParts {
            node: None,
            domain: input,
            resource: None,
        });
    };

    if input[idx..].starts_with(RESOURCE_SEPARATOR) {
        return Ok(RawParts {
            node: None,
            domain: &input[..idx],
            resource: Some(&input[idx + 1..]),
        });
    }

    let node = &input[..idx];
    let rest = &input[idx + 1..];
    let (domain, resource) = match find_separator(rest) {
        None => (rest, None),
        Some(j) if rest[j..].starts_with(RESOURCE_SEPARATOR) => (&rest[..j], Some(&rest[j + 1..])),
        Some(j) => {
            return Err(InvalidAddressKind::UnexpectedSeparator {
                char: NODE_SEPARATOR,
                position: input[..idx + 1 + j].chars().count(),
            });
        }
    };

    Ok(RawParts {
        node: Some(node),
        domain,
        resource,
    })
}

fn find_separator(input: &str) -> Option<usize> {
    input.find([NODE_SEPARATOR, RESOURCE_SEPARATOR])
}
