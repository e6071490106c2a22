//! Constants for address validation.

/// Maximum length of a single address part (node, domain, or resource) in bytes.
pub const MAX_PART_LENGTH: usize = 1023;

/// Maximum rendered address length in bytes (three parts plus both separators).
pub const MAX_ADDRESS_LENGTH: usize = 3 * MAX_PART_LENGTH + 2;

/// Separator between the node and the domain.
pub const NODE_SEPARATOR: char = '@';

/// Separator between the domain and the resource.
pub const RESOURCE_SEPARATOR: char = '/';

/// Characters stripped from both ends of a node or resource before the
/// emptiness check: NUL, tab, line feed, vertical tab, form feed, carriage
/// return and space.
pub const STRIP_CHARS: &[char] = &['\0', '\t', '\n', '\x0b', '\x0c', '\r', ' '];
