//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use xmpp_address::prelude::*;
//!
//! let addr = Address::parse("alice@wonderland.lit").unwrap();
//! assert_eq!(addr.node_part().map(Node::as_str), Some("alice"));
//! ```

pub use crate::{
    // Core types
    Address, Domain, IntoAddress, Node, Resource,
    // Errors
    InvalidAddress, InvalidAddressKind, Part,
    // Constants
    MAX_ADDRESS_LENGTH, MAX_PART_LENGTH, NODE_SEPARATOR, RESOURCE_SEPARATOR,
};
