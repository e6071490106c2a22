//! Parser and validator for `node@domain/resource` network addresses.
//!
//! This crate implements parsing, validation, canonical rendering and
//! case-insensitive comparison of the three-part addresses used by XMPP and
//! similar messaging protocols (historically called Jabber IDs).
//!
//! # Overview
//!
//! An address has an optional node, a required domain and an optional
//! resource:
//!
//! ```text
//! [node@]domain[/resource]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use xmpp_address::Address;
//!
//! // Parse an address
//! let addr = Address::parse("alice@Wonderland.lit/tea").unwrap();
//!
//! // Access components
//! assert_eq!(addr.node(), Some("alice"));
//! assert_eq!(addr.domain(), "wonderland.lit");
//! assert_eq!(addr.resource(), Some("tea"));
//!
//! // Strip the resource
//! assert_eq!(addr.bare().to_string(), "alice@wonderland.lit");
//! ```
//!
//! # Explicit Parts
//!
//! ```rust
//! use xmpp_address::Address;
//!
//! let addr = Address::from_parts(Some("alice"), Some("wonderland.lit"), None).unwrap();
//! assert!(addr.is_bare());
//! assert!(!Address::is_valid(Some("alice's"), Some("wonderland.lit"), None));
//! ```
//!
//! # Length Constraints
//!
//! | Component | Max Length |
//! |-----------|------------|
//! | Node | 1023 bytes |
//! | Domain | 1023 bytes |
//! | Resource | 1023 bytes |
//! | Rendered address | 3071 bytes |
//!
//! # Character Classes
//!
//! | Component | Rejected characters |
//! |-----------|---------------------|
//! | Node | control characters, space, `"` `&` `'` `/` `:` `<` `>` `@` |
//! | Domain | control characters, space |
//! | Resource | control characters |
//!
//! Only these exclusions are applied; no stringprep or IDNA profile is run.
//!
//! # Grammar Specification
//!
//! See `grammar.abnf` at the crate root for the splitting grammar.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod constants;
mod domain;
mod error;
#[cfg(kani)]
mod kani_impls;
mod node;
mod parser;
pub mod prelude;
mod resource;

pub use address::{Address, IntoAddress};
pub use constants::{MAX_ADDRESS_LENGTH, MAX_PART_LENGTH, NODE_SEPARATOR, RESOURCE_SEPARATOR};
pub use domain::Domain;
pub use error::{InvalidAddress, InvalidAddressKind, Part};
pub use node::Node;
pub use resource::Resource;
