//! Main address type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::constants::{NODE_SEPARATOR, RESOURCE_SEPARATOR};
use crate::domain::Domain;
use crate::error::{InvalidAddress, InvalidAddressKind, Part};
use crate::node::Node;
use crate::parser::{self, RawParts};
use crate::resource::Resource;

/// A parsed and validated `node@domain/resource` address.
///
/// The node and resource are optional; the domain is required unless the
/// whole address is empty. Equality, ordering and hashing compare the
/// lowercased canonical rendering, so addresses that differ only in letter
/// case are interchangeable as map keys.
///
/// # Structure
///
/// ```text
/// [node@]domain[/resource]
/// ```
///
/// # Thread safety
///
/// `Address` is an owned value and is `Send + Sync`. The resource is the only
/// part that can change after construction, through [`Address::set_resource`],
/// which takes `&mut self` and therefore cannot race with readers.
///
/// # Examples
///
/// ```
/// use xmpp_address::Address;
///
/// let addr = Address::parse("alice@Wonderland.lit/tea").unwrap();
/// assert_eq!(addr.node(), Some("alice"));
/// assert_eq!(addr.domain(), "wonderland.lit");
/// assert_eq!(addr.resource(), Some("tea"));
/// assert_eq!(addr.to_string(), "alice@wonderland.lit/tea");
///
/// assert_eq!(addr, Address::parse("ALICE@wonderland.lit/TEA").unwrap());
/// assert_ne!(addr, addr.bare());
/// ```
#[derive(Debug, Clone)]
pub struct Address {
    node: Option<Node>,
    domain: Domain,
    resource: Option<Resource>,
    /// Canonical string representation
    rendered: String,
    /// Lowercased rendering used for comparison and hashing
    folded: String,
}

impl Address {
    /// Parses an address from a string.
    ///
    /// The empty string is accepted and yields the empty address.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if:
    /// - More than one `@` appears before the domain boundary
    /// - Any part exceeds 1023 bytes
    /// - The node is blank or contains a forbidden character
    /// - The resource is blank or contains a control character
    /// - The domain is empty while a node or resource is present
    /// - The domain contains a control character or space
    pub fn parse(input: &str) -> Result<Self, InvalidAddress> {
        parser::split(input)
            .and_then(Self::validate)
            .map_err(|kind| Self::reject(input, kind))
    }

    /// Creates an address from explicit parts.
    ///
    /// When both `domain` and `resource` are `None`, `node` is treated as a
    /// raw address and parsed; a missing `node` then means the empty address.
    /// Otherwise the parts are validated as given, without splitting, and a
    /// missing domain counts as the empty domain.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` under the same rules as [`Address::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::Address;
    ///
    /// let addr = Address::from_parts(Some("alice"), Some("wonderland.lit"), Some("tea")).unwrap();
    /// assert_eq!(addr.as_str(), "alice@wonderland.lit/tea");
    ///
    /// let parsed = Address::from_parts(Some("alice@wonderland.lit"), None, None).unwrap();
    /// assert_eq!(parsed.node(), Some("alice"));
    /// ```
    pub fn from_parts(
        node: Option<&str>,
        domain: Option<&str>,
        resource: Option<&str>,
    ) -> Result<Self, InvalidAddress> {
        if domain.is_none() && resource.is_none() {
            return Self::parse(node.unwrap_or_default());
        }

        let parts = RawParts {
            node,
            domain: domain.unwrap_or_default(),
            resource,
        };
        Self::validate(parts).map_err(|kind| Self::reject(&Self::render_raw(parts), kind))
    }

    /// Converts a raw string or an existing address into an address.
    ///
    /// An existing `Address` passes through unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if a string input fails to parse.
    pub fn new(value: impl IntoAddress) -> Result<Self, InvalidAddress> {
        value.into_address()
    }

    /// Returns true if the parts form a valid address.
    ///
    /// Takes the same arguments as [`Address::from_parts`] and discards the
    /// failure reason.
    #[must_use]
    pub fn is_valid(node: Option<&str>, domain: Option<&str>, resource: Option<&str>) -> bool {
        Self::from_parts(node, domain, resource).is_ok()
    }

    /// Returns true if `input` parses as an address.
    #[must_use]
    pub fn is_valid_str(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// Returns the node, if present.
    #[must_use]
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Returns the lowercased domain; empty only for the empty address.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.domain.as_str()
    }

    /// Returns the resource, if present.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Returns the validated node.
    #[must_use]
    pub const fn node_part(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    /// Returns the validated domain.
    #[must_use]
    pub const fn domain_part(&self) -> &Domain {
        &self.domain
    }

    /// Returns the validated resource.
    #[must_use]
    pub const fn resource_part(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Returns a copy of this address without its resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::Address;
    ///
    /// let full = Address::parse("alice@wonderland.lit/tea").unwrap();
    /// assert_eq!(full.bare().as_str(), "alice@wonderland.lit");
    /// assert_eq!(full.resource(), Some("tea"));
    /// ```
    #[must_use]
    pub fn bare(&self) -> Self {
        Self::assemble(self.node.clone(), self.domain.clone(), None)
    }

    /// Returns true if the address has no resource.
    #[must_use]
    pub const fn is_bare(&self) -> bool {
        self.resource.is_none()
    }

    /// Returns true if the address is a domain alone, with no node or resource.
    #[must_use]
    pub fn is_domain_only(&self) -> bool {
        !self.is_empty() && self.rendered == self.domain.as_str()
    }

    /// Returns true if this is the empty address.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Returns a new address with the given resource.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if the resource is invalid or the address has
    /// an empty domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::Address;
    ///
    /// let bare = Address::parse("alice@wonderland.lit").unwrap();
    /// let full = bare.with_resource("tea").unwrap();
    /// assert_eq!(full.as_str(), "alice@wonderland.lit/tea");
    ///
    /// assert!(Address::parse("alice@wonderland.lit").unwrap().with_resource(" ").is_err());
    /// ```
    pub fn with_resource(mut self, resource: &str) -> Result<Self, InvalidAddress> {
        self.set_resource(Some(resource))?;
        Ok(self)
    }

    /// Returns a new address without a resource. Same as [`Address::bare`].
    #[must_use]
    pub fn without_resource(&self) -> Self {
        self.bare()
    }

    /// Replaces the resource in place, re-running validation.
    ///
    /// On failure the address is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if the resource is invalid or the address has
    /// an empty domain.
    pub fn set_resource(&mut self, resource: Option<&str>) -> Result<(), InvalidAddress> {
        let parts = RawParts {
            node: self.node(),
            domain: self.domain(),
            resource,
        };
        let updated =
            Self::validate(parts).map_err(|kind| Self::reject(&Self::render_raw(parts), kind))?;
        tracing::debug!(from = %self.rendered, to = %updated.rendered, "replaced address resource");
        *self = updated;
        Ok(())
    }

    fn validate(parts: RawParts<'_>) -> Result<Self, InvalidAddressKind> {
        let RawParts {
            node,
            domain,
            resource,
        } = parts;

        for (part, value) in [
            (Part::Node, node),
            (Part::Domain, Some(domain)),
            (Part::Resource, resource),
        ] {
            if let Some(value) = value {
                part.check_length(value)?;
            }
        }

        let node = node.map(Node::parse).transpose()?;
        let resource = resource.map(Resource::parse).transpose()?;

        if domain.is_empty() && (node.is_some() || resource.is_some()) {
            return Err(InvalidAddressKind::EmptyDomain);
        }

        let domain = Domain::parse(domain)?;

        Ok(Self::assemble(node, domain, resource))
    }

    fn assemble(node: Option<Node>, domain: Domain, resource: Option<Resource>) -> Self {
        let rendered = Self::render(
            node.as_ref().map(Node::as_str),
            domain.as_str(),
            resource.as_ref().map(Resource::as_str),
        );
        let folded = rendered.to_lowercase();

        Self {
            node,
            domain,
            resource,
            rendered,
            folded,
        }
    }

    fn render(node: Option<&str>, domain: &str, resource: Option<&str>) -> String {
        let mut result = String::with_capacity(
            node.map_or(0, |n| n.len() + 1) + domain.len() + resource.map_or(0, |r| r.len() + 1),
        );

        if let Some(node) = node {
            result.push_str(node);
            result.push(NODE_SEPARATOR);
        }

        result.push_str(domain);

        if let Some(resource) = resource {
            result.push(RESOURCE_SEPARATOR);
            result.push_str(resource);
        }

        result
    }

    fn render_raw(parts: RawParts<'_>) -> String {
        Self::render(parts.node, parts.domain, parts.resource)
    }

    fn reject(input: &str, kind: InvalidAddressKind) -> InvalidAddress {
        tracing::trace!(input = %input.escape_debug(), reason = %kind, "rejected address");
        InvalidAddress::new(input, kind)
    }
}

/// Conversion into an [`Address`].
///
/// Strings are parsed; an `Address` is passed through without re-parsing.
pub trait IntoAddress {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if the value is not a valid address.
    fn into_address(self) -> Result<Address, InvalidAddress>;
}

impl IntoAddress for Address {
    fn into_address(self) -> Result<Address, InvalidAddress> {
        Ok(self)
    }
}

impl IntoAddress for &Address {
    fn into_address(self) -> Result<Address, InvalidAddress> {
        Ok(self.clone())
    }
}

impl IntoAddress for &str {
    fn into_address(self) -> Result<Address, InvalidAddress> {
        Address::parse(self)
    }
}

impl IntoAddress for String {
    fn into_address(self) -> Result<Address, InvalidAddress> {
        Address::parse(&self)
    }
}

impl IntoAddress for &String {
    fn into_address(self) -> Result<Address, InvalidAddress> {
        Address::parse(self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl FromStr for Address {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl TryFrom<&str> for Address {
    type Error = InvalidAddress;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = InvalidAddress;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.rendered)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
