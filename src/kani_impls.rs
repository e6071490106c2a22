//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Address, Domain, Node, Resource};

/// Node characters, including the punctuation that nodes do allow
const NODE_CHARS: &[u8] = b"abcXYZ019!#$%*+-._~";

/// Domain characters
const DOMAIN_CHARS: &[u8] = b"abcxyzABC019-.[]:";

/// Resource characters, including both separators and space
const RESOURCE_CHARS: &[u8] = b"abcXYZ019 @/:<>&'\"";

fn arbitrary_string(alphabet: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            alphabet[idx % alphabet.len()] as char
        })
        .collect()
}

impl kani::Arbitrary for Node {
    fn any() -> Self {
        let s = arbitrary_string(NODE_CHARS, 4);
        Node::parse(&s).expect("valid node by construction")
    }
}

impl kani::Arbitrary for Domain {
    fn any() -> Self {
        let s = arbitrary_string(DOMAIN_CHARS, 4);
        Domain::parse(&s).expect("valid domain by construction")
    }
}

impl kani::Arbitrary for Resource {
    fn any() -> Self {
        // leading letter keeps the resource from being blank
        let s = format!("r{}", arbitrary_string(RESOURCE_CHARS, 4));
        Resource::parse(&s).expect("valid resource by construction")
    }
}

impl kani::Arbitrary for Address {
    fn any() -> Self {
        let node: Option<Node> = kani::any();
        let domain: Domain = kani::any();
        let resource: Option<Resource> = kani::any();

        Address::from_parts(
            node.as_deref(),
            Some(domain.as_str()),
            resource.as_deref(),
        )
        .expect("valid address by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Rendering then parsing yields an equal address with identical parts
#[kani::proof]
#[kani::unwind(8)]
fn proof_parse_roundtrip() {
    let addr: Address = kani::any();
    let reparsed = Address::parse(addr.as_str()).expect("rendering should parse");
    assert_eq!(reparsed, addr);
    assert_eq!(reparsed.node(), addr.node());
    assert_eq!(reparsed.domain(), addr.domain());
    assert_eq!(reparsed.resource(), addr.resource());
}

/// Proof: The domain is always lowercase
#[kani::proof]
#[kani::unwind(8)]
fn proof_domain_is_lowercase() {
    let addr: Address = kani::any();
    assert!(!addr.domain().bytes().any(|b| b.is_ascii_uppercase()));
}

/// Proof: bare() never carries a resource and keeps node and domain
#[kani::proof]
#[kani::unwind(8)]
fn proof_bare_strips_resource() {
    let addr: Address = kani::any();
    let bare = addr.bare();
    assert!(bare.is_bare());
    assert_eq!(bare.node(), addr.node());
    assert_eq!(bare.domain(), addr.domain());
}
