//! # Core Primitives
//!
//! Fixed-width identifiers of the cross-domain messaging protocol.
//!
//! ## Widths
//!
//! | Type | Width | Meaning |
//! |------|-------|---------|
//! | `Hash` | 32 | keccak-256 digest, Merkle node |
//! | `Address` | 20 | account on the local domain |
//! | `Bytes32` | 32 | opaque identity on any domain |
//! | `DomainId` | 4 | protocol domain identifier |

use crate::errors::ParseError;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 32-byte keccak-256 digest.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// A 32-byte opaque identity (sender/recipient on any domain).
pub type Bytes32 = [u8; 32];

/// A protocol domain identifier.
pub type DomainId = u32;

/// Raw 65-byte `r || s || v` signature.
pub type SignatureBytes = [u8; 65];

/// The all-zero address, used as "unset".
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// The all-zero hash.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Left-pad an address with zeros to a 32-byte identity.
pub fn address_to_bytes32(address: &Address) -> Bytes32 {
    let mut out = [0u8; 32];
    out[12..].copy_from_slice(address);
    out
}

/// Take the low 20 bytes of a 32-byte identity.
pub fn bytes32_to_address(value: &Bytes32) -> Address {
    let mut out = [0u8; 20];
    out.copy_from_slice(&value[12..]);
    out
}

/// Check whether an address is the zero address.
pub fn is_zero_address(address: &Address) -> bool {
    address.iter().all(|b| *b == 0)
}

/// Render bytes as `0x`-prefixed lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse `0x`-prefixed (or bare) hex into bytes of any length.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, ParseError> {
    let trimmed = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(trimmed).map_err(|e| ParseError::InvalidHex(e.to_string()))
}

/// Parse hex into a fixed-width array.
pub fn parse_fixed_hex<const N: usize>(input: &str) -> Result<[u8; N], ParseError> {
    let bytes = parse_hex(input)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ParseError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        })
}
