//! # Notary Signatures (secp256k1)
//!
//! Signer recovery for Notary attestations, plus the signing half used by
//! Notary agents.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: S must not exceed `n/2`
//! - **Recovery ID**: `v` must be 27 or 28; raw ids 0/1 are normalized first
//! - **Constant-Time Operations**: the S bound check uses `subtle`
//! - Recovery and signing are delegated to `k256`

use crate::keccak::{eth_signed_message_hash, keccak256};
use crate::CryptoError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use shared_types::{Address, Hash, SignatureBytes};
use subtle::Choice;
use zeroize::Zeroize;

/// Length of a compact `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// floor(n / 2), the largest accepted S value.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

// =============================================================================
// RECOVERY
// =============================================================================

/// Recover the signer's address from a 32-byte digest and a 65-byte signature.
///
/// Checks run in this order: length, S bound, recovery id, curve recovery.
pub fn recover_address(digest: &Hash, signature: &[u8]) -> Result<Address, CryptoError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(CryptoError::InvalidSigLen(signature.len()));
    }

    let mut s = [0u8; 32];
    s.copy_from_slice(&signature[32..64]);
    if !is_low_s(&s) {
        return Err(CryptoError::InvalidSigS);
    }

    let recovery_id = parse_recovery_id(signature[64])?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes.copy_from_slice(&signature[..64]);
    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| CryptoError::InvalidSignature)?;

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| CryptoError::InvalidSignature)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Recover the signer of an Ethereum signed message over `hash`.
pub fn recover_eth_signed(hash: &Hash, signature: &[u8]) -> Result<Address, CryptoError> {
    recover_address(&eth_signed_message_hash(hash), signature)
}

/// Last 20 bytes of keccak-256 over the uncompressed key body.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let pubkey_slice = pubkey_bytes.as_bytes();

    // Skip the 0x04 SEC1 tag.
    let hash = keccak256(&pubkey_slice[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Check `s <= n/2` in constant time.
fn is_low_s(s: &[u8; 32]) -> bool {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let s_byte = s[i];
        let h_byte = SECP256K1_HALF_ORDER[i];

        let not_decided = !(less | greater);
        let byte_less = Choice::from((s_byte < h_byte) as u8);
        let byte_greater = Choice::from((s_byte > h_byte) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    (!greater).into()
}

/// Map the trailing signature byte to a recovery id.
///
/// Raw parity (0/1) is accepted alongside 27/28.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let normalized = if v < 27 { v.wrapping_add(27) } else { v };
    let id = match normalized {
        27 => 0,
        28 => 1,
        _ => return Err(CryptoError::InvalidSigV(v)),
    };

    RecoveryId::try_from(id).map_err(|_| CryptoError::InvalidSigV(v))
}

/// Compute `n - s`, flipping a signature between its low and high forms.
pub fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}

// =============================================================================
// SIGNING
// =============================================================================

/// secp256k1 keypair producing recoverable, canonical signatures.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Fresh key from the thread RNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Load a Notary key from a 32-byte scalar.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Address of this key.
    pub fn address(&self) -> Address {
        address_from_pubkey(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte digest, returning `r || s || v` with low S and `v ∈ {27, 28}`.
    pub fn sign_digest(&self, digest: &Hash) -> Result<SignatureBytes, CryptoError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        let sig_bytes = sig.to_bytes();
        let mut s = [0u8; 32];
        s.copy_from_slice(&sig_bytes[32..]);

        let mut parity = recid.to_byte() & 1;
        if !is_low_s(&s) {
            s = invert_s(&s);
            parity ^= 1;
        }

        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&sig_bytes[..32]);
        out[32..64].copy_from_slice(&s);
        out[64] = 27 + parity;
        Ok(out)
    }

    /// Sign `hash` as an Ethereum signed message.
    pub fn sign_eth_message(&self, hash: &Hash) -> Result<SignatureBytes, CryptoError> {
        self.sign_digest(&eth_signed_message_hash(hash))
    }

    /// Raw secret scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }
}

impl Drop for Secp256k1KeyPair {
    fn drop(&mut self) {
        // Scrub the copy.
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}
