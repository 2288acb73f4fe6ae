//! # Attestation
//!
//! A Notary's signed claim that the origin's tree had `root` after `nonce`
//! messages.
//!
//! ```text
//! [0..4)    origin
//! [4..8)    nonce
//! [8..40)   root
//! [40..105) signature r || s || v
//! ```
//!
//! The signature covers `eth_signed_message_hash(keccak(data))`.

use crate::errors::{CodecError, CodecResult};
use crate::view::{TypedView, ViewType};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use shared_crypto::{eth_signed_message_hash, keccak256, CryptoError, Secp256k1KeyPair};
use shared_types::{DomainId, Hash, SignatureBytes};

pub use shared_crypto::SIGNATURE_LENGTH;

/// Length of the signed data: origin, nonce, root.
pub const ATTESTATION_DATA_LENGTH: usize = 40;

/// Length of a full signed attestation.
pub const ATTESTATION_LENGTH: usize = ATTESTATION_DATA_LENGTH + SIGNATURE_LENGTH;

const OFFSET_ORIGIN: usize = 0;
const OFFSET_NONCE: usize = 4;
const OFFSET_ROOT: usize = 8;

/// The signed part of an attestation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationData {
    /// Attested domain.
    pub origin: DomainId,
    /// Leaf count the Notary observed.
    pub nonce: u32,
    /// Root the Notary observed.
    pub root: Hash,
}

impl AttestationData {
    /// Serialize to 40 bytes.
    pub fn encode(&self) -> [u8; ATTESTATION_DATA_LENGTH] {
        let mut out = [0u8; ATTESTATION_DATA_LENGTH];
        out[OFFSET_ORIGIN..OFFSET_NONCE].copy_from_slice(&self.origin.to_be_bytes());
        out[OFFSET_NONCE..OFFSET_ROOT].copy_from_slice(&self.nonce.to_be_bytes());
        out[OFFSET_ROOT..].copy_from_slice(&self.root);
        out
    }

    /// keccak-256 of the encoded data.
    pub fn hash(&self) -> Hash {
        keccak256(&self.encode())
    }

    /// Digest a Notary signs.
    pub fn signing_digest(&self) -> Hash {
        eth_signed_message_hash(&self.hash())
    }
}

/// Data plus signature.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// Signed data.
    pub data: AttestationData,
    /// `r || s || v`.
    #[serde_as(as = "Bytes")]
    pub signature: SignatureBytes,
}

impl Attestation {
    /// Sign `data` with a Notary key.
    pub fn sign(data: AttestationData, signer: &Secp256k1KeyPair) -> Result<Self, CryptoError> {
        let signature = signer.sign_digest(&data.signing_digest())?;
        Ok(Self { data, signature })
    }

    /// Serialize to 105 bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(ATTESTATION_LENGTH);
        out.extend_from_slice(&self.data.encode());
        out.extend_from_slice(&self.signature);
        out
    }

    /// Parse a 105-byte attestation.
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let view = AttestationView::new(bytes)?;
        let mut signature = [0u8; SIGNATURE_LENGTH];
        signature.copy_from_slice(view.attested_signature()?.as_bytes());
        Ok(Self {
            data: view.to_data()?,
            signature,
        })
    }
}

/// Whether `bytes` has the attestation length.
pub fn is_attestation(bytes: &[u8]) -> bool {
    bytes.len() == ATTESTATION_LENGTH
}

/// Typed view over attestation bytes.
#[derive(Clone, Copy, Debug)]
pub struct AttestationView<'a> {
    view: TypedView<'a>,
}

impl<'a> AttestationView<'a> {
    /// Wrap raw bytes; they must be exactly 105 long.
    pub fn new(bytes: &'a [u8]) -> CodecResult<Self> {
        Self::from_view(TypedView::new(bytes, ViewType::Attestation))
    }

    /// Wrap an existing `Attestation`-tagged view.
    pub fn from_view(view: TypedView<'a>) -> CodecResult<Self> {
        let view = view.assert_type(ViewType::Attestation)?;
        if !is_attestation(view.as_bytes()) {
            return Err(CodecError::NotAnAttestation { len: view.len() });
        }
        Ok(Self { view })
    }

    /// Attested domain.
    pub fn attested_origin(&self) -> CodecResult<DomainId> {
        Ok(self.view.index_u32(OFFSET_ORIGIN)?)
    }

    /// Attested nonce.
    pub fn attested_nonce(&self) -> CodecResult<u32> {
        Ok(self.view.index_u32(OFFSET_NONCE)?)
    }

    /// Attested root.
    pub fn attested_root(&self) -> CodecResult<Hash> {
        Ok(self.view.index_bytes32(OFFSET_ROOT)?)
    }

    /// The 40 signed bytes.
    pub fn attested_data(&self) -> CodecResult<TypedView<'a>> {
        Ok(self
            .view
            .prefix(ATTESTATION_DATA_LENGTH, ViewType::AttestationData)?)
    }

    /// The 65 signature bytes.
    pub fn attested_signature(&self) -> CodecResult<TypedView<'a>> {
        Ok(self.view.slice(
            ATTESTATION_DATA_LENGTH,
            SIGNATURE_LENGTH,
            ViewType::Signature,
        )?)
    }

    /// Decode the data fields.
    pub fn to_data(&self) -> CodecResult<AttestationData> {
        Ok(AttestationData {
            origin: self.attested_origin()?,
            nonce: self.attested_nonce()?,
            root: self.attested_root()?,
        })
    }

    /// Digest the signature should cover.
    pub fn signing_digest(&self) -> CodecResult<Hash> {
        Ok(eth_signed_message_hash(&self.attested_data()?.keccak()))
    }
}
