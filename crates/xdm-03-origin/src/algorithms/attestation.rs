//! # Attestation Algorithm
//!
//! Decode, domain-check and recover the signer of an attestation, then
//! compare its `(nonce, root)` with the recorded history.

use shared_crypto::recover_address;
use shared_types::{Address, DomainId, Hash};
use xdm_01_message_codec::{AttestationData, AttestationView};

use crate::domain::{AttestationStatus, OriginError, OriginResult};

/// Attestation with a recovered signer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedAttestation {
    /// Recovered signer.
    pub signer: Address,
    /// Signed fields.
    pub data: AttestationData,
}

/// Decode `bytes`, check the domain and recover the signer.
///
/// Membership is not checked here.
pub fn recover_attestation(bytes: &[u8], local_domain: DomainId) -> OriginResult<SignedAttestation> {
    let view = AttestationView::new(bytes)?;
    let data = view.to_data()?;
    if data.origin != local_domain {
        return Err(OriginError::WrongDomain {
            expected: local_domain,
            actual: data.origin,
        });
    }
    let digest = view.signing_digest()?;
    let signer = recover_address(&digest, view.attested_signature()?.as_bytes())?;
    Ok(SignedAttestation { signer, data })
}

/// Compare `(nonce, root)` against `history`.
pub fn compare_with_history(history: &[Hash], nonce: u32, root: &Hash) -> AttestationStatus {
    match history.get(nonce as usize) {
        None => AttestationStatus::Future,
        Some(recorded) if recorded == root => AttestationStatus::Valid,
        Some(_) => AttestationStatus::Fraudulent,
    }
}
