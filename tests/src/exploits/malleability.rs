//! # Signature Malleability
//!
//! Every attestation has exactly one accepted encoding. Flipping `s` to its
//! high form, rewriting `v` or editing the signed payload must never yield
//! a slash, and above all must never frame a Notary who did not sign.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use shared_crypto::{ecdsa::invert_s, CryptoError};
    use xdm_01_message_codec::{ATTESTATION_DATA_LENGTH, ATTESTATION_LENGTH};
    use xdm_03_origin::{EngineState, OriginApi, OriginError};

    const S_OFFSET: usize = ATTESTATION_DATA_LENGTH + 32;
    const V_OFFSET: usize = ATTESTATION_LENGTH - 1;

    fn fraud_bytes(h: &mut Harness) -> Vec<u8> {
        let receipt = h.origin.dispatch(request(REPORTER, b"m")).unwrap();
        attest(&h.notary, LOCAL_DOMAIN, 1, corrupt(receipt.root))
    }

    fn assert_untouched(h: &Harness) {
        assert_eq!(h.origin.state(), EngineState::Active);
        assert!(h.registry.slash_reporters().is_empty());
        assert_eq!(h.origin.all_notaries(), vec![h.notary.address()]);
    }

    #[test]
    fn test_high_s_twin_rejected() {
        let mut h = harness();
        let mut bytes = fraud_bytes(&mut h);

        let mut s = [0u8; 32];
        s.copy_from_slice(&bytes[S_OFFSET..S_OFFSET + 32]);
        bytes[S_OFFSET..S_OFFSET + 32].copy_from_slice(&invert_s(&s));
        // The twin of a valid signature recovers with the opposite parity.
        bytes[V_OFFSET] ^= 0x01;

        assert_eq!(
            h.origin.improper_attestation(REPORTER, &bytes).unwrap_err(),
            OriginError::Signature(CryptoError::InvalidSigS)
        );
        assert_untouched(&h);
    }

    #[test]
    fn test_out_of_range_v_rejected() {
        let mut h = harness();
        let mut bytes = fraud_bytes(&mut h);

        for v in [2u8, 26, 29, 0xFF] {
            bytes[V_OFFSET] = v;
            assert_eq!(
                h.origin.improper_attestation(REPORTER, &bytes).unwrap_err(),
                OriginError::Signature(CryptoError::InvalidSigV(v))
            );
        }
        assert_untouched(&h);
    }

    #[test]
    fn test_raw_parity_accepted() {
        let mut h = harness();
        let mut bytes = fraud_bytes(&mut h);

        // 0/1 is the same recovery id as 27/28.
        bytes[V_OFFSET] -= 27;
        assert!(h.origin.improper_attestation(REPORTER, &bytes).unwrap());
    }

    #[test]
    fn test_flipped_parity_cannot_frame_notary() {
        let mut h = harness();
        let mut bytes = fraud_bytes(&mut h);
        bytes[V_OFFSET] = if bytes[V_OFFSET] == 27 { 28 } else { 27 };

        let err = h.origin.improper_attestation(REPORTER, &bytes).unwrap_err();
        assert!(matches!(
            err,
            OriginError::NotANotary(_) | OriginError::Signature(_)
        ));
        assert_untouched(&h);
    }

    #[test]
    fn test_edited_payload_cannot_frame_notary() {
        let mut h = harness();
        let receipt = h.origin.dispatch(request(REPORTER, b"m")).unwrap();

        // An honest attestation with its root edited after signing.
        let mut bytes = attest(&h.notary, LOCAL_DOMAIN, 1, receipt.root);
        bytes[ATTESTATION_DATA_LENGTH - 1] ^= 0x01;

        let err = h.origin.improper_attestation(REPORTER, &bytes).unwrap_err();
        assert!(matches!(
            err,
            OriginError::NotANotary(_) | OriginError::Signature(_)
        ));
        assert_untouched(&h);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let mut h = harness();
        let bytes = fraud_bytes(&mut h);

        for len in [0, ATTESTATION_LENGTH - 1, ATTESTATION_LENGTH + 1] {
            let mut edited = bytes.clone();
            edited.resize(len, 0);
            assert!(matches!(
                h.origin.improper_attestation(REPORTER, &edited),
                Err(OriginError::Codec(_))
            ));
        }
        assert_untouched(&h);
    }
}
