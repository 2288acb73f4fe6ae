//! # Origin Scenarios
//!
//! Concrete dispatch and attestation walkthroughs with known vectors.
//!
//! 1. First dispatch lands at nonce 1 with a known leaf and root
//! 2. Tips that disagree with the payment are rejected
//! 3. Oversized bodies are rejected
//! 4. Honest attestations leave the origin Active
//! 5. An improper attestation slashes the Notary and fails the origin
//! 6. Signatures by non-Notaries are rejected

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use shared_types::{address_to_bytes32, U256};
    use xdm_01_message_codec::{MessageView, TIPS_LENGTH};
    use xdm_03_origin::{EngineState, OriginApi, OriginError, OriginEvent};

    const SCENARIO_CALLER: [u8; 20] = {
        let mut a = [0u8; 20];
        a[19] = 0x01;
        a
    };

    const FIRST_LEAF: &str = "71557dfb6da15b60426fdb19c223492f2b2bcaadabb73f35ff0720758d9bb5a1";
    const FIRST_ROOT: &str = "3f5b8463683eccd61e38f78249467f9c5bdac034753e2c4afdcd857e8524f3b4";

    fn first_request() -> xdm_03_origin::DispatchRequest {
        let mut recipient = [0u8; 32];
        recipient[31] = 0x02;
        xdm_03_origin::DispatchRequest {
            recipient,
            ..request(SCENARIO_CALLER, b"")
        }
    }

    // =========================================================================
    // SCENARIO 1: FIRST DISPATCH
    // =========================================================================

    #[test]
    fn test_first_dispatch_known_vectors() {
        let mut h = harness();
        let receipt = h.origin.dispatch(first_request()).unwrap();

        assert_eq!(receipt.nonce, 1);
        assert_eq!(receipt.leaf_index, 0);
        assert_eq!(hex::encode(receipt.leaf), FIRST_LEAF);
        assert_eq!(hex::encode(receipt.root), FIRST_ROOT);
        assert_eq!(h.origin.historical_root(1), Some(receipt.root));

        let events = h.events.drain();
        assert_eq!(events.len(), 1);
        match &events[0] {
            OriginEvent::Dispatch {
                leaf_hash,
                leaf_index,
                destination_and_nonce,
                tips,
                message,
            } => {
                assert_eq!(*leaf_hash, receipt.leaf);
                assert_eq!(*leaf_index, 0);
                assert_eq!(*destination_and_nonce, (20u64 << 32) | 1);
                assert_eq!(tips.len(), TIPS_LENGTH);

                let view = MessageView::parse(message, TIPS_LENGTH).unwrap();
                let header = view.header().unwrap().to_header().unwrap();
                assert_eq!(header.origin, LOCAL_DOMAIN);
                assert_eq!(header.sender, address_to_bytes32(&SCENARIO_CALLER));
                assert_eq!(header.nonce, 1);
                assert!(view.body().unwrap().is_empty());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_contract_sender_is_padded_address() {
        let mut h = harness();
        h.host.deploy(SCENARIO_CALLER);
        let request = xdm_03_origin::DispatchRequest {
            sender: xdm_03_origin::Sender::Contract(SCENARIO_CALLER),
            ..first_request()
        };
        let receipt = h.origin.dispatch(request).unwrap();

        // Contract and external identities of the same address frame identically.
        assert_eq!(hex::encode(receipt.leaf), FIRST_LEAF);
    }

    // =========================================================================
    // SCENARIO 2-3: REJECTED DISPATCHES
    // =========================================================================

    #[test]
    fn test_tips_mismatch_assigns_no_nonce() {
        let mut h = harness();
        let request = xdm_03_origin::DispatchRequest {
            amount_paid: U256::one(),
            ..first_request()
        };

        let err = h.origin.dispatch(request).unwrap_err();
        assert!(matches!(err, OriginError::TipsMismatch { .. }));
        assert_eq!(h.origin.nonce(), 0);
        assert!(h.events.is_empty());

        // The rejected call did not burn a nonce.
        assert_eq!(h.origin.dispatch(first_request()).unwrap().nonce, 1);
    }

    #[test]
    fn test_oversized_body_rejected() {
        let mut h = harness();
        let body = vec![0u8; 2049];
        let err = h.origin.dispatch(request(SCENARIO_CALLER, &body)).unwrap_err();
        assert_eq!(
            err,
            OriginError::BodyTooLong {
                len: 2049,
                max: 2048
            }
        );

        let body = vec![0u8; 2048];
        assert!(h.origin.dispatch(request(SCENARIO_CALLER, &body)).is_ok());
    }

    // =========================================================================
    // SCENARIO 4-5: ATTESTATIONS
    // =========================================================================

    #[test]
    fn test_honest_attestation_keeps_origin_active() {
        let mut h = harness();
        let receipt = h.origin.dispatch(first_request()).unwrap();
        h.events.drain();

        let honest = attest(&h.notary, LOCAL_DOMAIN, 1, receipt.root);
        assert!(!h.origin.improper_attestation(REPORTER, &honest).unwrap());
        assert_eq!(h.origin.state(), EngineState::Active);
        assert!(h.events.is_empty());
        assert!(h.registry.slash_reporters().is_empty());
    }

    #[test]
    fn test_improper_attestation_fails_origin() {
        let mut h = harness();
        let receipt = h.origin.dispatch(first_request()).unwrap();
        h.events.drain();

        let notary = h.notary.address();
        let fraud = attest(&h.notary, LOCAL_DOMAIN, 1, corrupt(receipt.root));
        assert!(h.origin.improper_attestation(REPORTER, &fraud).unwrap());
        assert_eq!(h.origin.state(), EngineState::Failed);
        assert_eq!(h.registry.slash_reporters(), vec![REPORTER]);

        let events = h.events.drain();
        let improper = events
            .iter()
            .position(|e| matches!(e, OriginEvent::ImproperAttestation { .. }))
            .unwrap();
        let slashed = events
            .iter()
            .position(|e| matches!(e, OriginEvent::NotarySlashed { .. }))
            .unwrap();
        assert!(improper < slashed);
        assert!(events.contains(&OriginEvent::ImproperAttestation {
            notary,
            attestation: fraud.clone(),
        }));
        assert!(events.contains(&OriginEvent::NotarySlashed {
            notary,
            reporter: REPORTER,
        }));

        assert_eq!(
            h.origin.dispatch(first_request()).unwrap_err(),
            OriginError::NotActive
        );
    }

    // =========================================================================
    // SCENARIO 6: NON-NOTARY SIGNER
    // =========================================================================

    #[test]
    fn test_non_notary_signer_rejected() {
        let mut h = harness();
        let receipt = h.origin.dispatch(first_request()).unwrap();

        let stranger = key(77);
        let bytes = attest(&stranger, LOCAL_DOMAIN, 1, corrupt(receipt.root));
        assert_eq!(
            h.origin.improper_attestation(REPORTER, &bytes).unwrap_err(),
            OriginError::NotANotary(stranger.address())
        );
        assert_eq!(h.origin.state(), EngineState::Active);
    }
}
