//! # Replay Attacks
//!
//! Attestations are bound to one origin domain, and fraud can be punished
//! only once.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use xdm_03_origin::{EngineState, OriginApi, OriginError, OriginEvent};

    #[test]
    fn test_foreign_domain_attestation_rejected() {
        let mut h = harness();
        let receipt = h.origin.dispatch(request(REPORTER, b"r")).unwrap();

        // Signed for another origin where the root really does differ.
        let foreign = attest(&h.notary, LOCAL_DOMAIN + 1, 1, corrupt(receipt.root));
        assert_eq!(
            h.origin.improper_attestation(REPORTER, &foreign).unwrap_err(),
            OriginError::WrongDomain {
                expected: LOCAL_DOMAIN,
                actual: LOCAL_DOMAIN + 1,
            }
        );
        assert_eq!(h.origin.state(), EngineState::Active);
    }

    #[test]
    fn test_fraud_report_replay_after_failure() {
        let mut h = harness();
        let receipt = h.origin.dispatch(request(REPORTER, b"r")).unwrap();
        let fraud = attest(&h.notary, LOCAL_DOMAIN, 1, corrupt(receipt.root));

        assert!(h.origin.improper_attestation(REPORTER, &fraud).unwrap());
        h.events.drain();

        let second_reporter = [0xC1; 20];
        assert_eq!(
            h.origin.improper_attestation(second_reporter, &fraud).unwrap_err(),
            OriginError::NotActive
        );
        assert_eq!(h.registry.slash_reporters(), vec![REPORTER]);
        assert!(h.events.is_empty());
    }

    #[test]
    fn test_honest_replay_is_inert() {
        let mut h = harness();
        let receipt = h.origin.dispatch(request(REPORTER, b"r")).unwrap();
        h.origin.dispatch(request(REPORTER, b"s")).unwrap();
        h.events.drain();

        // A stale but correct root stays valid forever.
        let stale = attest(&h.notary, LOCAL_DOMAIN, 1, receipt.root);
        for _ in 0..5 {
            assert!(!h.origin.improper_attestation(REPORTER, &stale).unwrap());
        }
        assert!(h.events.is_empty());
        assert_eq!(h.origin.state(), EngineState::Active);
    }

    #[test]
    fn test_fraud_on_empty_history() {
        let mut h = harness();

        // Nonce 0 is the empty-tree root recorded at initialization.
        let bogus = attest(&h.notary, LOCAL_DOMAIN, 0, [0x42; 32]);
        assert!(h.origin.improper_attestation(REPORTER, &bogus).unwrap());
        assert!(h
            .events
            .events()
            .iter()
            .any(|e| matches!(e, OriginEvent::NotaryRemoved { .. })));
    }
}
