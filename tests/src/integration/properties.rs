//! # Origin Properties
//!
//! Randomized operation sequences checked against the engine's laws:
//! history tracks the tree, nonces step by one, Failed is absorbing, every
//! dispatched leaf hashes its envelope and is provable from the tree, and
//! only disagreeing roots from listed Notaries are punished.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use proptest::prelude::*;
    use shared_crypto::keccak256;
    use shared_types::U256;
    use std::sync::Arc;
    use xdm_01_message_codec::Tips;
    use xdm_02_merkle::{branch_root, IncrementalMerkleTree};
    use xdm_03_origin::domain::{
        invariant_failed_is_absorbing, invariant_history_tracks_tree,
        invariant_nonce_matches_count,
    };
    use xdm_03_origin::{
        EngineState, InMemoryNotaryRegistry, OriginApi, OriginError, OriginEvent,
    };

    #[derive(Clone, Debug)]
    enum Op {
        Dispatch(usize),
        BadTips(u64),
        Attest { nonce_back: u8, honest: bool },
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0usize..300).prop_map(Op::Dispatch),
            1 => (1u64..1_000).prop_map(Op::BadTips),
            2 => (0u8..4, prop::bool::weighted(0.8))
                .prop_map(|(nonce_back, honest)| Op::Attest { nonce_back, honest }),
        ]
    }

    fn check_laws(h: &Harness) {
        let state = h.origin.origin_state();
        assert!(invariant_history_tracks_tree(state));
        assert!(invariant_nonce_matches_count(state));
        assert_eq!(h.origin.historical_root(h.origin.count() as usize), Some(h.origin.root()));
        assert_eq!(h.origin.nonce() as u64, h.origin.count());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_engine_laws_hold(ops in prop::collection::vec(op(), 1..24)) {
            let mut h = harness();
            let mut failed_seen = false;

            for op in ops {
                let before = h.origin.state();
                let nonce_before = h.origin.nonce();

                match op {
                    Op::Dispatch(len) => {
                        let result = h.origin.dispatch(request(REPORTER, &vec![0x5A; len]));
                        if before.is_active() {
                            let receipt = result.unwrap();
                            prop_assert_eq!(receipt.nonce, nonce_before + 1);
                        } else {
                            prop_assert_eq!(result.unwrap_err(), OriginError::NotActive);
                        }
                    }
                    Op::BadTips(paid) => {
                        let bad = xdm_03_origin::DispatchRequest {
                            amount_paid: U256::from(paid),
                            ..request(REPORTER, b"x")
                        };
                        prop_assert!(h.origin.dispatch(bad).is_err());
                        prop_assert_eq!(h.origin.nonce(), nonce_before);
                    }
                    Op::Attest { nonce_back, honest } => {
                        let nonce = nonce_before.saturating_sub(nonce_back as u32);
                        let known = h.origin.historical_root(nonce as usize).unwrap();
                        let root = if honest { known } else { corrupt(known) };
                        let bytes = attest(&h.notary, LOCAL_DOMAIN, nonce, root);
                        let result = h.origin.improper_attestation(REPORTER, &bytes);

                        if !before.is_active() {
                            prop_assert_eq!(result.unwrap_err(), OriginError::NotActive);
                        } else if honest {
                            prop_assert!(!result.unwrap());
                            prop_assert_eq!(h.origin.state(), EngineState::Active);
                        } else {
                            prop_assert!(result.unwrap());
                            prop_assert_eq!(h.origin.state(), EngineState::Failed);
                        }
                    }
                }

                let after = h.origin.state();
                prop_assert!(invariant_failed_is_absorbing(before, after));
                failed_seen |= after == EngineState::Failed;
                prop_assert_eq!(failed_seen, after == EngineState::Failed);
                check_laws(&h);
            }
        }

        #[test]
        fn prop_dispatched_leaves_are_provable(bodies in prop::collection::vec(
            prop::collection::vec(any::<u8>(), 0..64), 1..12)
        ) {
            let mut h = harness();
            for body in &bodies {
                h.origin.dispatch(request(REPORTER, body)).unwrap();
            }

            // Rebuild the tree from the envelopes in the event log.
            let mut leaves = Vec::new();
            for event in h.events.drain() {
                if let OriginEvent::Dispatch { leaf_hash, message, leaf_index, .. } = event {
                    prop_assert_eq!(keccak256(&message), leaf_hash);
                    prop_assert_eq!(leaf_index as usize, leaves.len());
                    leaves.push(leaf_hash);
                }
            }
            prop_assert_eq!(leaves.len(), bodies.len());

            let mut rebuilt = IncrementalMerkleTree::new();
            for leaf in &leaves {
                rebuilt.insert(*leaf).unwrap();
            }
            prop_assert_eq!(rebuilt.root(), h.origin.root());

            // The newest leaf proves against the current root.
            let last = leaves.len() as u64 - 1;
            let proof = sibling_path(&leaves, last as usize);
            prop_assert_eq!(branch_root(leaves[last as usize], &proof, last).unwrap(), h.origin.root());
        }

        #[test]
        fn prop_tips_must_cover_payment(
            notary in 0u64..1_000_000,
            broadcaster in 0u64..1_000_000,
            prover in 0u64..1_000_000,
            executor in 0u64..1_000_000,
            delta in 1u64..1_000,
        ) {
            let mut h = harness();
            let tips = Tips::new(notary.into(), broadcaster.into(), prover.into(), executor.into());

            let underpaid = xdm_03_origin::DispatchRequest {
                amount_paid: tips.total() + U256::from(delta),
                ..paid_request(REPORTER, tips)
            };
            let is_mismatch = matches!(
                h.origin.dispatch(underpaid),
                Err(OriginError::TipsMismatch { .. })
            );
            prop_assert!(is_mismatch);
            prop_assert!(h.origin.dispatch(paid_request(REPORTER, tips)).is_ok());
        }
    }

    /// Sibling path for `index` in the tree built from `leaves`.
    fn sibling_path(leaves: &[[u8; 32]], index: usize) -> [[u8; 32]; 32] {
        let mut level: Vec<[u8; 32]> = leaves.to_vec();
        let mut proof = [[0u8; 32]; 32];
        let mut idx = index;
        for (depth, slot) in proof.iter_mut().enumerate() {
            let zero = xdm_02_merkle::zero_hash(depth);
            *slot = level.get(idx ^ 1).copied().unwrap_or(zero);
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            for pair in level.chunks(2) {
                let right = pair.get(1).copied().unwrap_or(zero);
                next.push(shared_crypto::hash_pair(&pair[0], &right));
            }
            level = next;
            idx >>= 1;
        }
        proof
    }

    #[test]
    fn test_single_initialization() {
        let mut h = harness();
        let registry = Arc::new(InMemoryNotaryRegistry::new(REGISTRY, key(2).address()));
        assert_eq!(
            h.origin.initialize(OWNER, registry).unwrap_err(),
            OriginError::AlreadyInitialized
        );
        assert_eq!(h.origin.all_notaries(), vec![h.notary.address()]);
    }

    #[test]
    fn test_forward_attestation_is_not_fraud() {
        let mut h = harness();
        h.origin.dispatch(request(REPORTER, b"one")).unwrap();

        let ahead = attest(&h.notary, LOCAL_DOMAIN, 5, [0xEE; 32]);
        assert!(!h.origin.improper_attestation(REPORTER, &ahead).unwrap());
        assert_eq!(h.origin.state(), EngineState::Active);
    }
}
