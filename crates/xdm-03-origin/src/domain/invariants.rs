//! # Domain Invariants
//!
//! Checks that hold after every committed write. The service asserts them in
//! debug builds; the test suite calls them directly.

use super::errors::{OriginError, OriginResult};
use super::state::OriginState;
use super::value_objects::EngineState;
use shared_types::U256;
use xdm_01_message_codec::MAX_MESSAGE_BODY_BYTES;

/// `len(H) = count + 1` and `H[count] = root`. Holds only once initialized.
pub fn invariant_history_tracks_tree(state: &OriginState) -> bool {
    let count = state.tree.count();
    state.historical_roots.len() as u64 == count + 1
        && state.historical_roots.last() == Some(&state.tree.root())
}

/// The last assigned nonce equals the leaf count.
pub fn invariant_nonce_matches_count(state: &OriginState) -> bool {
    u64::from(state.nonce) == state.tree.count()
}

/// A Failed engine never returns to Active.
pub fn invariant_failed_is_absorbing(before: EngineState, after: EngineState) -> bool {
    before != EngineState::Failed || after == EngineState::Failed
}

/// Body must fit the maximum length.
pub fn invariant_body_length(body: &[u8]) -> OriginResult<()> {
    if body.len() > MAX_MESSAGE_BODY_BYTES {
        return Err(OriginError::BodyTooLong {
            len: body.len(),
            max: MAX_MESSAGE_BODY_BYTES,
        });
    }
    Ok(())
}

/// Tips must add up to exactly the amount paid.
pub fn invariant_tips_cover_payment(total: U256, paid: U256) -> OriginResult<()> {
    if total != paid {
        return Err(OriginError::TipsMismatch { total, paid });
    }
    Ok(())
}
