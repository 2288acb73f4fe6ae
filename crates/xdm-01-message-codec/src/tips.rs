//! # Tips
//!
//! Byte 0 is the tips format version, followed by four 12-byte big-endian
//! amounts: notary, broadcaster, prover, executor. The origin only ever
//! needs their sum; the rest of the blob is echoed verbatim.

use crate::errors::{CodecError, CodecResult};
use crate::view::{TypedView, ViewType};
use serde::{Deserialize, Serialize};
use shared_types::U256;

/// Tips format version written by [`Tips::encode`].
pub const TIPS_VERSION: u8 = 1;

/// Width of each tip amount.
pub const TIP_WIDTH: usize = 12;

/// Minimum tips length: version byte plus four amounts.
pub const TIPS_LENGTH: usize = 1 + 4 * TIP_WIDTH;

const OFFSET_VERSION: usize = 0;
const OFFSET_NOTARY: usize = 1;
const OFFSET_BROADCASTER: usize = OFFSET_NOTARY + TIP_WIDTH;
const OFFSET_PROVER: usize = OFFSET_BROADCASTER + TIP_WIDTH;
const OFFSET_EXECUTOR: usize = OFFSET_PROVER + TIP_WIDTH;

const MAX_TIP: u128 = (1u128 << 96) - 1;

/// Decoded tips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tips {
    /// Tips format version.
    pub version: u8,
    /// Tip for the Notary.
    pub notary: u128,
    /// Tip for the broadcaster.
    pub broadcaster: u128,
    /// Tip for the prover.
    pub prover: u128,
    /// Tip for the executor.
    pub executor: u128,
}

impl Tips {
    /// Tips with the current version and the given amounts.
    pub fn new(notary: u128, broadcaster: u128, prover: u128, executor: u128) -> Self {
        Self {
            version: TIPS_VERSION,
            notary,
            broadcaster,
            prover,
            executor,
        }
    }

    /// Sum of the four amounts.
    pub fn total(&self) -> U256 {
        [self.notary, self.broadcaster, self.prover, self.executor]
            .iter()
            .fold(U256::zero(), |acc, tip| acc + U256::from(*tip))
    }

    /// Serialize to the 49-byte layout. Each amount must fit in 96 bits.
    pub fn encode(&self) -> CodecResult<Vec<u8>> {
        let mut out = Vec::with_capacity(TIPS_LENGTH);
        out.push(self.version);
        for tip in [self.notary, self.broadcaster, self.prover, self.executor] {
            if tip > MAX_TIP {
                return Err(CodecError::TipOverflow(tip));
            }
            out.extend_from_slice(&tip.to_be_bytes()[16 - TIP_WIDTH..]);
        }
        Ok(out)
    }

    /// Parse tips bytes (at least 49).
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let view = TipsView::new(bytes)?;
        Ok(Self {
            version: view.version()?,
            notary: view.notary_tip()?,
            broadcaster: view.broadcaster_tip()?,
            prover: view.prover_tip()?,
            executor: view.executor_tip()?,
        })
    }
}

/// Typed view over tips bytes.
#[derive(Clone, Copy, Debug)]
pub struct TipsView<'a> {
    view: TypedView<'a>,
}

impl<'a> TipsView<'a> {
    /// Wrap raw bytes, checking the minimum length.
    pub fn new(bytes: &'a [u8]) -> CodecResult<Self> {
        Self::from_view(TypedView::new(bytes, ViewType::Tips))
    }

    /// Wrap an existing `Tips`-tagged view.
    pub fn from_view(view: TypedView<'a>) -> CodecResult<Self> {
        let view = view.assert_type(ViewType::Tips)?;
        if view.len() < TIPS_LENGTH {
            return Err(CodecError::NotTips { len: view.len() });
        }
        Ok(Self { view })
    }

    /// Underlying view.
    pub fn view(&self) -> TypedView<'a> {
        self.view
    }

    /// Tips format version.
    pub fn version(&self) -> CodecResult<u8> {
        Ok(self.view.index_u8(OFFSET_VERSION)?)
    }

    /// Notary tip.
    pub fn notary_tip(&self) -> CodecResult<u128> {
        Ok(self.view.index_u128(OFFSET_NOTARY, TIP_WIDTH)?)
    }

    /// Broadcaster tip.
    pub fn broadcaster_tip(&self) -> CodecResult<u128> {
        Ok(self.view.index_u128(OFFSET_BROADCASTER, TIP_WIDTH)?)
    }

    /// Prover tip.
    pub fn prover_tip(&self) -> CodecResult<u128> {
        Ok(self.view.index_u128(OFFSET_PROVER, TIP_WIDTH)?)
    }

    /// Executor tip.
    pub fn executor_tip(&self) -> CodecResult<u128> {
        Ok(self.view.index_u128(OFFSET_EXECUTOR, TIP_WIDTH)?)
    }

    /// Sum of the four amounts.
    pub fn total_tips(&self) -> CodecResult<U256> {
        let total = [
            self.notary_tip()?,
            self.broadcaster_tip()?,
            self.prover_tip()?,
            self.executor_tip()?,
        ]
        .iter()
        .fold(U256::zero(), |acc, tip| acc + U256::from(*tip));
        Ok(total)
    }
}

/// Sum of the four tip amounts in a tips blob.
pub fn total_tips(tips: &[u8]) -> CodecResult<U256> {
    TipsView::new(tips)?.total_tips()
}
