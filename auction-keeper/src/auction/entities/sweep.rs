use super::{
    AuctionError,
    AuctionId,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepFailure {
    pub auction_id: AuctionId,
    pub error:      AuctionError,
}

/// Outcome of one pass over the store.
///
/// `closed` only holds auctions this sweep moved from Active to Completed. Auctions that
/// another caller completed between the snapshot and the update are not listed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub closed:    Vec<AuctionId>,
    pub failures:  Vec<SweepFailure>,
    pub cancelled: bool,
}

impl SweepReport {
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    pub fn is_partial_failure(&self) -> bool {
        !self.failures.is_empty()
    }
}
