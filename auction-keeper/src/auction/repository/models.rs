#[cfg(test)]
use mockall::automock;
use {
    crate::auction::entities::{
        Auction,
        AuctionError,
        AuctionId,
        AuctionStatus,
    },
    async_trait::async_trait,
    std::fmt::Debug,
};

/// Keyed auction storage consumed by the service and the expiration sweep.
///
/// Every method takes the store lock only for the duration of the map access, so callers
/// never hold it across their own processing.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuctionStore: Debug + Send + Sync + 'static {
    /// Fails with `DuplicateKey` if the id is taken; the stored record is left as is.
    async fn add_auction(&self, auction: Auction) -> Result<Auction, AuctionError>;
    async fn get_auction_by_id(&self, auction_id: &AuctionId) -> Result<Auction, AuctionError>;
    /// Insert or overwrite.
    async fn save_auction(&self, auction: Auction);
    /// Sets the status field only and returns the previous status.
    async fn update_auction_status(
        &self,
        auction_id: &AuctionId,
        status: AuctionStatus,
    ) -> Result<AuctionStatus, AuctionError>;
    /// Snapshot of every auction at call time.
    async fn get_auctions(&self) -> Vec<Auction>;
}
