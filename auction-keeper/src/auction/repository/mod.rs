use {
    super::entities,
    async_trait::async_trait,
    std::collections::HashMap,
    tokio::sync::RwLock,
};

mod add_auction;
mod get_in_memory_auction_by_id;
mod get_in_memory_auctions;
mod models;
mod save_auction;
mod update_auction_status;

pub use models::*;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub auctions: RwLock<HashMap<entities::AuctionId, entities::Auction>>,
}

#[derive(Debug, Default)]
pub struct Repository {
    in_memory_store: InMemoryStore,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuctionStore for Repository {
    async fn add_auction(
        &self,
        auction: entities::Auction,
    ) -> Result<entities::Auction, entities::AuctionError> {
        self.add_in_memory_auction(auction).await
    }

    async fn get_auction_by_id(
        &self,
        auction_id: &entities::AuctionId,
    ) -> Result<entities::Auction, entities::AuctionError> {
        self.get_in_memory_auction_by_id(auction_id).await
    }

    async fn save_auction(&self, auction: entities::Auction) {
        self.save_in_memory_auction(auction).await
    }

    async fn update_auction_status(
        &self,
        auction_id: &entities::AuctionId,
        status: entities::AuctionStatus,
    ) -> Result<entities::AuctionStatus, entities::AuctionError> {
        self.update_in_memory_auction_status(auction_id, status)
            .await
    }

    async fn get_auctions(&self) -> Vec<entities::Auction> {
        self.get_in_memory_auctions().await
    }
}
