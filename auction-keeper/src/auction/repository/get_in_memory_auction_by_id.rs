use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn get_in_memory_auction_by_id(
        &self,
        auction_id: &entities::AuctionId,
    ) -> Result<entities::Auction, entities::AuctionError> {
        self.in_memory_store
            .auctions
            .read()
            .await
            .get(auction_id)
            .cloned()
            .ok_or_else(|| entities::AuctionError::NotFound(auction_id.clone()))
    }
}
