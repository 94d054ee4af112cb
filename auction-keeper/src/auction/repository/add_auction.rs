use {
    super::Repository,
    crate::auction::entities,
    std::collections::hash_map::Entry,
};

impl Repository {
    pub async fn add_in_memory_auction(
        &self,
        auction: entities::Auction,
    ) -> Result<entities::Auction, entities::AuctionError> {
        let mut auctions = self.in_memory_store.auctions.write().await;
        match auctions.entry(auction.id.clone()) {
            Entry::Occupied(_) => Err(entities::AuctionError::DuplicateKey(auction.id)),
            Entry::Vacant(entry) => {
                entry.insert(auction.clone());
                Ok(auction)
            }
        }
    }
}
