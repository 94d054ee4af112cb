use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Returns the status the auction held before the update.
    #[tracing::instrument(skip_all, fields(auction_id = %auction_id, status = %status))]
    pub async fn update_in_memory_auction_status(
        &self,
        auction_id: &entities::AuctionId,
        status: entities::AuctionStatus,
    ) -> Result<entities::AuctionStatus, entities::AuctionError> {
        let mut auctions = self.in_memory_store.auctions.write().await;
        let auction = auctions
            .get_mut(auction_id)
            .ok_or_else(|| entities::AuctionError::NotFound(auction_id.clone()))?;

        let previous = auction.status;
        if !previous.can_transition_to(status) {
            return Err(entities::AuctionError::InvalidStatusTransition {
                id:   auction_id.clone(),
                from: previous,
                to:   status,
            });
        }
        auction.status = status;
        Ok(previous)
    }
}
