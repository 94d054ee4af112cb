use {
    super::Service,
    crate::auction::entities,
};

pub struct ConcludeAuctionInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Closes an auction ahead of its expiration. Closing a completed auction is a no-op.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id))]
    pub async fn conclude_auction(
        &self,
        input: ConcludeAuctionInput,
    ) -> Result<(), entities::AuctionError> {
        let previous = self
            .repo
            .update_auction_status(&input.auction_id, entities::AuctionStatus::Completed)
            .await?;
        if previous.is_active() {
            tracing::info!("Auction concluded");
        }
        Ok(())
    }
}
