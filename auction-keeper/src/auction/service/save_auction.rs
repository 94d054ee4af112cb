use {
    super::Service,
    crate::auction::entities,
};

pub struct SaveAuctionInput {
    pub auction: entities::Auction,
}

impl Service {
    pub async fn save_auction(&self, input: SaveAuctionInput) {
        tracing::debug!(auction_id = %input.auction.id, status = %input.auction.status, "Saving auction");
        self.repo.save_auction(input.auction).await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::service::{
            get_auction_by_id::GetAuctionByIdInput,
            tests::make_auction,
        },
        time::macros::datetime,
    };

    #[tokio::test]
    async fn test_save_auction_upserts() {
        let service = Service::new_in_memory();
        let creation_time = datetime!(2024-01-01 0:00 UTC);
        service
            .save_auction(SaveAuctionInput {
                auction: make_auction("a1", entities::AuctionStatus::Active, creation_time),
            })
            .await;
        service
            .save_auction(SaveAuctionInput {
                auction: make_auction("a1", entities::AuctionStatus::Completed, creation_time),
            })
            .await;

        let stored = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: "a1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(stored.status, entities::AuctionStatus::Completed);
    }
}
