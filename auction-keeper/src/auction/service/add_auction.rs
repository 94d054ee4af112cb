use {
    super::Service,
    crate::auction::entities,
    time::OffsetDateTime,
};

pub struct AddAuctionInput {
    pub auction: entities::AuctionCreate,
}

impl Service {
    pub async fn add_auction(
        &self,
        input: AddAuctionInput,
    ) -> Result<entities::Auction, entities::AuctionError> {
        input.auction.validate().map_err(|reason| {
            tracing::warn!(reason = %reason, "Rejected invalid auction");
            entities::AuctionError::InvalidAuction(reason)
        })?;

        let auction = entities::Auction::new(input.auction, OffsetDateTime::now_utc());
        let auction = self.repo.add_auction(auction).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to add auction");
            e
        })?;
        tracing::info!(auction_id = %auction.id, "Auction created");
        Ok(auction)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::service::{
            get_auction_by_id::GetAuctionByIdInput,
            tests::make_auction_create,
        },
        futures::future::join_all,
    };

    #[tokio::test]
    async fn test_add_auction() {
        let service = Service::new_in_memory();
        let before = OffsetDateTime::now_utc();

        let auction = service
            .add_auction(AddAuctionInput {
                auction: make_auction_create("test_auction"),
            })
            .await
            .unwrap();

        assert_eq!(auction.status, entities::AuctionStatus::Active);
        assert!(auction.creation_time >= before);

        let found = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: "test_auction".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(found, auction);
        assert_eq!(found.product_name, "Test Product");
    }

    #[tokio::test]
    async fn test_add_auction_duplicate() {
        let service = Service::new_in_memory();
        let original = service
            .add_auction(AddAuctionInput {
                auction: make_auction_create("a1"),
            })
            .await
            .unwrap();

        let mut duplicate = make_auction_create("a1");
        duplicate.product_name = "Another Product".to_string();
        let result = service
            .add_auction(AddAuctionInput { auction: duplicate })
            .await;

        assert_eq!(
            result,
            Err(entities::AuctionError::DuplicateKey("a1".to_string()))
        );
        let stored = service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: "a1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(stored, original);
    }

    #[tokio::test]
    async fn test_add_auction_invalid() {
        let service = Service::new_in_memory();
        let mut create = make_auction_create("a1");
        create.category = "x".to_string();

        let result = service.add_auction(AddAuctionInput { auction: create }).await;
        assert!(matches!(
            result,
            Err(entities::AuctionError::InvalidAuction(_))
        ));
        assert!(service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: "a1".to_string(),
            })
            .await
            .is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_add_auction() {
        let service = Service::new_in_memory();
        let handles = (0..50).map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .add_auction(AddAuctionInput {
                        auction: make_auction_create(&format!("auction-{}", i)),
                    })
                    .await
            })
        });
        for result in join_all(handles).await {
            assert!(result.unwrap().is_ok());
        }

        for i in 0..50 {
            let auction_id = format!("auction-{}", i);
            let found = service
                .get_auction_by_id(GetAuctionByIdInput {
                    auction_id: auction_id.clone(),
                })
                .await
                .unwrap();
            assert_eq!(found.id, auction_id);
        }
    }
}
