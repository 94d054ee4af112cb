use {
    super::repository::AuctionStore,
    std::sync::Arc,
};

pub mod add_auction;
pub mod conclude_auction;
pub mod get_auction_by_id;
pub mod get_auctions;
pub mod save_auction;
pub mod sweep_expired_auctions;
pub mod workers;

pub struct ServiceInner {
    repo: Arc<dyn AuctionStore>,
}

/// Entry point for auction operations. Cloning is cheap and all clones share one store.
#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(repo: impl AuctionStore) -> Self {
        Self(Arc::new(ServiceInner {
            repo: Arc::new(repo),
        }))
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::auction::{
            entities,
            repository::Repository,
        },
        time::OffsetDateTime,
    };

    impl Service {
        pub fn new_in_memory() -> Self {
            Self::new(Repository::new())
        }
    }

    pub fn make_auction_create(id: &str) -> entities::AuctionCreate {
        entities::AuctionCreate {
            id:           Some(id.to_string()),
            product_name: "Test Product".to_string(),
            category:     "Test Category".to_string(),
            description:  "Test Description".to_string(),
            condition:    entities::AuctionCondition::New,
        }
    }

    pub fn make_auction(
        id: &str,
        status: entities::AuctionStatus,
        creation_time: OffsetDateTime,
    ) -> entities::Auction {
        entities::Auction {
            status,
            ..entities::Auction::new(make_auction_create(id), creation_time)
        }
    }
}
