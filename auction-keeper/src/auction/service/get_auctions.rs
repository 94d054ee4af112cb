use {
    super::Service,
    crate::auction::entities,
};

#[derive(Default)]
pub struct GetAuctionsInput {
    pub status:       Option<entities::AuctionStatus>,
    pub category:     Option<String>,
    /// Case-insensitive substring match on the product name.
    pub product_name: Option<String>,
}

impl GetAuctionsInput {
    fn matches(&self, auction: &entities::Auction) -> bool {
        if let Some(status) = self.status {
            if auction.status != status {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &auction.category != category {
                return false;
            }
        }
        if let Some(product_name) = &self.product_name {
            if !auction
                .product_name
                .to_lowercase()
                .contains(&product_name.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

impl Service {
    pub async fn get_auctions(&self, input: GetAuctionsInput) -> Vec<entities::Auction> {
        self.repo
            .get_auctions()
            .await
            .into_iter()
            .filter(|auction| input.matches(auction))
            .collect()
    }
}
