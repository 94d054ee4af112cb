use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Point-in-time copy. The lock is released before the caller sees the result.
    pub async fn get_in_memory_auctions(&self) -> Vec<entities::Auction> {
        self.in_memory_store
            .auctions
            .read()
            .await
            .values()
            .cloned()
            .collect()
    }
}
