use {
    super::Service,
    crate::auction::entities,
    std::time::Duration,
    time::OffsetDateTime,
    tokio_util::sync::CancellationToken,
};

pub struct SweepExpiredAuctionsInput {
    pub now:                OffsetDateTime,
    pub expiration_window:  Duration,
    pub cancellation_token: CancellationToken,
}

impl Service {
    /// Completes every active auction whose age has reached the expiration window.
    ///
    /// Works on a snapshot of the store, so concurrent creates and lookups are only blocked
    /// while the snapshot is copied. A failed update is recorded in the report and the sweep
    /// moves on to the next auction. On cancellation the sweep stops before the next auction
    /// and keeps whatever it already completed.
    #[tracing::instrument(skip_all, fields(now = %input.now, closed, failed, cancelled))]
    pub async fn sweep_expired_auctions(
        &self,
        input: SweepExpiredAuctionsInput,
    ) -> entities::SweepReport {
        let mut report = entities::SweepReport::default();
        let auctions = self.repo.get_auctions().await;

        for auction in auctions {
            if input.cancellation_token.is_cancelled() {
                report.cancelled = true;
                break;
            }

            match auction.status {
                entities::AuctionStatus::Completed => continue,
                entities::AuctionStatus::Active => {
                    if !auction.is_expired(input.now, input.expiration_window) {
                        continue;
                    }
                }
            }

            match self
                .repo
                .update_auction_status(&auction.id, entities::AuctionStatus::Completed)
                .await
            {
                Ok(entities::AuctionStatus::Active) => {
                    tracing::debug!(auction_id = %auction.id, "Auction expired");
                    report.closed.push(auction.id);
                }
                Ok(entities::AuctionStatus::Completed) => {
                    tracing::debug!(auction_id = %auction.id, "Auction already completed");
                }
                Err(error) => {
                    tracing::warn!(auction_id = %auction.id, error = %error, "Failed to complete expired auction");
                    report.failures.push(entities::SweepFailure {
                        auction_id: auction.id,
                        error,
                    });
                }
            }
        }

        let span = tracing::Span::current();
        span.record("closed", report.closed_count());
        span.record("failed", report.failures.len());
        span.record("cancelled", report.cancelled);
        if report.cancelled {
            tracing::info!(
                closed = report.closed_count(),
                "Sweep cancelled before visiting every auction"
            );
        }
        report
    }
}
