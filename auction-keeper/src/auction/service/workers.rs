use {
    super::{
        sweep_expired_auctions::SweepExpiredAuctionsInput,
        Service,
    },
    crate::server::{
        EXIT_CHECK_INTERVAL,
        SHOULD_EXIT,
    },
    std::{
        sync::atomic::Ordering,
        time::Duration,
    },
    time::OffsetDateTime,
    tokio_util::sync::CancellationToken,
};

impl Service {
    pub async fn run_expiration_loop(
        &self,
        sweep_interval: Duration,
        expiration_window: Duration,
        cancellation_token: CancellationToken,
    ) -> anyhow::Result<()> {
        if sweep_interval.is_zero() {
            return Err(anyhow::anyhow!("Sweep interval must be greater than zero"));
        }
        tracing::info!(
            sweep_interval = ?sweep_interval,
            expiration_window = ?expiration_window,
            "Starting auction expiration sweeper..."
        );
        let mut exit_check_interval = tokio::time::interval(EXIT_CHECK_INTERVAL);
        let mut sweep_interval = tokio::time::interval(sweep_interval);

        while !SHOULD_EXIT.load(Ordering::Acquire) && !cancellation_token.is_cancelled() {
            tokio::select! {
                _ = sweep_interval.tick() => {
                    let report = self
                        .sweep_expired_auctions(SweepExpiredAuctionsInput {
                            now:                OffsetDateTime::now_utc(),
                            expiration_window,
                            cancellation_token: cancellation_token.clone(),
                        })
                        .await;
                    if report.is_partial_failure() {
                        tracing::warn!(
                            closed = report.closed_count(),
                            failed = report.failures.len(),
                            "Expiration sweep finished with failures"
                        );
                    } else if report.closed_count() > 0 {
                        tracing::info!(closed = report.closed_count(), "Closed expired auctions");
                    }
                }
                _ = exit_check_interval.tick() => {}
                _ = cancellation_token.cancelled() => {}
            }
        }
        tracing::info!("Shutting down auction expiration sweeper...");
        Ok(())
    }
}
