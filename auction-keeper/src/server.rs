use {
    crate::{
        auction::{
            repository::Repository,
            service::{
                save_auction::SaveAuctionInput,
                Service,
            },
        },
        config::{
            Config,
            RunOptions,
        },
    },
    anyhow::anyhow,
    std::{
        future::Future,
        sync::atomic::{
            AtomicBool,
            Ordering,
        },
        time::Duration,
    },
    time::OffsetDateTime,
    tokio_util::{
        sync::CancellationToken,
        task::TaskTracker,
    },
};

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    let cancellation_token = CancellationToken::new();
    tokio::spawn(handle_shutdown_signal(
        tokio::signal::ctrl_c(),
        cancellation_token.clone(),
    ));

    let config = Config::load(&run_options.config.config).map_err(|err| {
        anyhow!(
            "Failed to load config from file({path}): {:?}",
            err,
            path = run_options.config.config
        )
    })?;

    let service = Service::new(Repository::new());
    seed_auctions(&service, &config).await;

    let task_tracker = TaskTracker::new();
    task_tracker.spawn({
        let service = service.clone();
        let sweeper = config.sweeper.clone();
        let cancellation_token = cancellation_token.clone();
        async move {
            if let Err(err) = service
                .run_expiration_loop(
                    sweeper.sweep_interval,
                    sweeper.expiration_window,
                    cancellation_token,
                )
                .await
            {
                tracing::error!(error = ?err, "Auction expiration sweeper failed");
            }
        }
    });
    task_tracker.close();
    task_tracker.wait().await;
    Ok(())
}

/// Raises the exit flag and cancels the token once `signal` fires. If listening for the signal
/// fails nothing is cancelled.
async fn handle_shutdown_signal(
    signal: impl Future<Output = std::io::Result<()>>,
    cancellation_token: CancellationToken,
) {
    tracing::info!("Registered shutdown signal handler...");
    if let Err(err) = signal.await {
        tracing::error!(error = ?err, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shut down signal received, waiting for tasks...");
    SHOULD_EXIT.store(true, Ordering::Release);
    cancellation_token.cancel();
}

async fn seed_auctions(service: &Service, config: &Config) {
    let now = OffsetDateTime::now_utc();
    for seed in config.auctions.iter().cloned() {
        service
            .save_auction(SaveAuctionInput {
                auction: seed.into_auction(now),
            })
            .await;
    }
    if !config.auctions.is_empty() {
        tracing::info!(count = config.auctions.len(), "Seeded auctions from config");
    }
}

// A static exit flag to indicate to running tasks that we're shutting down. The cancellation token
// handed to the sweeper interrupts a sweep that is already running; this flag stops the loops.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_signal_listener_does_not_cancel() {
        let cancellation_token = CancellationToken::new();
        handle_shutdown_signal(
            async { Err(std::io::Error::other("signal handler unavailable")) },
            cancellation_token.clone(),
        )
        .await;

        assert!(!cancellation_token.is_cancelled());
        assert!(!SHOULD_EXIT.load(Ordering::Acquire));
    }
}
