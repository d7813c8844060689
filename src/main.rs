use tracing::info;
use vacancy_scraper::{
    config::Config,
    fetch::HttpFetcher,
    logging,
    schedule::Scheduler,
    store::CsvStore,
    Scraper, SystemClock,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    // Flushes the log file when dropped at the end of main
    let _log_guard = logging::init(&config.log_path, &config.log_level)?;
    info!("Starting job scraper for {}", config.url);

    let fetcher = HttpFetcher::new(&config.headers)?;
    let store = CsvStore::new(&config.output_path);
    let scraper = Scraper::new(fetcher, store, SystemClock, config.url.clone());
    info!("Writing listings to {}", scraper.store().path().display());

    Scheduler::new(config.daily_at, config.poll_interval)
        .run_until(&scraper, &SystemClock, shutdown_signal())
        .await;

    info!("Job scraper stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
