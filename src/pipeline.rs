use tracing::{info, warn};

use crate::clock::Clock;
use crate::error::Result;
use crate::extract::extract_jobs;
use crate::fetch::Fetch;
use crate::store::CsvStore;

/// What a single scrape produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    FetchFailed,
    NoListings,
    Saved(usize),
}

/// One fetch, extract and persist pass over the listings page.
pub struct Scraper<F, C> {
    fetcher: F,
    store: CsvStore,
    clock: C,
    url: String,
}

impl<F: Fetch, C: Clock> Scraper<F, C> {
    pub fn new(fetcher: F, store: CsvStore, clock: C, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            store,
            clock,
            url: url.into(),
        }
    }

    pub fn store(&self) -> &CsvStore {
        &self.store
    }

    /// Runs the pipeline once.
    ///
    /// Fetch and extraction problems are logged and reported through the
    /// outcome. Only a failure to write the output file is returned as an
    /// error.
    pub async fn run_once(&self) -> Result<RunOutcome> {
        info!("Scraping started");

        let outcome = match self.fetcher.fetch(&self.url).await {
            Ok(html) => {
                let jobs = extract_jobs(&html, &self.clock);
                if jobs.is_empty() {
                    warn!("No job data found");
                    RunOutcome::NoListings
                } else {
                    RunOutcome::Saved(self.store.append(&jobs)?)
                }
            }
            Err(_) => {
                warn!("Failed to retrieve the webpage");
                RunOutcome::FetchFailed
            }
        };

        info!("Scraping completed");
        Ok(outcome)
    }
}
