use once_cell::sync::OnceCell;
use scraper::{ElementRef, Html, Selector};
use tracing::error;

use crate::clock::Clock;
use crate::error::{AppError, Result};
use crate::models::{JobRecord, SCRAPED_AT_FORMAT};

/// Most listing blocks examined per run.
pub const MAX_LISTINGS: usize = 10;

const LISTING: &str = "div.job-listing-details";
const TITLE: &str = "h3.job-listing-title";
const COMPANY: &str = "h4.job-listing-company";
const DESCRIPTION: &str = "p.job-listing-text";

struct ListingSelectors {
    listing: Selector,
    title: Selector,
    company: Selector,
    description: Selector,
}

impl ListingSelectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            listing: selector(LISTING)?,
            title: selector(TITLE)?,
            company: selector(COMPANY)?,
            description: selector(DESCRIPTION)?,
        })
    }
}

// Compiled once, on the first successful extraction
static SELECTORS: OnceCell<ListingSelectors> = OnceCell::new();

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| AppError::Parse(format!("invalid selector '{}': {}", css, e)))
}

/// Extracts up to [`MAX_LISTINGS`] job records from a listings page.
///
/// If the page cannot be walked at all, the error is logged and an empty
/// batch is returned.
pub fn extract_jobs(html: &str, clock: &impl Clock) -> Vec<JobRecord> {
    match try_extract(html, clock) {
        Ok(jobs) => jobs,
        Err(err) => {
            error!("{}", err);
            Vec::new()
        }
    }
}

fn try_extract(html: &str, clock: &impl Clock) -> Result<Vec<JobRecord>> {
    let selectors = SELECTORS.get_or_try_init(ListingSelectors::compile)?;
    let document = Html::parse_document(html);

    let jobs = document
        .select(&selectors.listing)
        .take(MAX_LISTINGS)
        .map(|block| parse_listing(block, selectors, clock))
        .collect();

    Ok(jobs)
}

/// Each field is looked up on its own; a block missing all of them still
/// yields a record of placeholders.
fn parse_listing(
    block: ElementRef<'_>,
    selectors: &ListingSelectors,
    clock: &impl Clock,
) -> JobRecord {
    let title = first_text(block, &selectors.title);
    let company = first_text(block, &selectors.company);
    let description = first_text(block, &selectors.description);

    let scraped_at = clock.now().format(SCRAPED_AT_FORMAT).to_string();
    JobRecord::from_fields(title, company, description, scraped_at)
}

fn first_text(block: ElementRef<'_>, selector: &Selector) -> Option<String> {
    block
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}
