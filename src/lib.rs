pub mod clock;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod schedule;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use error::{AppError, Result};
pub use models::JobRecord;
pub use pipeline::{RunOutcome, Scraper};
