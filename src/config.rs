use std::env;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveTime;

use crate::error::{AppError, Result};

pub const DEFAULT_URL: &str = "https://vacancymail.co.zw/jobs/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,/;q=0.8";

/// Header values sent with every page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    pub user_agent: String,
    pub accept_language: String,
    pub accept: String,
}

impl Default for RequestHeaders {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub output_path: PathBuf,
    pub log_path: PathBuf,
    /// `tracing` filter string, e.g. `"info"` or `"debug,reqwest=warn"`.
    pub log_level: String,
    pub daily_at: NaiveTime,
    pub poll_interval: Duration,
    pub headers: RequestHeaders,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output_path: PathBuf::from("scraped_data.csv"),
            log_path: PathBuf::from("scraper.log"),
            log_level: "info".to_string(),
            daily_at: NaiveTime::MIN,
            poll_interval: Duration::from_secs(1),
            headers: RequestHeaders::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let defaults = Config::default();

        let daily_at = match env::var("SCRAPER_DAILY_AT") {
            Ok(raw) => parse_daily_at(&raw)?,
            Err(_) => defaults.daily_at,
        };
        let poll_interval = match env::var("SCRAPER_POLL_SECS") {
            Ok(raw) => parse_poll_secs(&raw)?,
            Err(_) => defaults.poll_interval,
        };

        Ok(Config {
            url: env_or("SCRAPER_URL", &defaults.url),
            output_path: env::var("SCRAPER_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            log_path: env::var("SCRAPER_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
            log_level: env_or("SCRAPER_LOG", &defaults.log_level),
            daily_at,
            poll_interval,
            headers: RequestHeaders {
                user_agent: env_or("SCRAPER_USER_AGENT", DEFAULT_USER_AGENT),
                accept_language: env_or("SCRAPER_ACCEPT_LANGUAGE", DEFAULT_ACCEPT_LANGUAGE),
                accept: env_or("SCRAPER_ACCEPT", DEFAULT_ACCEPT),
            },
        })
    }
}

/// Parses a wall-clock trigger time written as `HH:MM`.
pub fn parse_daily_at(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|e| AppError::Config(format!("Invalid daily trigger time '{}': {}", raw, e)))
}

pub fn parse_poll_secs(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid poll interval: {}", e)))?;
    if secs == 0 {
        return Err(AppError::Config("Poll interval must be at least one second".to_string()));
    }
    Ok(Duration::from_secs(secs))
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
