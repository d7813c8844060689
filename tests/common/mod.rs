#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use vacancy_scraper::fetch::Fetch;
use vacancy_scraper::{AppError, Clock, Result};

pub fn fresh_path(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vacancy-scraper-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{test}.csv"));
    let _ = fs::remove_file(&path);
    path
}

pub fn listing(title: &str, company: &str, description: &str) -> String {
    format!(
        r#"<div class="job-listing-details">
             <h3 class="job-listing-title">{title}</h3>
             <h4 class="job-listing-company">{company}</h4>
             <p class="job-listing-text">{description}</p>
           </div>"#
    )
}

pub fn listings_page(count: usize) -> String {
    let blocks: String = (0..count)
        .map(|i| listing(&format!("Accountant {i}"), "Old Mutual", "Harare, full time"))
        .collect();
    format!("<html><body><section class=\"jobs\">{blocks}</section></body></html>")
}

pub fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 5, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Clock that moves forward one hour every time it is read.
pub struct SteppingClock(Cell<NaiveDateTime>);

impl SteppingClock {
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self(Cell::new(start))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        let now = self.0.get();
        self.0.set(now + chrono::Duration::hours(1));
        now
    }
}

/// Serves a canned page (or a transport failure) and counts requests.
pub struct CannedPage {
    html: Option<String>,
    pub calls: Cell<usize>,
}

impl CannedPage {
    pub fn serving(html: String) -> Self {
        Self {
            html: Some(html),
            calls: Cell::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            html: None,
            calls: Cell::new(0),
        }
    }
}

impl CannedPage {
    fn respond(&self) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        self.html
            .clone()
            .ok_or_else(|| AppError::Fetch("connection refused".to_string()))
    }
}

impl Fetch for CannedPage {
    async fn fetch(&self, _url: &str) -> Result<String> {
        self.respond()
    }
}

/// Lets a test keep the page to inspect `calls` after the scraper is done.
impl Fetch for &CannedPage {
    async fn fetch(&self, _url: &str) -> Result<String> {
        self.respond()
    }
}
