//! Daily scheduling of the scrape pipeline.
//!
//! The pipeline runs once at startup, then every day at a fixed local time.
//! Between runs the loop wakes on a short poll interval and asks a
//! [`DailyTrigger`] whether the time has come, so a trigger may fire up to
//! one interval late. Runs never overlap: each one is awaited before the next
//! check.

use std::future::Future;
use std::time::Duration;

use chrono::{Days, NaiveDateTime, NaiveTime};
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use crate::clock::Clock;
use crate::fetch::Fetch;
use crate::pipeline::Scraper;

/// Fires once per day at a fixed wall-clock time.
#[derive(Debug, Clone)]
pub struct DailyTrigger {
    at: NaiveTime,
    next_run: NaiveDateTime,
}

impl DailyTrigger {
    pub fn new(at: NaiveTime, now: NaiveDateTime) -> Self {
        Self {
            at,
            next_run: next_occurrence(at, now),
        }
    }

    pub fn next_run(&self) -> NaiveDateTime {
        self.next_run
    }

    /// Returns `true` when the trigger is due at `now`, and schedules the
    /// following occurrence. A trigger missed by more than a day fires once.
    pub fn poll(&mut self, now: NaiveDateTime) -> bool {
        if now < self.next_run {
            return false;
        }
        self.next_run = next_occurrence(self.at, now);
        true
    }
}

/// First instant at `at` strictly after `now`.
fn next_occurrence(at: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date().and_time(at);
    if today > now {
        today
    } else {
        today
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDateTime::MAX)
    }
}

pub struct Scheduler {
    daily_at: NaiveTime,
    poll_interval: Duration,
}

impl Scheduler {
    pub fn new(daily_at: NaiveTime, poll_interval: Duration) -> Self {
        Self {
            daily_at,
            poll_interval,
        }
    }

    /// Runs the scraper immediately, then daily, until `shutdown` resolves.
    ///
    /// A failed run is logged and the loop carries on with the next trigger.
    /// Shutdown is only observed between runs.
    pub async fn run_until<F, C, S>(&self, scraper: &Scraper<F, C>, clock: &impl Clock, shutdown: S)
    where
        F: Fetch,
        C: Clock,
        S: Future<Output = ()>,
    {
        run_logged(scraper).await;

        let mut trigger = DailyTrigger::new(self.daily_at, clock.now());
        info!("Next scrape scheduled for {}", trigger.next_run());

        let mut ticker = time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        ticker.tick().await;

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping scheduler");
                    return;
                }
                _ = ticker.tick() => {
                    if trigger.poll(clock.now()) {
                        run_logged(scraper).await;
                        info!("Next scrape scheduled for {}", trigger.next_run());
                    }
                }
            }
        }
    }
}

async fn run_logged<F: Fetch, C: Clock>(scraper: &Scraper<F, C>) {
    if let Err(err) = scraper.run_once().await {
        error!("Scrape run failed: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn midnight() -> NaiveTime {
        NaiveTime::MIN
    }

    #[test]
    fn first_run_is_the_next_midnight() {
        let trigger = DailyTrigger::new(midnight(), at(10, 15, 30, 0));
        assert_eq!(trigger.next_run(), at(11, 0, 0, 0));
    }

    #[test]
    fn starting_exactly_at_trigger_time_waits_a_day() {
        let trigger = DailyTrigger::new(midnight(), at(10, 0, 0, 0));
        assert_eq!(trigger.next_run(), at(11, 0, 0, 0));
    }

    #[test]
    fn later_trigger_time_fires_same_day() {
        let six = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
        let trigger = DailyTrigger::new(six, at(10, 1, 0, 0));
        assert_eq!(trigger.next_run(), at(10, 6, 0, 0));
    }

    #[test]
    fn fires_once_when_time_is_reached() {
        let mut trigger = DailyTrigger::new(midnight(), at(10, 23, 59, 58));

        assert!(!trigger.poll(at(10, 23, 59, 59)));
        assert!(trigger.poll(at(11, 0, 0, 0)));
        assert!(!trigger.poll(at(11, 0, 0, 1)));
        assert!(!trigger.poll(at(11, 23, 59, 59)));
        assert!(trigger.poll(at(12, 0, 0, 1)));
        assert_eq!(trigger.next_run(), at(13, 0, 0, 0));
    }

    #[test]
    fn late_poll_fires_once_without_catching_up() {
        let mut trigger = DailyTrigger::new(midnight(), at(10, 12, 0, 0));

        assert!(trigger.poll(at(14, 3, 0, 0)));
        assert!(!trigger.poll(at(14, 3, 0, 1)));
        assert_eq!(trigger.next_run(), at(15, 0, 0, 0));
    }
}
