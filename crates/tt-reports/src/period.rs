//! Report period filters
//!
//! Logs are bucketed by the start of the current day, week, month, or
//! year in UTC. Weeks start on Monday. A log belongs to a period when
//! its `start_time` falls at or after the period's start.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use tt_models::TimeLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    /// Epoch milliseconds of the period start, `None` for `All`
    pub fn since_millis(&self, now: DateTime<Utc>) -> Option<i64> {
        let today = now.date_naive();
        let start: NaiveDate = match self {
            Period::All => return None,
            Period::Day => today,
            Period::Week => today - Duration::days(today.weekday().num_days_from_monday() as i64),
            Period::Month => today.with_day(1)?,
            Period::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
        };
        Some(
            start
                .and_hms_opt(0, 0, 0)?
                .and_utc()
                .timestamp_millis(),
        )
    }

    /// Keep the logs whose open interval started within the period
    pub fn filter_logs(&self, logs: &[TimeLog], now: DateTime<Utc>) -> Vec<TimeLog> {
        match self.since_millis(now) {
            None => logs.to_vec(),
            Some(since) => logs
                .iter()
                .filter(|l| l.start_time >= since)
                .cloned()
                .collect(),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Period::All),
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(format!("unknown period: {other}")),
        }
    }
}
