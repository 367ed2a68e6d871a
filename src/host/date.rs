//! UTC dates
//!
//! Months are 0-indexed to match the host convention; everything else
//! follows the calendar. Instants beyond chrono's year range are rejected
//! even when they fall inside [`MAX_TIME_MS`].

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use crate::error::HostError;

/// Largest distance from the epoch a host date may hold, in milliseconds
pub const MAX_TIME_MS: i64 = 8_640_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct JsDate {
    inner: DateTime<Utc>,
}

impl JsDate {
    pub fn now() -> Self {
        JsDate { inner: Utc::now() }
    }

    /// Date at `ms` milliseconds after the Unix epoch
    pub fn from_millis(ms: i64) -> Result<Self, HostError> {
        if !(-MAX_TIME_MS..=MAX_TIME_MS).contains(&ms) {
            return Err(HostError::invalid_date("Invalid time value"));
        }
        DateTime::from_timestamp_millis(ms)
            .map(|inner| JsDate { inner })
            .ok_or_else(|| HostError::invalid_date("Invalid time value"))
    }

    /// Date from UTC calendar fields. `month` is 0-indexed.
    pub fn utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, HostError> {
        // chrono reads 1000..=1999 ms as a leap second
        if second > 59 || millisecond > 999 {
            return Err(HostError::invalid_date(format!(
                "Invalid time fields: {hour}:{minute}:{second}.{millisecond}"
            )));
        }
        month
            .checked_add(1)
            .and_then(|m| NaiveDate::from_ymd_opt(year, m, day))
            .and_then(|d| d.and_hms_milli_opt(hour, minute, second, millisecond))
            .map(|naive| JsDate {
                inner: naive.and_utc(),
            })
            .ok_or_else(|| {
                HostError::invalid_date(format!(
                    "Invalid date fields: {year}-{month}-{day} {hour}:{minute}:{second}.{millisecond}"
                ))
            })
    }

    pub fn full_year(&self) -> i32 {
        self.inner.year()
    }

    /// 0-indexed month
    pub fn month(&self) -> u32 {
        self.inner.month0()
    }

    /// Day of the month
    pub fn date(&self) -> u32 {
        self.inner.day()
    }

    pub fn hours(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minutes(&self) -> u32 {
        self.inner.minute()
    }

    pub fn seconds(&self) -> u32 {
        self.inner.second()
    }

    pub fn milliseconds(&self) -> u32 {
        self.inner.timestamp_subsec_millis()
    }

    /// Milliseconds since the Unix epoch
    pub fn time(&self) -> i64 {
        self.inner.timestamp_millis()
    }
}

impl fmt::Display for JsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.inner
                .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
        )
    }
}
