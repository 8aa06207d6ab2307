// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::civil::{self, Weekday};
use jiff::tz::TimeZone;

/// How often a recurring event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    /// Every day.
    Daily,

    /// Every week.
    Weekly,

    /// Every month.
    Monthly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
        };
        f.write_str(s)
    }
}

/// Day of the week as written in a repeat rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum WeekDay {
    /// Monday
    #[serde(rename = "MO")]
    Monday,

    /// Tuesday
    #[serde(rename = "TU")]
    Tuesday,

    /// Wednesday
    #[serde(rename = "WE")]
    Wednesday,

    /// Thursday
    #[serde(rename = "TH")]
    Thursday,

    /// Friday
    #[serde(rename = "FR")]
    Friday,

    /// Saturday
    #[serde(rename = "SA")]
    Saturday,

    /// Sunday
    #[serde(rename = "SU")]
    Sunday,
}

impl WeekDay {
    /// Two-letter code, `MO` through `SU`.
    pub fn code(self) -> &'static str {
        match self {
            WeekDay::Monday => "MO",
            WeekDay::Tuesday => "TU",
            WeekDay::Wednesday => "WE",
            WeekDay::Thursday => "TH",
            WeekDay::Friday => "FR",
            WeekDay::Saturday => "SA",
            WeekDay::Sunday => "SU",
        }
    }
}

impl From<Weekday> for WeekDay {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => WeekDay::Monday,
            Weekday::Tuesday => WeekDay::Tuesday,
            Weekday::Wednesday => WeekDay::Wednesday,
            Weekday::Thursday => WeekDay::Thursday,
            Weekday::Friday => WeekDay::Friday,
            Weekday::Saturday => WeekDay::Saturday,
            Weekday::Sunday => WeekDay::Sunday,
        }
    }
}

impl From<WeekDay> for Weekday {
    fn from(value: WeekDay) -> Self {
        match value {
            WeekDay::Monday => Weekday::Monday,
            WeekDay::Tuesday => Weekday::Tuesday,
            WeekDay::Wednesday => Weekday::Wednesday,
            WeekDay::Thursday => Weekday::Thursday,
            WeekDay::Friday => Weekday::Friday,
            WeekDay::Saturday => Weekday::Saturday,
            WeekDay::Sunday => Weekday::Sunday,
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A repeat specification.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,

    /// Repeat every `interval` periods, at least 1.
    pub interval: u32,

    /// Days of the week the event falls on, in the order they were written.
    pub by_day: Vec<WeekDay>,

    /// Last date of the series, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<civil::Date>,

    /// Number of occurrences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl RecurrenceRule {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            by_day: Vec::new(),
            until: None,
            count: None,
        }
    }

    /// A weekly rule on the given days.
    pub fn weekly(by_day: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            by_day: by_day.into_iter().map(WeekDay::from).collect(),
            ..Self::new(Frequency::Weekly)
        }
    }

    /// Sets the interval, clamped to at least 1.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// The `RRULE` value, e.g. `FREQ=WEEKLY;INTERVAL=2;BYDAY=TU`, for a series starting in UTC.
    pub fn to_rrule(&self) -> String {
        self.to_rrule_in(&TimeZone::UTC)
    }

    /// The `RRULE` value for a series whose `DTSTART` is local to `tz`.
    ///
    /// `UNTIL` is the last second of the until date in `tz`, written as a UTC date-time as
    /// RFC 5545 requires next to a zoned `DTSTART`.
    pub fn to_rrule_in(&self, tz: &TimeZone) -> String {
        let mut s = format!("FREQ={};INTERVAL={}", self.frequency, self.interval);
        if !self.by_day.is_empty() {
            let days: Vec<_> = self.by_day.iter().map(|a| a.code()).collect();
            s.push_str(";BYDAY=");
            s.push_str(&days.join(","));
        }
        if let Some(until) = self.until {
            let value = match until.at(23, 59, 59, 0).to_zoned(tz.clone()) {
                Ok(zoned) => zoned.timestamp().strftime("%Y%m%dT%H%M%SZ").to_string(),
                Err(err) => {
                    tracing::warn!(%until, %err, "cannot place the until date, writing a date");
                    until.strftime("%Y%m%d").to_string()
                }
            };
            s.push_str(&format!(";UNTIL={value}"));
        }
        if let Some(count) = self.count {
            s.push_str(&format!(";COUNT={count}"));
        }
        s
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rrule())
    }
}
