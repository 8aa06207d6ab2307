// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Weekday};
use jiff::{Span, Zoned};

use crate::component::TimeOfDay;

/// Days from `from` forward to `to`, in `1..=7`.
///
/// A weekday never refers to its own day: naming today's weekday means a week from today.
pub fn days_until(from: Weekday, to: Weekday) -> i64 {
    let days = i64::from(to.to_monday_one_offset()) - i64::from(from.to_monday_one_offset());
    if days <= 0 { days + 7 } else { days }
}

/// The next `target` strictly after `date`.
pub fn next_weekday(date: Date, target: Weekday) -> Option<Date> {
    add_days(date, days_until(date.weekday(), target))
}

/// The first of `targets` falling on or after `date`.
pub fn first_on_or_after(date: Date, targets: impl IntoIterator<Item = Weekday>) -> Option<Date> {
    targets
        .into_iter()
        .map(|target| days_until(date.weekday(), target) % 7)
        .min()
        .and_then(|days| add_days(date, days))
}

pub fn add_days(date: Date, days: i64) -> Option<Date> {
    Span::new()
        .try_days(days)
        .and_then(|span| date.checked_add(span))
        .ok()
}

/// Moves `zoned` to another date, keeping its time of day and zone.
pub fn with_date(zoned: &Zoned, date: Date) -> Option<Zoned> {
    zoned.with().date(date).build().ok()
}

/// Sets the time of day, clearing seconds and below.
pub fn with_time(zoned: &Zoned, time: TimeOfDay) -> Option<Zoned> {
    zoned.with().time(time.to_civil()).build().ok()
}
