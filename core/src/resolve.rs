// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use jiff::Zoned;
use jiff::civil::Date;

use crate::component::{Component, ComponentKind, ComponentValue, DateValue, TimeOfDay};
use crate::datetime::{add_days, first_on_or_after, next_weekday, with_date, with_time};
use crate::event::EventDescriptor;
use crate::parser::{ParsedPhrase, most_confident};
use crate::scrape::{scan_count, scan_duration, scan_location, scan_reminders, summarize};

const UNTIL: &str = "until";

/// Resolves the components of a phrase into an event.
///
/// Resolution never fails. Whatever cannot be computed falls back to the reference instant.
pub fn resolve(phrase: &ParsedPhrase) -> EventDescriptor {
    let reference = &phrase.reference;
    let text = phrase.text.as_str();
    let until = find_until(phrase);

    let mut start = reference.clone();
    if let Some(date) = start_date(phrase, until.as_ref().map(|a| a.component)) {
        start = with_date(&start, date).unwrap_or_else(|| {
            tracing::warn!(%date, "cannot move the reference to the date, keeping the reference");
            start.clone()
        });
    }

    let (start_time, end_time) = times(phrase);
    if let Some(time) = start_time {
        start = apply_time(&start, time);
    }
    let end = end_time.map(|time| apply_time(&start, time));

    let duration = scan_duration(text, &phrase.components);
    let reminders = scan_reminders(text);
    let count = scan_count(text, &phrase.components);

    let recurrence = phrase
        .best(ComponentKind::Recurrence)
        .and_then(|c| match &c.value {
            ComponentValue::Recurrence(rule) => Some(rule.clone()),
            _ => None,
        })
        .map(|mut rule| {
            if let Some(until) = &until {
                rule.until = Some(until.date);
            }
            if let Some(count) = &count {
                rule.count = Some(count.value);
            }
            rule
        });

    let mut taken: Vec<Range<usize>> = phrase.components.iter().map(|c| c.start..c.end).collect();
    taken.extend(duration.iter().map(|a| a.span.clone()));
    taken.extend(reminders.iter().map(|a| a.span.clone()));
    taken.extend(count.iter().map(|a| a.span.clone()));
    taken.extend(until.iter().map(|a| a.keyword.clone()));

    let location = scan_location(text, &taken);
    taken.extend(location.iter().map(|a| a.span.clone()));

    EventDescriptor {
        summary: summarize(text, &taken),
        location: location.map(|a| a.value),
        start,
        duration: end.is_none().then(|| duration.map(|a| a.value)).flatten(),
        end,
        recurrence,
        reminders: reminders.into_iter().map(|a| a.value).collect(),
        timezone: phrase.timezone.clone(),
    }
}

/// A date written as the end of a series, such as `until jan 31`.
struct Until<'a> {
    component: &'a Component,
    date: Date,
    keyword: Range<usize>,
}

fn find_until(phrase: &ParsedPhrase) -> Option<Until<'_>> {
    if !phrase.has(ComponentKind::Recurrence) {
        return None;
    }

    phrase.components_of(ComponentKind::Date).find_map(|component| {
        let before = phrase.text.get(..component.start)?.trim_end();
        let keyword_start = before.len().checked_sub(UNTIL.len())?;
        let keyword = before.get(keyword_start..)?;
        let bounded = before[..keyword_start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        if !keyword.eq_ignore_ascii_case(UNTIL) || !bounded {
            return None;
        }

        let date = date_of(component, &phrase.reference)?;
        Some(Until {
            component,
            date,
            keyword: keyword_start..before.len(),
        })
    })
}

/// The start date: a DATE (other than the series end), else the next WEEKDAY, else the first
/// recurrence day on or after the reference date.
///
/// The recurrence step puts `DTSTART` on an occurrence of the rule. Calendar clients count
/// `DTSTART` as an occurrence even when `BYDAY` excludes it.
fn start_date(phrase: &ParsedPhrase, until: Option<&Component>) -> Option<Date> {
    let today = phrase.reference.date();

    let date = most_confident(
        phrase
            .components_of(ComponentKind::Date)
            .filter(|c| until.is_none_or(|u| !std::ptr::eq(*c, u))),
    );
    if let Some(component) = date {
        return date_of(component, &phrase.reference);
    }

    if let Some(component) = phrase.best(ComponentKind::Weekday) {
        if let ComponentValue::Weekday(weekday) = component.value {
            return next_weekday(today, weekday);
        }
    }

    if let Some(component) = phrase.best(ComponentKind::Recurrence) {
        if let ComponentValue::Recurrence(rule) = &component.value {
            return first_on_or_after(today, rule.by_day.iter().map(|&d| d.into()));
        }
    }

    None
}

fn date_of(component: &Component, reference: &Zoned) -> Option<Date> {
    match component.value {
        ComponentValue::Date(DateValue::Absolute(date)) => Some(date),
        ComponentValue::Date(DateValue::Offset(days)) => {
            let date = add_days(reference.date(), days);
            if date.is_none() {
                tracing::warn!(days, "day offset overflows the calendar, ignoring it");
            }
            date
        }
        _ => None,
    }
}

/// The start and end time of day, from an interval or else a single time.
fn times(phrase: &ParsedPhrase) -> (Option<TimeOfDay>, Option<TimeOfDay>) {
    if let Some(component) = phrase.best(ComponentKind::Interval) {
        if let ComponentValue::Interval { start, end } = component.value {
            return (Some(start), Some(end));
        }
    }

    let time = phrase
        .best(ComponentKind::Time)
        .and_then(|component| match component.value {
            ComponentValue::Time(time) => Some(time),
            _ => None,
        });
    (time, None)
}

fn apply_time(zoned: &Zoned, time: TimeOfDay) -> Zoned {
    with_time(zoned, time).unwrap_or_else(|| {
        tracing::warn!(%time, "cannot set the time of day, keeping the date's time");
        zoned.clone()
    })
}
