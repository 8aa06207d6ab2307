// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scanners for the parts of a phrase that are not temporal components: durations, reminders,
//! repeat counts, the location and the summary.

use std::ops::Range;
use std::sync::OnceLock;

use regex::{Match, Regex};

use crate::component::Component;
use crate::event::{EventDuration, Reminder};

const RE_DURATION_HOURS: &str = r"(?i)\b(?:for\s+)?(\d+(?:\.\d+)?)\s*(?:hrs?|hours?)(?:\s+(?:and\s+)?(\d+)\s*(?:mins?|minutes?))?\b";
const RE_DURATION_MINUTES: &str = r"(?i)\b(?:for\s+)?(\d+)\s*(?:mins?|minutes?)\b";
const RE_REMINDER: &str = r"(?i)\b(?:(?:remind\s+me|rem)\s+)?(\d+)\s*(mins?|minutes?|hrs?|hours?)\s+before\b";
const RE_COUNT: &str = r"(?i)\b(?:for\s+)?(\d+)\s+times\b";
const RE_WORD: &str = r"\S+";

/// Location phrases, tried in order. The first group, when present, is the location.
const RE_LOCATIONS: [&str; 5] = [
    r"(?i)\bat\s+([^,\n]+)",
    r"(?i)\bin\s+([^,\n]+)",
    r"(?i)\broom\s+\d+",
    r"(?i)\boffice\b",
    r"(?i)\bhome\b",
];

const FILLER_WORDS: [&str; 4] = ["the", "a", "an", "my"];

/// A value found in the phrase along with the bytes it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned<T> {
    pub value: T,
    pub span: Range<usize>,
}

/// Finds the first duration expression that is neither part of a component nor a reminder.
pub fn scan_duration(text: &str, components: &[Component]) -> Option<Scanned<EventDuration>> {
    static HOURS: OnceLock<Regex> = OnceLock::new();
    static MINUTES: OnceLock<Regex> = OnceLock::new();

    let hours = HOURS.get_or_init(|| Regex::new(RE_DURATION_HOURS).unwrap());
    for captures in hours.captures_iter(text) {
        let Some(m) = captures.get(0) else { continue };
        if is_taken(&m, text, components) {
            continue;
        }

        let Some(value) = captures.get(1).and_then(|a| a.as_str().parse::<f64>().ok()) else {
            continue;
        };
        let extra = captures
            .get(2)
            .and_then(|a| a.as_str().parse::<i64>().ok())
            .unwrap_or(0);
        let minutes = EventDuration::from_hours(value).map_or(0, |d| d.minutes());
        if let Some(value) = EventDuration::from_minutes(minutes.saturating_add(extra)) {
            return Some(Scanned { value, span: m.range() });
        }
    }

    let minutes = MINUTES.get_or_init(|| Regex::new(RE_DURATION_MINUTES).unwrap());
    for captures in minutes.captures_iter(text) {
        let Some(m) = captures.get(0) else { continue };
        if is_taken(&m, text, components) {
            continue;
        }

        if let Some(value) = captures
            .get(1)
            .and_then(|a| a.as_str().parse::<i64>().ok())
            .and_then(EventDuration::from_minutes)
        {
            return Some(Scanned { value, span: m.range() });
        }
    }

    None
}

/// Finds every "N minutes before" phrase.
pub fn scan_reminders(text: &str) -> Vec<Scanned<Reminder>> {
    static REMINDER: OnceLock<Regex> = OnceLock::new();
    let re = REMINDER.get_or_init(|| Regex::new(RE_REMINDER).unwrap());

    re.captures_iter(text)
        .filter_map(|captures| {
            let m = captures.get(0)?;
            let amount: i64 = captures.get(1)?.as_str().parse().ok()?;
            let unit = captures.get(2)?.as_str().to_ascii_lowercase();
            let minutes = if unit.starts_with('h') {
                amount.checked_mul(60)?
            } else {
                amount
            };
            Some(Scanned {
                value: Reminder::display(minutes),
                span: m.range(),
            })
        })
        .collect()
}

/// Finds an "N times" repeat count.
pub fn scan_count(text: &str, components: &[Component]) -> Option<Scanned<u32>> {
    static COUNT: OnceLock<Regex> = OnceLock::new();
    let re = COUNT.get_or_init(|| Regex::new(RE_COUNT).unwrap());

    re.captures_iter(text).find_map(|captures| {
        let m = captures.get(0)?;
        if components.iter().any(|c| c.overlaps_span(m.start(), m.end())) {
            return None;
        }
        let count: u32 = captures.get(1)?.as_str().parse().ok()?;
        (count > 0).then(|| Scanned {
            value: count,
            span: m.range(),
        })
    })
}

/// Finds where the event takes place.
///
/// A location phrase may not start inside a component, and stops where the next component or
/// scanned expression begins. The span covers the whole phrase, including its preposition.
pub fn scan_location(text: &str, taken: &[Range<usize>]) -> Option<Scanned<String>> {
    static LOCATIONS: OnceLock<Vec<Regex>> = OnceLock::new();
    let patterns = LOCATIONS.get_or_init(|| {
        RE_LOCATIONS
            .iter()
            .map(|re| Regex::new(re).unwrap())
            .collect()
    });

    for re in patterns {
        for captures in re.captures_iter(text) {
            let Some(m) = captures.get(0) else { continue };
            if taken.iter().any(|r| r.contains(&m.start())) {
                continue;
            }

            let value = captures.get(1).unwrap_or(m);
            let stop = taken
                .iter()
                .map(|r| r.start)
                .filter(|&s| s >= value.start())
                .min()
                .map_or(value.end(), |s| s.min(value.end()));

            let location = text[value.start()..stop]
                .trim()
                .trim_end_matches(|c: char| c.is_ascii_punctuation());
            if location.is_empty() || is_filler(location) {
                continue;
            }

            let end = value.start() + text[value.start()..stop].trim_end().len();
            return Some(Scanned {
                value: location.to_string(),
                span: m.start()..end,
            });
        }
    }

    None
}

/// Joins the words of the phrase that nothing else claimed.
///
/// Words of two characters or fewer are left out.
pub fn summarize(text: &str, taken: &[Range<usize>]) -> Option<String> {
    static WORD: OnceLock<Regex> = OnceLock::new();
    let re = WORD.get_or_init(|| Regex::new(RE_WORD).unwrap());

    let words: Vec<&str> = re
        .find_iter(text)
        .filter(|w| !taken.iter().any(|r| r.start < w.end() && w.start() < r.end))
        .map(|w| w.as_str())
        .filter(|w| w.chars().count() > 2)
        .collect();

    (!words.is_empty()).then(|| words.join(" "))
}

/// Whether a duration match is claimed by a component or belongs to a reminder.
fn is_taken(m: &Match<'_>, text: &str, components: &[Component]) -> bool {
    if components.iter().any(|c| c.overlaps_span(m.start(), m.end())) {
        return true;
    }

    let rest = text[m.end()..].trim_start();
    rest.get(..6).is_some_and(|a| a.eq_ignore_ascii_case("before"))
}

fn is_filler(s: &str) -> bool {
    s.split_whitespace()
        .all(|w| FILLER_WORDS.iter().any(|f| w.eq_ignore_ascii_case(f)))
}
