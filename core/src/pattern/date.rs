// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Weekday};
use regex::Captures;

use crate::component::{ComponentValue, DateValue};
use crate::context::ParsingContext;
use crate::datetime::next_weekday;
use crate::pattern::{Pattern, PatternDomain, builtin_regex, capture_int};

/// Weekday names and their common abbreviations, without groups.
pub(super) const WEEKDAY: &str = r"mon(?:day)?|tue(?:s(?:day)?)?|wed(?:nesday)?|thu(?:rs(?:day)?)?|fri(?:day)?|sat(?:urday)?|sun(?:day)?";

const MONTH: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

pub(super) fn patterns() -> Vec<Pattern> {
    use PatternDomain::Date;

    let weekday = format!(r"(?i)\b({WEEKDAY})\b");
    let next_weekday = format!(r"(?i)\bnext\s+({WEEKDAY})\b");
    let month = format!(r"(?i)\b({MONTH})\b");
    let month_day =
        format!(r"(?i)\b({MONTH})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+((?:19|20)\d{{2}})\b)?");

    vec![
        Pattern::with_regex("date.weekday", Date, builtin_regex(&weekday), 0.9, 1, weekday_of),
        Pattern::with_regex("date.today", Date, builtin_regex(r"(?i)\btoday\b"), 0.95, 2, today),
        Pattern::with_regex(
            "date.tomorrow",
            Date,
            builtin_regex(r"(?i)\b(?:tomorrow|tmrw|tmr|tom)\b"),
            0.95,
            2,
            tomorrow,
        ),
        Pattern::with_regex(
            "date.in_days",
            Date,
            builtin_regex(r"(?i)\bin\s+(\d{1,4})\s+days?\b"),
            0.9,
            3,
            in_days,
        ),
        Pattern::with_regex("date.next_weekday", Date, builtin_regex(&next_weekday), 0.9, 4, next),
        Pattern::with_regex("date.month", Date, builtin_regex(&month), 0.9, 1, month_of),
        Pattern::with_regex("date.month_day", Date, builtin_regex(&month_day), 0.85, 4, month_day_of),
        Pattern::with_regex(
            "date.iso",
            Date,
            builtin_regex(r"\b(\d{4})-(\d{2})-(\d{2})\b"),
            0.95,
            6,
            iso,
        ),
    ]
}

/// Parses a weekday name or abbreviation.
pub(super) fn parse_weekday(s: &str) -> Option<Weekday> {
    let s = s.to_ascii_lowercase();
    Some(match s.get(..3)? {
        "mon" => Weekday::Monday,
        "tue" => Weekday::Tuesday,
        "wed" => Weekday::Wednesday,
        "thu" => Weekday::Thursday,
        "fri" => Weekday::Friday,
        "sat" => Weekday::Saturday,
        "sun" => Weekday::Sunday,
        _ => return None,
    })
}

fn parse_month(s: &str) -> Option<i8> {
    let s = s.to_ascii_lowercase();
    Some(match s.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    })
}

fn weekday_of(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    parse_weekday(captures.get(1)?.as_str()).map(ComponentValue::Weekday)
}

fn today(_: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    Some(ComponentValue::Date(DateValue::Offset(0)))
}

fn tomorrow(_: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    Some(ComponentValue::Date(DateValue::Offset(1)))
}

fn in_days(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    let days = capture_int(captures, 1)?;
    Some(ComponentValue::Date(DateValue::Offset(days)))
}

fn next(captures: &Captures<'_>, context: &ParsingContext) -> Option<ComponentValue> {
    let weekday = parse_weekday(captures.get(1)?.as_str())?;
    let date = next_weekday(context.reference().date(), weekday)?;
    Some(ComponentValue::Date(DateValue::Absolute(date)))
}

fn month_of(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    parse_month(captures.get(1)?.as_str()).map(ComponentValue::Month)
}

fn month_day_of(captures: &Captures<'_>, context: &ParsingContext) -> Option<ComponentValue> {
    let month = parse_month(captures.get(1)?.as_str())?;
    let day = capture_int(captures, 2)?;
    let year = match capture_int(captures, 3) {
        Some(year) => year,
        None => context.reference().year().into(),
    };
    absolute(year, month.into(), day)
}

fn iso(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    absolute(
        capture_int(captures, 1)?,
        capture_int(captures, 2)?,
        capture_int(captures, 3)?,
    )
}

fn absolute(year: i64, month: i64, day: i64) -> Option<ComponentValue> {
    let date = Date::new(
        i16::try_from(year).ok()?,
        i8::try_from(month).ok()?,
        i8::try_from(day).ok()?,
    )
    .ok()?;
    Some(ComponentValue::Date(DateValue::Absolute(date)))
}
