// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use jiff::civil::Weekday;
use regex::{Captures, Regex};

use crate::component::ComponentValue;
use crate::context::ParsingContext;
use crate::pattern::date::{WEEKDAY, parse_weekday};
use crate::pattern::{Pattern, PatternDomain, builtin_regex};
use crate::recurrence::{Frequency, RecurrenceRule};

pub(super) fn patterns() -> Vec<Pattern> {
    use PatternDomain::Recurrence;

    let every = format!(r"(?i)\bevery\s+({WEEKDAY})\b");
    let every_other = format!(r"(?i)\bevery\s+other\s+({WEEKDAY})\b");
    let separator = r"(?:\s*,\s*(?:(?:and|&)\s+)?|\s*&\s*|\s+and\s+)";
    let list = format!(r"(?i)\b(?:every\s+)?(?:{WEEKDAY})(?:{separator}(?:{WEEKDAY}))+\b");

    vec![
        Pattern::with_regex(
            "recurrence.every_weekday",
            Recurrence,
            builtin_regex(&every),
            0.9,
            3,
            every_weekday,
        ),
        Pattern::with_regex(
            "recurrence.every_other_weekday",
            Recurrence,
            builtin_regex(&every_other),
            0.9,
            4,
            every_other_weekday,
        ),
        Pattern::with_regex(
            "recurrence.daily",
            Recurrence,
            builtin_regex(r"(?i)\b(?:daily|every\s+day)\b"),
            0.95,
            3,
            |_: &Captures<'_>, _: &ParsingContext| frequency(Frequency::Daily),
        ),
        Pattern::with_regex(
            "recurrence.weekly",
            Recurrence,
            builtin_regex(r"(?i)\b(?:weekly|every\s+week)\b"),
            0.95,
            3,
            |_: &Captures<'_>, _: &ParsingContext| frequency(Frequency::Weekly),
        ),
        Pattern::with_regex(
            "recurrence.monthly",
            Recurrence,
            builtin_regex(r"(?i)\b(?:monthly|every\s+month)\b"),
            0.95,
            3,
            |_: &Captures<'_>, _: &ParsingContext| frequency(Frequency::Monthly),
        ),
        Pattern::with_regex(
            "recurrence.every_weekday_or_weekend",
            Recurrence,
            builtin_regex(r"(?i)\bevery\s+(weekday|weekend)\b"),
            0.9,
            3,
            workdays_or_weekend,
        ),
        Pattern::with_regex(
            "recurrence.weekday_list",
            Recurrence,
            builtin_regex(&list),
            0.8,
            4,
            weekday_list,
        ),
    ]
}

fn frequency(frequency: Frequency) -> Option<ComponentValue> {
    Some(ComponentValue::Recurrence(RecurrenceRule::new(frequency)))
}

fn every_weekday(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    let day = parse_weekday(captures.get(1)?.as_str())?;
    Some(ComponentValue::Recurrence(RecurrenceRule::weekly([day])))
}

fn every_other_weekday(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    let day = parse_weekday(captures.get(1)?.as_str())?;
    let rule = RecurrenceRule::weekly([day]).with_interval(2);
    Some(ComponentValue::Recurrence(rule))
}

fn workdays_or_weekend(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    use Weekday::*;
    let rule = match captures.get(1)?.as_str().to_ascii_lowercase().as_str() {
        "weekday" => RecurrenceRule::weekly([Monday, Tuesday, Wednesday, Thursday, Friday]),
        "weekend" => RecurrenceRule::weekly([Saturday, Sunday]),
        _ => return None,
    };
    Some(ComponentValue::Recurrence(rule))
}

fn weekday_list(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    static WEEKDAY_WORD: OnceLock<Regex> = OnceLock::new();
    let re = WEEKDAY_WORD.get_or_init(|| builtin_regex(&format!(r"(?i)\b(?:{WEEKDAY})\b")));

    let mut days: Vec<Weekday> = Vec::new();
    for m in re.find_iter(captures.get(0)?.as_str()) {
        let day = parse_weekday(m.as_str())?;
        if !days.contains(&day) {
            days.push(day);
        }
    }

    (days.len() > 1).then(|| ComponentValue::Recurrence(RecurrenceRule::weekly(days)))
}
