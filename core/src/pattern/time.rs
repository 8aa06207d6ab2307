// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use regex::Captures;

use crate::component::{ComponentValue, Meridiem, TimeOfDay};
use crate::context::ParsingContext;
use crate::pattern::{Pattern, PatternDomain, builtin_regex, capture_int};

const RE_TWELVE_HOUR: &str = r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b";
const RE_TWENTY_FOUR_HOUR: &str = r"\b(\d{1,2}):(\d{2})\b";
const RE_MILITARY: &str = r"\b(\d{2})(\d{2})\b";
const RE_FUZZY: &str = r"(?i)\b(noon|midnight|morning|afternoon|evening|night)\b";

pub(super) fn patterns() -> Vec<Pattern> {
    use PatternDomain::Time;
    vec![
        Pattern::with_regex("time.12h", Time, builtin_regex(RE_TWELVE_HOUR), 0.95, 3, twelve_hour),
        Pattern::with_regex("time.24h", Time, builtin_regex(RE_TWENTY_FOUR_HOUR), 0.9, 2, clock),
        Pattern::with_regex("time.military", Time, builtin_regex(RE_MILITARY), 0.85, 1, clock),
        Pattern::with_regex("time.fuzzy", Time, builtin_regex(RE_FUZZY), 0.7, 1, fuzzy),
    ]
}

fn twelve_hour(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    let hour = capture_int(captures, 1)?;
    let minute = capture_int(captures, 2).unwrap_or(0);
    let meridiem = Meridiem::parse(captures.get(3)?.as_str())?;
    TimeOfDay::with_meridiem(hour, minute, meridiem).map(ComponentValue::Time)
}

fn clock(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    let hour = capture_int(captures, 1)?;
    let minute = capture_int(captures, 2)?;
    TimeOfDay::new(hour, minute).map(ComponentValue::Time)
}

fn fuzzy(captures: &Captures<'_>, context: &ParsingContext) -> Option<ComponentValue> {
    let word = captures.get(1)?.as_str().to_ascii_lowercase();
    let hours = context.preferences().fuzzy_hours;
    let hour = match word.as_str() {
        "noon" => 12,
        "midnight" => 0,
        "morning" => hours.morning,
        "afternoon" => hours.afternoon,
        "evening" => hours.evening,
        "night" => hours.night,
        _ => return None,
    };

    let time = TimeOfDay::new(hour.into(), 0)?;
    Some(ComponentValue::FuzzyTime { time, word })
}
