// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use regex::Captures;

use crate::component::{ComponentValue, Meridiem, TimeOfDay};
use crate::context::ParsingContext;
use crate::pattern::{Pattern, PatternDomain, builtin_regex, capture_int};

const RE_TO: &str = r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s+to\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b";
const RE_HYPHEN: &str = r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s*-\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b";

pub(super) fn patterns() -> Vec<Pattern> {
    use PatternDomain::Interval;
    vec![
        Pattern::with_regex("interval.to", Interval, builtin_regex(RE_TO), 0.9, 5, range),
        Pattern::with_regex("interval.hyphen", Interval, builtin_regex(RE_HYPHEN), 0.9, 5, range),
    ]
}

fn range(captures: &Captures<'_>, _: &ParsingContext) -> Option<ComponentValue> {
    let start_meridiem = captures.get(3).and_then(|m| Meridiem::parse(m.as_str()));
    let end_meridiem = captures.get(6).and_then(|m| Meridiem::parse(m.as_str()));

    let start = endpoint(captures, 1, start_meridiem)?;
    let mut end = endpoint(captures, 4, end_meridiem)?;

    // Hours as written: "11pm to 10" ends at 22:00, "2pm to 4" stays at 04:00.
    let written_start = capture_int(captures, 1)?;
    let written_end = capture_int(captures, 4)?;
    if end_meridiem.is_none()
        && start_meridiem == Some(Meridiem::Pm)
        && written_end < written_start
    {
        end = end.shift_to_afternoon()?;
    }

    Some(ComponentValue::Interval { start, end })
}

fn endpoint(captures: &Captures<'_>, i: usize, meridiem: Option<Meridiem>) -> Option<TimeOfDay> {
    let hour = capture_int(captures, i)?;
    let minute = capture_int(captures, i + 1).unwrap_or(0);
    match meridiem {
        Some(meridiem) => TimeOfDay::with_meridiem(hour, minute, meridiem),
        None => TimeOfDay::new(hour, minute),
    }
}

#[cfg(test)]
mod tests {
    use jiff::Zoned;

    use super::*;

    fn interval(text: &str) -> Option<(String, String)> {
        let ctx = ParsingContext::new(Zoned::now());
        patterns().iter().find_map(|p| {
            let captures = p.regex().captures(text)?;
            match p.build(&captures, &ctx)? {
                ComponentValue::Interval { start, end } => Some((start.to_string(), end.to_string())),
                _ => None,
            }
        })
    }

    fn pair(start: &str, end: &str) -> Option<(String, String)> {
        Some((start.to_string(), end.to_string()))
    }

    #[test]
    fn parses_ranges_with_meridiem() {
        assert_eq!(interval("4pm to 8pm"), pair("16:00", "20:00"));
        assert_eq!(interval("9:30am - 11am"), pair("09:30", "11:00"));
        assert_eq!(interval("11am-1pm"), pair("11:00", "13:00"));
    }

    #[test]
    fn infers_afternoon_end_from_written_start_hour() {
        assert_eq!(interval("11pm to 10"), pair("23:00", "22:00"));
        assert_eq!(interval("12pm - 3"), pair("12:00", "15:00"));
        assert_eq!(interval("5:30pm to 4:15"), pair("17:30", "16:15"));
    }

    #[test]
    fn keeps_end_when_not_below_written_start_hour() {
        assert_eq!(interval("2pm to 4"), pair("14:00", "04:00"));
        assert_eq!(interval("5pm to 9"), pair("17:00", "09:00"));
        assert_eq!(interval("1:30pm - 3:15"), pair("13:30", "03:15"));
        assert_eq!(interval("3pm to 16"), pair("15:00", "16:00"));
    }

    #[test]
    fn keeps_bare_clock_ranges_as_written() {
        assert_eq!(interval("10 to 12"), pair("10:00", "12:00"));
        assert_eq!(interval("14:00-16:30"), pair("14:00", "16:30"));
        // Known approximation: no meridiem on either side means no inference.
        assert_eq!(interval("9 to 5"), pair("09:00", "05:00"));
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        assert_eq!(interval("25 to 26"), None);
        assert_eq!(interval("3pm to 13pm"), None);
        assert_eq!(interval("10:61 - 11"), None);
    }
}
