// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Events resolved from whole phrases.

use jiff::civil;

use nlcal_core::{ComponentKind, Frequency, Reminder, WeekDay, resolve, validate};

use crate::common::{assert_starts_at, monday_at, parser_at, test_parser};

#[test]
fn resolves_weekday_with_time() {
    // Arrange
    let parser = test_parser();

    // Act
    let phrase = parser.parse("wed 10am");
    let event = resolve(&phrase);

    // Assert
    assert_starts_at(&event, civil::date(2024, 1, 17).at(10, 0, 0, 0));
    assert_eq!(event.end, None);
    assert_eq!(event.recurrence, None);
    assert!(validate(&phrase).is_valid);
}

#[test]
fn resolves_tomorrow_with_duration() {
    let parser = test_parser();
    let event = resolve(&parser.parse("tomorrow 3pm for 1hr"));

    assert_starts_at(&event, civil::date(2024, 1, 16).at(15, 0, 0, 0));
    assert_eq!(event.duration.map(|d| d.to_string()).as_deref(), Some("PT1H"));
    assert_eq!(event.end, None);
}

#[test]
fn resolves_weekly_recurrence() {
    let parser = test_parser();
    let event = resolve(&parser.parse("every tue afternoon 5pm"));

    let rule = event.recurrence.as_ref().unwrap();
    assert_eq!(rule.frequency, Frequency::Weekly);
    assert_eq!(rule.by_day, [WeekDay::Tuesday]);
    assert_eq!(rule.interval, 1);
    assert_eq!(event.start.time(), civil::time(17, 0, 0, 0));
}

#[test]
fn resolves_interval() {
    let parser = test_parser();
    let event = resolve(&parser.parse("4pm to 8pm"));

    assert_starts_at(&event, civil::date(2024, 1, 15).at(16, 0, 0, 0));
    assert_eq!(
        event.end.unwrap().datetime(),
        civil::date(2024, 1, 15).at(20, 0, 0, 0)
    );
    assert_eq!(event.duration, None);
}

#[test]
fn infers_afternoon_end_of_interval() {
    let parser = test_parser();
    let event = resolve(&parser.parse("12pm to 3"));

    assert_eq!(event.start.time(), civil::time(12, 0, 0, 0));
    assert_eq!(event.end.unwrap().time(), civil::time(15, 0, 0, 0));
}

#[test]
fn interval_end_above_written_start_is_kept() {
    let parser = test_parser();
    let event = resolve(&parser.parse("2pm to 4"));

    assert_eq!(event.start.time(), civil::time(14, 0, 0, 0));
    assert_eq!(event.end.unwrap().time(), civil::time(4, 0, 0, 0));
}

#[test]
fn phrase_without_temporal_reference_is_invalid() {
    let parser = test_parser();
    let phrase = parser.parse("new event");
    let validation = validate(&phrase);

    assert!(!validation.is_valid);
    assert_eq!(validation.missing, [ComponentKind::Time, ComponentKind::Date]);
    assert_eq!(validation.warnings[0].to_string(), "No temporal reference found");
    assert_eq!(parser.to_event(&phrase), None);
}

#[test]
fn extracts_summary_and_location() {
    let parser = test_parser();

    let event = resolve(&parser.parse("this wed new event 10am"));
    assert_eq!(event.summary.as_deref(), Some("this new event"));
    assert_eq!(event.location, None);

    let event = resolve(&parser.parse("every tue afternoon 5pm at the office"));
    assert_eq!(event.location.as_deref(), Some("the office"));
    assert_eq!(event.summary, None);

    let event = resolve(&parser.parse("meeting in room 101 tomorrow 10am"));
    assert_eq!(event.location.as_deref(), Some("room 101"));
    assert_eq!(event.summary.as_deref(), Some("meeting"));
}

#[test]
fn resolves_reminder() {
    let parser = test_parser();
    let event = resolve(&parser.parse("fri 3pm rem 15 mins before"));

    assert_starts_at(&event, civil::date(2024, 1, 19).at(15, 0, 0, 0));
    assert_eq!(event.reminders, [Reminder::display(15)]);
    assert_eq!(event.duration, None);
}

#[test]
fn resolves_next_weekday_and_month_day() {
    let parser = test_parser();

    let event = resolve(&parser.parse("next tue 2pm"));
    assert_starts_at(&event, civil::date(2024, 1, 16).at(14, 0, 0, 0));

    let event = resolve(&parser.parse("jan 15th 3:30pm"));
    assert_starts_at(&event, civil::date(2024, 1, 15).at(15, 30, 0, 0));

    let event = resolve(&parser.parse("dinner march 3, 2025 7pm"));
    assert_starts_at(&event, civil::date(2025, 3, 3).at(19, 0, 0, 0));
    assert_eq!(event.summary.as_deref(), Some("dinner"));
}

#[test]
fn resolves_multi_day_recurrences() {
    let parser = test_parser();

    let event = resolve(&parser.parse("every other sat 9am"));
    let rule = event.recurrence.as_ref().unwrap();
    assert_eq!(rule.interval, 2);
    assert_eq!(rule.by_day, [WeekDay::Saturday]);
    assert_starts_at(&event, civil::date(2024, 1, 20).at(9, 0, 0, 0));

    let event = resolve(&parser.parse("mon, thu & sat 2pm"));
    let rule = event.recurrence.as_ref().unwrap();
    assert_eq!(
        rule.by_day,
        [WeekDay::Monday, WeekDay::Thursday, WeekDay::Saturday]
    );
    assert_starts_at(&event, civil::date(2024, 1, 15).at(14, 0, 0, 0));
}

#[test]
fn resolves_series_end_conditions() {
    let parser = test_parser();

    let event = resolve(&parser.parse("gym every mon 7am until feb 26"));
    let rule = event.recurrence.clone().unwrap();
    assert_eq!(rule.until, Some(civil::date(2024, 2, 26)));
    assert_eq!(rule.to_rrule(), "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO;UNTIL=20240226T235959Z");
    assert_starts_at(&event, civil::date(2024, 1, 15).at(7, 0, 0, 0));
    assert_eq!(event.summary.as_deref(), Some("gym"));

    let event = resolve(&parser.parse("daily standup 9:15 for 15 min 10 times"));
    let rule = event.recurrence.unwrap();
    assert_eq!(rule.count, Some(10));
    assert_eq!(event.duration.map(|d| d.minutes()), Some(15));
    assert_eq!(event.summary.as_deref(), Some("standup"));
}

#[test]
fn keeps_reference_time_without_time() {
    let parser = parser_at(monday_at(8, 45));
    let event = resolve(&parser.parse("dentist in 3 days"));
    assert_starts_at(&event, civil::date(2024, 1, 18).at(8, 45, 0, 0));
}

#[test]
fn resolves_same_weekday_to_next_week() {
    let parser = parser_at(monday_at(8, 0));
    let event = resolve(&parser.parse("mon 9am"));
    assert_starts_at(&event, civil::date(2024, 1, 22).at(9, 0, 0, 0));
}

#[test]
fn warns_on_multiple_times() {
    let parser = test_parser();
    let phrase = parser.parse("call 9am or 3pm tomorrow");
    let validation = validate(&phrase);

    assert!(validation.is_valid);
    assert_eq!(
        validation.warnings[0].to_string(),
        "Multiple time components found - may be ambiguous"
    );
    let event = resolve(&phrase);
    assert_eq!(event.start.time(), civil::time(9, 0, 0, 0));
}
