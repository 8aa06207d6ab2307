// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Phrases turned into calendar results and their serialized forms.

use nlcal_core::{ComponentKind, FormatOptions};

use crate::common::{monday_at, reference, test_parser};

#[test]
fn calendar_result_carries_phrase_event_and_validation() {
    // Arrange
    let parser = test_parser();

    // Act
    let result = parser.parse_to_calendar("every tue afternoon 5pm at the office");

    // Assert
    assert!(result.validation.is_valid);
    assert_eq!(result.phrase.components.len(), 3);
    let event = result.event.unwrap();
    assert_eq!(event.location.as_deref(), Some("the office"));
    assert!(event.recurrence.is_some());
}

#[test]
fn calendar_result_has_no_event_for_invalid_phrase() {
    let parser = test_parser();
    let result = parser.parse_to_calendar("new event");

    assert!(!result.validation.is_valid);
    assert!(result.event.is_none());
    assert!(result.phrase.components.is_empty());
}

#[test]
fn serializes_calendar_result_to_json() {
    let parser = test_parser();
    let result = parser.parse_to_calendar("every tue 5pm rem 10 mins before");

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["phrase"]["components"][0]["kind"], "RECURRENCE");
    assert_eq!(json["phrase"]["components"][1]["kind"], "TIME");
    assert_eq!(json["event"]["timezone"], "UTC");
    assert_eq!(json["event"]["recurrence"]["frequency"], "WEEKLY");
    assert_eq!(json["event"]["recurrence"]["by_day"][0], "TU");
    assert_eq!(json["event"]["reminders"][0]["kind"], "DISPLAY");
    assert_eq!(json["event"]["reminders"][0]["minutes_before"], 10);
    assert_eq!(json["validation"]["is_valid"], true);
}

#[test]
fn serializes_warnings_as_messages() {
    let parser = test_parser();
    let result = parser.parse_to_calendar("new event");

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["event"], serde_json::Value::Null);
    assert_eq!(json["validation"]["missing"][0], "TIME");
    assert_eq!(json["validation"]["warnings"][0], "No temporal reference found");
}

#[test]
fn details_group_components_by_kind() {
    let parser = test_parser();
    let details = parser.details("jan 15th 3:30pm or 16:00");

    assert_eq!(details[&ComponentKind::Date].len(), 1);
    assert_eq!(details[&ComponentKind::Time].len(), 2);
    assert_eq!(details.len(), 2);
}

#[test]
fn writes_icalendar_for_resolved_event() {
    let parser = test_parser();
    let event = parser
        .to_event(&parser.parse("review 1.5hrs wed 2pm"))
        .unwrap();

    let ics = FormatOptions::default()
        .write_to_string(&event, &reference(monday_at(9, 0)))
        .unwrap();

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.contains("DTSTART;TZID=UTC:20240117T140000\r\n"));
    assert!(ics.contains("DURATION:PT1H30M\r\n"));
    assert!(ics.contains("SUMMARY:review\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
}
