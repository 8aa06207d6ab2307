// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Which components survive for a phrase.

use nlcal_core::{
    ComponentKind, ComponentValue, Parser, Pattern, PatternCatalog, PatternDomain, TimeOfDay,
};

use crate::common::{assert_kinds, assert_no_overlap, monday, reference, test_parser};

#[test]
fn interval_replaces_its_endpoints() {
    // Arrange
    let parser = test_parser();

    // Act
    let phrase = parser.parse("4pm to 8pm");

    // Assert
    assert_kinds(&phrase, &[ComponentKind::Interval]);
    assert_eq!(phrase.components_of(ComponentKind::Time).count(), 0);
    assert_no_overlap(&phrase);
}

#[test]
fn recognizes_mixed_phrase() {
    let parser = test_parser();
    let phrase = parser.parse("every tue afternoon 5pm at the office");

    assert_kinds(
        &phrase,
        &[
            ComponentKind::Recurrence,
            ComponentKind::FuzzyTime,
            ComponentKind::Time,
        ],
    );
    assert_eq!(phrase.components[0].text, "every tue");
    assert_no_overlap(&phrase);
}

#[test]
fn weekday_list_beats_single_weekdays() {
    let parser = test_parser();
    let phrase = parser.parse("mon, thu & sat 2pm");

    assert_kinds(&phrase, &[ComponentKind::Recurrence, ComponentKind::Time]);
    assert_eq!(phrase.components[0].text, "mon, thu & sat");
}

#[test]
fn invalid_calendar_date_falls_back_to_month() {
    let parser = test_parser();
    let phrase = parser.parse("feb 30 9am");

    assert_kinds(&phrase, &[ComponentKind::Month, ComponentKind::Time]);
    assert_eq!(phrase.components[0].value, ComponentValue::Month(2));
}

#[test]
fn rejects_out_of_range_clock_readings() {
    let parser = test_parser();
    let phrase = parser.parse("at 25:00 or 13pm");
    assert!(phrase.components.is_empty(), "{:?}", phrase.components);
}

#[test]
fn reports_byte_and_utf16_spans_for_non_ascii_text() {
    let parser = test_parser();
    let text = "café with Zoë tomorrow 9am";
    let phrase = parser.parse(text);

    assert_no_overlap(&phrase);
    let tomorrow = phrase.best(ComponentKind::Date).unwrap();
    assert_eq!(tomorrow.start, text.find("tomorrow").unwrap());
    assert_eq!((tomorrow.utf16_start, tomorrow.utf16_end), (14, 22));
}

#[test]
fn custom_pattern_joins_builtin_catalog() {
    // Arrange
    let teatime = Pattern::new(
        "custom.teatime",
        PatternDomain::Custom,
        r"(?i)\bteatime\b",
        0.8,
        2,
        |_, _| TimeOfDay::new(16, 0).map(ComponentValue::Time),
    )
    .unwrap();
    let catalog = PatternCatalog::builtin().with(teatime);
    let parser = Parser::with_catalog(catalog, nlcal_core::ParsingContext::new(reference(monday())));

    // Act
    let result = parser.parse_to_calendar("teatime with ann tomorrow");

    // Assert
    assert!(result.validation.is_valid);
    let event = result.event.unwrap();
    assert_eq!(event.start.datetime(), jiff::civil::date(2024, 1, 16).at(16, 0, 0, 0));
    assert_eq!(event.summary.as_deref(), Some("with ann"));
}

#[test]
fn custom_pattern_with_broken_regex_is_an_error() {
    let err = Pattern::new("custom.broken", PatternDomain::Custom, "(", 0.5, 1, |_, _| None)
        .unwrap_err();
    assert_eq!(err.name, "custom.broken");
    assert!(err.to_string().starts_with("Invalid pattern 'custom.broken'"));
}
