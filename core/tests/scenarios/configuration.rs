// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsing under user configuration.

use jiff::civil;

use nlcal_core::{
    ComponentKind, ComponentValue, Config, ContextError, FuzzyConfig, Parser, TimeOfDay,
};

use crate::common::{monday_at, reference};

fn config_with(toml: &str) -> Config {
    toml::from_str(toml).unwrap()
}

#[test]
fn config_overrides_fuzzy_hours() {
    // Arrange
    let config = config_with("[fuzzy]\nmorning = 7\n");
    let ctx = config.context(reference(monday_at(0, 0))).unwrap();
    let parser = Parser::new(ctx);

    // Act
    let phrase = parser.parse("run in the morning");

    // Assert
    let fuzzy = phrase.best(ComponentKind::FuzzyTime).unwrap();
    assert_eq!(
        fuzzy.value,
        ComponentValue::FuzzyTime {
            time: TimeOfDay::new(7, 0).unwrap(),
            word: "morning".to_string(),
        }
    );
}

#[test]
fn config_disables_rejection_of_invalid_phrases() {
    let config = config_with("reject_invalid = false\n");
    let parser = Parser::new(config.context(reference(monday_at(10, 0))).unwrap());

    let result = parser.parse_to_calendar("new event");
    assert!(!result.validation.is_valid);
    let event = result.event.unwrap();
    assert_eq!(event.start.datetime(), civil::date(2024, 1, 15).at(10, 0, 0, 0));
}

#[test]
fn config_places_reference_in_time_zone() {
    let config = Config {
        timezone: Some("America/New_York".to_string()),
        fuzzy: FuzzyConfig::default(),
        ..Config::default()
    };
    let parser = Parser::new(config.context(reference(monday_at(12, 0))).unwrap());

    let event = parser.to_event(&parser.parse("tomorrow 9am")).unwrap();
    assert_eq!(event.timezone, "America/New_York");
    assert_eq!(event.start.datetime(), civil::date(2024, 1, 16).at(9, 0, 0, 0));
}

#[test]
fn config_with_unknown_time_zone_fails() {
    let config = config_with("timezone = \"Atlantis/Capital\"\n");
    let err = config.context(reference(monday_at(0, 0))).unwrap_err();
    assert!(matches!(err, ContextError::UnknownTimeZone { ref name, .. } if name == "Atlantis/Capital"));
}

#[test]
fn replacing_context_changes_later_parses() {
    let parser = Parser::new(Config::default().context(reference(monday_at(0, 0))).unwrap());
    let before = parser.to_event(&parser.parse("tomorrow 9am")).unwrap();

    let next = parser.context().as_ref().clone().with_timezone("Asia/Tokyo").unwrap();
    parser.set_context(next);
    let after = parser.to_event(&parser.parse("tomorrow 9am")).unwrap();

    assert_eq!(before.timezone, "UTC");
    assert_eq!(after.timezone, "Asia/Tokyo");
    assert_eq!(before.start.datetime(), after.start.datetime());
    assert_ne!(before.start.timestamp(), after.start.timestamp());
}
