// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! Every fixture is anchored at Monday 2024-01-15 in UTC unless stated otherwise, so relative
//! expressions resolve to fixed dates.

use jiff::civil::{self, DateTime};
use jiff::tz::TimeZone;
use jiff::Zoned;

use nlcal_core::{Parser, ParsingContext};

/// Midnight of Monday 2024-01-15.
#[must_use]
pub fn monday() -> DateTime {
    civil::date(2024, 1, 15).at(0, 0, 0, 0)
}

/// Monday 2024-01-15 at the given wall clock time.
#[must_use]
pub fn monday_at(hour: i8, minute: i8) -> DateTime {
    civil::date(2024, 1, 15).at(hour, minute, 0, 0)
}

/// A reference instant in UTC.
///
/// # Panics
///
/// Panics if the date time cannot be placed in UTC.
#[must_use]
pub fn reference(datetime: DateTime) -> Zoned {
    datetime.to_zoned(TimeZone::UTC).unwrap()
}

/// A parser with the built-in catalog anchored at `datetime` in UTC.
#[must_use]
pub fn parser_at(datetime: DateTime) -> Parser {
    Parser::new(ParsingContext::new(reference(datetime)))
}

/// A parser anchored at midnight of Monday 2024-01-15 in UTC.
#[must_use]
pub fn test_parser() -> Parser {
    parser_at(monday())
}
