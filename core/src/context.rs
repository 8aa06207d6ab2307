// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use jiff::Zoned;
use jiff::civil::DateTime;
use jiff::tz::{Offset, TimeZone};

/// Default hours of the fuzzy day-part words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyHours {
    pub morning: i8,
    pub afternoon: i8,
    pub evening: i8,
    pub night: i8,
}

impl Default for FuzzyHours {
    fn default() -> Self {
        Self {
            morning: 9,
            afternoon: 14,
            evening: 18,
            night: 20,
        }
    }
}

/// User preferences that influence parsing and resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    /// Hours the fuzzy day-part words stand for.
    pub fuzzy_hours: FuzzyHours,

    /// Refuse to build an event from a phrase that has no temporal reference.
    pub reject_invalid: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            fuzzy_hours: FuzzyHours::default(),
            reject_invalid: true,
        }
    }
}

/// Everything a parse needs besides the text itself.
///
/// A context is immutable. To reconfigure a parser, build a new context and replace the old
/// one as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsingContext {
    reference: Zoned,
    locale: String,
    preferences: Preferences,
}

impl ParsingContext {
    pub const DEFAULT_LOCALE: &str = "en-US";

    /// Creates a context anchored at the given instant.
    pub fn new(reference: Zoned) -> Self {
        Self {
            reference,
            locale: Self::DEFAULT_LOCALE.to_string(),
            preferences: Preferences::default(),
        }
    }

    /// Creates a context anchored at the current time in the system time zone.
    pub fn now() -> Self {
        Self::new(Zoned::now())
    }

    /// The "now" every relative expression is resolved against.
    pub fn reference(&self) -> &Zoned {
        &self.reference
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// The IANA name of the reference time zone, `UTC` when it cannot be determined.
    ///
    /// A fixed offset zone is named after its offset, never after the system zone.
    pub fn timezone_name(&self) -> String {
        let tz = self.reference.time_zone();
        if let Some(name) = tz.iana_name() {
            return name.to_string();
        }
        if let Ok(offset) = tz.to_fixed_offset() {
            return fixed_offset_name(offset);
        }

        match iana_time_zone::get_timezone() {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(%err, "failed to look up the system time zone, using UTC");
                "UTC".to_string()
            }
        }
    }

    /// Returns a copy with a different reference instant.
    #[must_use]
    pub fn with_reference(mut self, reference: Zoned) -> Self {
        self.reference = reference;
        self
    }

    /// Returns a copy whose reference is the same wall clock time in another time zone.
    pub fn with_timezone(self, name: &str) -> Result<Self, ContextError> {
        let tz = TimeZone::get(name).map_err(|e| ContextError::UnknownTimeZone {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        let reference = place(self.reference.datetime(), tz)?;
        Ok(self.with_reference(reference))
    }

    /// Returns a copy whose reference is the given wall clock time in the current zone.
    pub fn with_reference_datetime(self, datetime: DateTime) -> Result<Self, ContextError> {
        let reference = place(datetime, self.reference.time_zone().clone())?;
        Ok(self.with_reference(reference))
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }
}

fn place(datetime: DateTime, tz: TimeZone) -> Result<Zoned, ContextError> {
    datetime
        .to_zoned(tz)
        .map_err(|e| ContextError::InvalidReference {
            datetime: datetime.to_string(),
            reason: e.to_string(),
        })
}

/// Errors raised while building a [`ParsingContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The time zone identifier is not in the time zone database.
    UnknownTimeZone { name: String, reason: String },

    /// The reference date and time cannot be placed in the time zone.
    InvalidReference { datetime: String, reason: String },
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::UnknownTimeZone { name, reason } => {
                write!(f, "Unknown time zone '{name}': {reason}")
            }
            ContextError::InvalidReference { datetime, reason } => {
                write!(f, "Invalid reference date '{datetime}': {reason}")
            }
        }
    }
}

impl Error for ContextError {}

/// `Etc/GMT-5` for +05:00 (the `Etc` zones invert the sign), `UTC+05:30` for offsets without one.
fn fixed_offset_name(offset: Offset) -> String {
    let seconds = offset.seconds();
    if seconds == 0 {
        return "UTC".to_string();
    }

    let hours = seconds / 3600;
    if seconds % 3600 == 0 && (-12..=14).contains(&hours) {
        return format!("Etc/GMT{:+}", -hours);
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}
