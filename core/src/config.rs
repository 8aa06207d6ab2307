// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::Zoned;
use serde::de;

use crate::context::{ContextError, FuzzyHours, ParsingContext, Preferences};

/// The name of the application.
pub const APP_NAME: &str = "nlcal";

/// Configuration of the parser.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Config {
    /// IANA time zone of the reference instant, the system zone when unset.
    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default = "default_locale")]
    pub locale: String,

    /// Refuse to build events from phrases without a time, date or weekday.
    #[serde(default = "default_reject_invalid")]
    pub reject_invalid: bool,

    /// Hours of the fuzzy day-part words.
    #[serde(default)]
    pub fuzzy: FuzzyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: None,
            locale: default_locale(),
            reject_invalid: default_reject_invalid(),
            fuzzy: FuzzyConfig::default(),
        }
    }
}

impl Config {
    /// Builds a parsing context anchored at `now`.
    ///
    /// When a time zone is configured, `now` is converted to it.
    pub fn context(&self, now: Zoned) -> Result<ParsingContext, ContextError> {
        let now = match &self.timezone {
            Some(name) => {
                let tz = jiff::tz::TimeZone::get(name).map_err(|e| {
                    ContextError::UnknownTimeZone {
                        name: name.clone(),
                        reason: e.to_string(),
                    }
                })?;
                now.with_time_zone(tz)
            }
            None => now,
        };

        Ok(ParsingContext::new(now)
            .with_locale(self.locale.clone())
            .with_preferences(self.preferences()))
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            fuzzy_hours: self.fuzzy.hours(),
            reject_invalid: self.reject_invalid,
        }
    }
}

fn default_locale() -> String {
    ParsingContext::DEFAULT_LOCALE.to_string()
}

fn default_reject_invalid() -> bool {
    true
}

/// Hour overrides of the fuzzy day-part words, the built-in hour where unset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct FuzzyConfig {
    #[serde(default)]
    pub morning: Option<ConfigHour>,

    #[serde(default)]
    pub afternoon: Option<ConfigHour>,

    #[serde(default)]
    pub evening: Option<ConfigHour>,

    #[serde(default)]
    pub night: Option<ConfigHour>,
}

impl FuzzyConfig {
    pub fn hours(&self) -> FuzzyHours {
        let defaults = FuzzyHours::default();
        let pick = |hour: Option<ConfigHour>, default| hour.map_or(default, |a| a.0);
        FuzzyHours {
            morning: pick(self.morning, defaults.morning),
            afternoon: pick(self.afternoon, defaults.afternoon),
            evening: pick(self.evening, defaults.evening),
            night: pick(self.night, defaults.night),
        }
    }
}

/// An hour of the day in `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigHour(i8);

impl ConfigHour {
    pub fn get(self) -> i8 {
        self.0
    }
}

impl<'de> serde::Deserialize<'de> for ConfigHour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct HourVisitor;

        impl de::Visitor<'_> for HourVisitor {
            type Value = ConfigHour;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an hour of the day between 0 and 23")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match i8::try_from(value) {
                    Ok(hour) if (0..=23).contains(&hour) => Ok(ConfigHour(hour)),
                    _ => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
                }
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match i64::try_from(value) {
                    Ok(value) => self.visit_i64(value),
                    Err(_) => Err(E::invalid_value(de::Unexpected::Unsigned(value), &self)),
                }
            }
        }

        deserializer.deserialize_i64(HourVisitor)
    }
}
