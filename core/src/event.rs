// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use jiff::Zoned;

use crate::recurrence::RecurrenceRule;

/// A calendar event resolved from a phrase.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EventDescriptor {
    /// The words of the phrase that describe what the event is.
    pub summary: Option<String>,

    /// Where the event takes place.
    pub location: Option<String>,

    /// When the event starts, the reference instant when nothing says otherwise.
    pub start: Zoned,

    /// When the event ends, set only by an explicit time range.
    pub end: Option<Zoned>,

    /// How long the event lasts, set only when there is no explicit end.
    pub duration: Option<EventDuration>,

    /// How the event repeats.
    pub recurrence: Option<RecurrenceRule>,

    /// Notifications before the start, in the order they were written.
    pub reminders: Vec<Reminder>,

    /// IANA name of the time zone of `start`.
    pub timezone: String,
}

/// Length of an event with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventDuration {
    minutes: i64,
}

impl EventDuration {
    /// Returns `None` unless the duration is positive.
    pub fn from_minutes(minutes: i64) -> Option<Self> {
        (minutes > 0).then_some(Self { minutes })
    }

    /// Converts fractional hours, rounding to the nearest minute.
    pub fn from_hours(hours: f64) -> Option<Self> {
        if !hours.is_finite() {
            return None;
        }
        Self::from_minutes((hours * 60.0).round() as i64)
    }

    pub fn minutes(self) -> i64 {
        self.minutes
    }
}

/// Formats as an ISO 8601 duration, such as `PT1H30M`.
impl fmt::Display for EventDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes) = (self.minutes / 60, self.minutes % 60);
        f.write_str("PT")?;
        if hours > 0 {
            write!(f, "{hours}H")?;
        }
        if minutes > 0 || hours == 0 {
            write!(f, "{minutes}M")?;
        }
        Ok(())
    }
}

impl serde::Serialize for EventDuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How a reminder is delivered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderKind {
    /// A visible notification.
    #[default]
    Display,

    /// An email message.
    Email,

    /// A sound.
    Audio,
}

const KIND_DISPLAY: &str = "DISPLAY";
const KIND_EMAIL: &str = "EMAIL";
const KIND_AUDIO: &str = "AUDIO";

impl AsRef<str> for ReminderKind {
    fn as_ref(&self) -> &str {
        match self {
            ReminderKind::Display => KIND_DISPLAY,
            ReminderKind::Email => KIND_EMAIL,
            ReminderKind::Audio => KIND_AUDIO,
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ReminderKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            KIND_DISPLAY => Ok(ReminderKind::Display),
            KIND_EMAIL => Ok(ReminderKind::Email),
            KIND_AUDIO => Ok(ReminderKind::Audio),
            _ => Err(()),
        }
    }
}

/// A notification some minutes before the event starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub minutes_before: i64,
}

impl Reminder {
    pub fn display(minutes_before: i64) -> Self {
        Self {
            kind: ReminderKind::Display,
            minutes_before,
        }
    }

    /// The negative offset from the start, such as `-PT15M`.
    pub fn trigger(&self) -> String {
        format!("-PT{}M", self.minutes_before)
    }
}
