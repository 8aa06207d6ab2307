// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

use jiff::civil::{self, Weekday};
use serde::ser::SerializeStruct;

use crate::recurrence::RecurrenceRule;

/// The kind of a recognized fragment of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentKind {
    /// A time of day, such as `3pm` or `15:30`.
    Time,

    /// A vague time of day, such as `morning` or `noon`.
    #[cfg_attr(feature = "clap", clap(name = "fuzzy-time", alias = "fuzzy"))]
    FuzzyTime,

    /// A calendar date, either absolute or relative to the reference date.
    Date,

    /// A day of the week.
    Weekday,

    /// A month of the year without a day.
    Month,

    /// A range between two times of day.
    Interval,

    /// A repeat rule.
    Recurrence,
}

impl ComponentKind {
    /// All kinds, in display order.
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Time,
        ComponentKind::FuzzyTime,
        ComponentKind::Date,
        ComponentKind::Weekday,
        ComponentKind::Month,
        ComponentKind::Interval,
        ComponentKind::Recurrence,
    ];

    /// Whether this kind anchors a phrase in time on its own.
    pub fn is_temporal_anchor(self) -> bool {
        matches!(
            self,
            ComponentKind::Time | ComponentKind::Date | ComponentKind::Weekday
        )
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComponentKind::Time => "TIME",
            ComponentKind::FuzzyTime => "FUZZY_TIME",
            ComponentKind::Date => "DATE",
            ComponentKind::Weekday => "WEEKDAY",
            ComponentKind::Month => "MONTH",
            ComponentKind::Interval => "INTERVAL",
            ComponentKind::Recurrence => "RECURRENCE",
        };
        f.write_str(s)
    }
}

/// Ante or post meridiem marker of a 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Before noon.
    Am,

    /// After noon.
    Pm,
}

impl Meridiem {
    /// Parses `am` / `pm`, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "am" => Some(Meridiem::Am),
            "pm" => Some(Meridiem::Pm),
            _ => None,
        }
    }

    /// Converts a 12-hour clock hour in `1..=12` to a 24-hour clock hour.
    pub fn to_24h(self, hour: i8) -> Option<i8> {
        if !(1..=12).contains(&hour) {
            return None;
        }

        Some(match (self, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        })
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("am"),
            Meridiem::Pm => f.write_str("pm"),
        }
    }
}

/// A wall clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TimeOfDay {
    hour: i8,
    minute: i8,
}

impl TimeOfDay {
    /// Creates a time, returning `None` unless `hour` is in `0..=23` and `minute` in `0..=59`.
    pub fn new(hour: i64, minute: i64) -> Option<Self> {
        if (0..=23).contains(&hour) && (0..=59).contains(&minute) {
            Some(Self {
                hour: hour as i8,
                minute: minute as i8,
            })
        } else {
            None
        }
    }

    /// Creates a time from a 12-hour clock reading.
    pub fn with_meridiem(hour: i64, minute: i64, meridiem: Meridiem) -> Option<Self> {
        let hour = i8::try_from(hour).ok()?;
        let hour = meridiem.to_24h(hour)?;
        Self::new(hour.into(), minute)
    }

    pub fn hour(self) -> i8 {
        self.hour
    }

    pub fn minute(self) -> i8 {
        self.minute
    }

    /// The same time twelve hours later, if it stays within the day.
    pub(crate) fn shift_to_afternoon(self) -> Option<Self> {
        Self::new(i64::from(self.hour) + 12, self.minute.into())
    }

    pub fn to_civil(self) -> civil::Time {
        civil::time(self.hour, self.minute, 0, 0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The date a `DATE` component points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateValue {
    /// A fixed calendar date.
    Absolute(civil::Date),

    /// A number of days after the reference date.
    Offset(i64),
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Absolute(date) => write!(f, "{date}"),
            DateValue::Offset(days) => write!(f, "{days:+} day(s)"),
        }
    }
}

/// The payload of a component, one variant per [`ComponentKind`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentValue {
    Time(TimeOfDay),

    FuzzyTime {
        /// The hour the word stands for.
        time: TimeOfDay,
        /// The word itself, lowercased.
        word: String,
    },

    Date(DateValue),

    #[serde(serialize_with = "serialize_weekday")]
    Weekday(Weekday),

    /// Month number in `1..=12`.
    Month(i8),

    Interval { start: TimeOfDay, end: TimeOfDay },

    Recurrence(RecurrenceRule),
}

impl ComponentValue {
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentValue::Time(_) => ComponentKind::Time,
            ComponentValue::FuzzyTime { .. } => ComponentKind::FuzzyTime,
            ComponentValue::Date(_) => ComponentKind::Date,
            ComponentValue::Weekday(_) => ComponentKind::Weekday,
            ComponentValue::Month(_) => ComponentKind::Month,
            ComponentValue::Interval { .. } => ComponentKind::Interval,
            ComponentValue::Recurrence(_) => ComponentKind::Recurrence,
        }
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentValue::Time(time) => write!(f, "{time}"),
            ComponentValue::FuzzyTime { time, word } => write!(f, "{word} ({time})"),
            ComponentValue::Date(date) => write!(f, "{date}"),
            ComponentValue::Weekday(weekday) => write!(f, "{weekday:?}"),
            ComponentValue::Month(month) => write!(f, "month {month}"),
            ComponentValue::Interval { start, end } => write!(f, "{start} - {end}"),
            ComponentValue::Recurrence(rule) => write!(f, "{rule}"),
        }
    }
}

fn serialize_weekday<S: serde::Serializer>(weekday: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{weekday:?}"))
}

/// One recognized fragment of the input text.
///
/// `start` and `end` are half-open byte offsets into the parsed text, always on char
/// boundaries, so `&text[start..end] == component.text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub text: String,
    pub start: usize,
    pub end: usize,

    /// The span in UTF-16 code units, for callers that index strings that way.
    pub utf16_start: usize,
    pub utf16_end: usize,

    pub value: ComponentValue,
    pub confidence: f64,
    pub priority: i32,

    /// Diagnostic notes, such as the originating pattern.
    pub metadata: BTreeMap<String, String>,
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        self.value.kind()
    }

    /// Whether the half-open spans of the two components intersect.
    pub fn overlaps(&self, other: &Component) -> bool {
        self.overlaps_span(other.start, other.end)
    }

    pub fn overlaps_span(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    /// The name of the pattern that produced this component.
    pub fn pattern(&self) -> Option<&str> {
        self.metadata.get("pattern").map(String::as_str)
    }
}

impl serde::Serialize for Component {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Component", 10)?;
        s.serialize_field("kind", &self.kind())?;
        s.serialize_field("text", &self.text)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.serialize_field("utf16_start", &self.utf16_start)?;
        s.serialize_field("utf16_end", &self.utf16_end)?;
        s.serialize_field("value", &self.value)?;
        s.serialize_field("confidence", &self.confidence)?;
        s.serialize_field("priority", &self.priority)?;
        s.serialize_field("metadata", &self.metadata)?;
        s.end()
    }
}
