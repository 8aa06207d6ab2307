// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Turns short natural-language phrases such as `every tue afternoon 5pm` into calendar events.
//!
//! A [`Parser`] runs its [`PatternCatalog`] over a phrase, keeps the non-overlapping matches as
//! [`Component`]s, and resolves them against a [`ParsingContext`] into an [`EventDescriptor`].

mod component;
mod config;
mod context;
mod datetime;
mod event;
mod extract;
mod ics;
mod parser;
mod pattern;
mod recurrence;
mod resolve;
mod scrape;
mod select;
mod validate;

pub use crate::component::{
    Component, ComponentKind, ComponentValue, DateValue, Meridiem, TimeOfDay,
};
pub use crate::config::{APP_NAME, Config, ConfigHour, FuzzyConfig};
pub use crate::context::{ContextError, FuzzyHours, ParsingContext, Preferences};
pub use crate::event::{EventDescriptor, EventDuration, Reminder, ReminderKind};
pub use crate::extract::{Candidate, extract};
pub use crate::ics::{FormatOptions, to_ics_string};
pub use crate::parser::{CalendarResult, ParsedPhrase, Parser};
pub use crate::pattern::{BuildFn, Pattern, PatternCatalog, PatternDomain, PatternError};
pub use crate::recurrence::{Frequency, RecurrenceRule, WeekDay};
pub use crate::resolve::resolve;
pub use crate::select::select_components;
pub use crate::validate::{Validation, ValidationWarning, validate};
