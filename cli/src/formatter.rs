// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeMap, error::Error, io};

use colored::{Color, Colorize};
use nlcal_core::{
    CalendarResult, Component, ComponentKind, EventDescriptor, Validation, to_ics_string,
};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::OutputFormat;

/// Writes parse results in the selected output format.
#[derive(Debug, Clone, Copy)]
pub struct ResultFormatter {
    format: OutputFormat,
    verbose: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Writes the event of a phrase, preceded by its components when verbose.
    pub fn write_result(
        &self,
        w: &mut impl io::Write,
        result: &CalendarResult,
    ) -> Result<(), Box<dyn Error>> {
        match self.format {
            OutputFormat::Table => {
                if self.verbose {
                    write_components(w, &result.phrase.components)?;
                    writeln!(w)?;
                }
                match &result.event {
                    Some(event) => write_event(w, event)?,
                    None => writeln!(w, "{}", "No event could be built from the phrase".yellow())?,
                }
                write_warnings(w, &result.validation)?;
            }
            OutputFormat::Json => {
                let json = match self.verbose {
                    true => serde_json::to_string_pretty(result)?,
                    false => serde_json::to_string_pretty(&result.event)?,
                };
                writeln!(w, "{json}")?;
            }
            OutputFormat::Ics => {
                let event = result
                    .event
                    .as_ref()
                    .ok_or("No event could be built from the phrase")?;
                for warning in &result.validation.warnings {
                    tracing::warn!(%warning, "phrase is ambiguous");
                }
                write!(w, "{}", to_ics_string(event)?)?;
            }
        }
        Ok(())
    }

    /// Writes the components of a phrase grouped by kind, and its validation.
    pub fn write_details(
        &self,
        w: &mut impl io::Write,
        result: &CalendarResult,
        kind: Option<ComponentKind>,
    ) -> Result<(), Box<dyn Error>> {
        let groups: BTreeMap<ComponentKind, Vec<Component>> = result
            .phrase
            .group_by_kind()
            .into_iter()
            .filter(|(k, _)| kind.is_none_or(|kind| kind == *k))
            .collect();

        match self.format {
            OutputFormat::Table => {
                if groups.is_empty() {
                    writeln!(w, "No components found")?;
                }
                for (kind, components) in &groups {
                    writeln!(w, "{}", kind.to_string().color(kind_color(*kind)).bold())?;
                    write_components(w, components)?;
                }

                let valid = match result.validation.is_valid {
                    true => "yes".green(),
                    false => "no".red(),
                };
                writeln!(w)?;
                writeln!(w, "{} {}", "Valid:".bold(), valid)?;
                if !result.validation.missing.is_empty() {
                    let missing: Vec<_> = result
                        .validation
                        .missing
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    writeln!(w, "{} {}", "Missing:".bold(), missing.join(", "))?;
                }
                write_warnings(w, &result.validation)?;
            }
            OutputFormat::Json => {
                #[derive(serde::Serialize)]
                struct Details<'a> {
                    components: BTreeMap<ComponentKind, Vec<Component>>,
                    validation: &'a Validation,
                }

                let details = Details {
                    components: groups,
                    validation: &result.validation,
                };
                writeln!(w, "{}", serde_json::to_string_pretty(&details)?)?;
            }
            OutputFormat::Ics => return Err("ICS output is only available for events".into()),
        }
        Ok(())
    }
}

fn write_event(w: &mut impl io::Write, event: &EventDescriptor) -> Result<(), Box<dyn Error>> {
    let mut rows = vec![
        Field::new("Summary", event.summary.as_deref().unwrap_or("New Event")),
        Field::new("Start", &format_zoned(&event.start, &event.timezone)),
    ];
    if let Some(end) = &event.end {
        rows.push(Field::new("End", &format_zoned(end, &event.timezone)));
    }
    if let Some(duration) = event.duration {
        rows.push(Field::new("Duration", &format_minutes(duration.minutes())));
    }
    if let Some(location) = &event.location {
        rows.push(Field::new("Location", location));
    }
    if let Some(rule) = &event.recurrence {
        rows.push(Field::new("Repeat", &rule.to_rrule_in(event.start.time_zone())));
    }
    for reminder in &event.reminders {
        let value = format!("{} before", format_minutes(reminder.minutes_before));
        rows.push(Field::new("Reminder", &value));
    }

    let columns = [FieldColumn::Name, FieldColumn::Value];
    Table {
        columns: &columns,
        separator: "  ",
        padding: true,
        data: &rows,
    }
    .write_to(w)
}

fn write_components(
    w: &mut impl io::Write,
    components: &[Component],
) -> Result<(), Box<dyn Error>> {
    let columns = [
        ComponentColumn::Kind,
        ComponentColumn::Span,
        ComponentColumn::Text,
        ComponentColumn::Value,
        ComponentColumn::Confidence,
    ];
    Table {
        columns: &columns,
        separator: "  ",
        padding: true,
        data: components,
    }
    .write_to(w)
}

fn write_warnings(w: &mut impl io::Write, validation: &Validation) -> io::Result<()> {
    for warning in &validation.warnings {
        writeln!(w, "{} {}", "Warning:".yellow(), warning)?;
    }
    Ok(())
}

fn format_zoned(zoned: &jiff::Zoned, timezone: &str) -> String {
    format!("{} ({timezone})", zoned.strftime("%a %Y-%m-%d %H:%M"))
}

fn format_minutes(minutes: i64) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

fn kind_color(kind: ComponentKind) -> Color {
    match kind {
        ComponentKind::Time => Color::Cyan,
        ComponentKind::FuzzyTime => Color::BrightCyan,
        ComponentKind::Date => Color::Green,
        ComponentKind::Weekday => Color::BrightGreen,
        ComponentKind::Month => Color::Yellow,
        ComponentKind::Interval => Color::Magenta,
        ComponentKind::Recurrence => Color::Blue,
    }
}

struct Field {
    name: &'static str,
    value: String,
}

impl Field {
    fn new(name: &'static str, value: &str) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FieldColumn {
    Name,
    Value,
}

impl Column<Field> for FieldColumn {
    fn format(&self, data: &Field) -> String {
        match self {
            FieldColumn::Name => format!("{}:", data.name),
            FieldColumn::Value => data.value.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &Field) -> Option<Color> {
        match self {
            FieldColumn::Name => Some(Color::BrightBlack),
            FieldColumn::Value => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ComponentColumn {
    Kind,
    Span,
    Text,
    Value,
    Confidence,
}

impl Column<Component> for ComponentColumn {
    fn format(&self, data: &Component) -> String {
        match self {
            ComponentColumn::Kind => data.kind().to_string(),
            ComponentColumn::Span => format!("{}..{}", data.start, data.end),
            ComponentColumn::Text => format!("\"{}\"", data.text),
            ComponentColumn::Value => data.value.to_string(),
            ComponentColumn::Confidence => format!("{:.2}", data.confidence),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ComponentColumn::Span | ComponentColumn::Confidence => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &Component) -> Option<Color> {
        match self {
            ComponentColumn::Kind => Some(kind_color(data.kind())),
            _ => None,
        }
    }
}
