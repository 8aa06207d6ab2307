// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) output for resolved events.

use std::io::{self, Write};

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::event::EventDescriptor;

const PRODID: &str = "-//nlcal//nlcal 0.1//EN";
const FOLD: &[u8] = b"\r\n ";

/// Formatting options for the iCalendar writer.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding, `None` to never fold.
    ///
    /// Default: `Some(75)`.
    pub folding: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { folding: Some(75) }
    }
}

impl FormatOptions {
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Writes a calendar holding one event.
    ///
    /// `stamp` is the creation time written as `DTSTAMP`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, event: &EventDescriptor, stamp: &Zoned, w: &mut impl Write) -> io::Result<()> {
        let mut formatter = Formatter { writer: w, options: *self };
        write_calendar(&mut formatter, event, stamp)
    }

    /// Writes a calendar holding one event to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to_string(&self, event: &EventDescriptor, stamp: &Zoned) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(event, stamp, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Formats an event with the default options, stamped with the current time.
///
/// # Errors
/// Returns an error if the output cannot be built.
pub fn to_ics_string(event: &EventDescriptor) -> io::Result<String> {
    FormatOptions::default().write_to_string(event, &Zoned::now())
}

struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> Formatter<W> {
    /// Writes one content line, folded and terminated by CRLF.
    fn line(&mut self, name: &str, value: &str) -> io::Result<()> {
        let line = format!("{name}:{value}");
        let Some(max_len) = self.options.folding else {
            self.writer.write_all(line.as_bytes())?;
            return self.writer.write_all(b"\r\n");
        };

        let mut remaining = line.as_str();
        let mut limit = max_len;
        loop {
            let len = safe_split(remaining, limit);
            let (head, tail) = remaining.split_at(len);
            self.writer.write_all(head.as_bytes())?;
            if tail.is_empty() {
                break;
            }
            self.writer.write_all(FOLD)?;
            remaining = tail;
            limit = max_len.saturating_sub(1).max(1);
        }
        self.writer.write_all(b"\r\n")
    }

    fn with_block(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Self) -> io::Result<()>,
    ) -> io::Result<()> {
        self.line("BEGIN", name)?;
        f(self)?;
        self.line("END", name)
    }
}

/// The longest prefix of at most `max` octets that ends on a char boundary, and never
/// empty while `s` is not.
fn safe_split(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }

    let mut len = max;
    while len > 0 && !s.is_char_boundary(len) {
        len -= 1;
    }
    if len == 0 {
        s.chars().next().map_or(0, char::len_utf8)
    } else {
        len
    }
}

fn write_calendar<W: Write>(
    f: &mut Formatter<W>,
    event: &EventDescriptor,
    stamp: &Zoned,
) -> io::Result<()> {
    f.with_block("VCALENDAR", |f| {
        f.line("VERSION", "2.0")?;
        f.line("PRODID", PRODID)?;
        f.line("CALSCALE", "GREGORIAN")?;
        write_event(f, event, stamp)
    })
}

fn write_event<W: Write>(
    f: &mut Formatter<W>,
    event: &EventDescriptor,
    stamp: &Zoned,
) -> io::Result<()> {
    f.with_block("VEVENT", |f| {
        f.line("UID", &uuid::Uuid::new_v4().to_string())?;
        f.line("DTSTAMP", &format_utc(stamp))?;
        f.line(&format!("DTSTART;TZID={}", event.timezone), &format_local(&event.start))?;
        if let Some(end) = &event.end {
            f.line(&format!("DTEND;TZID={}", event.timezone), &format_local(end))?;
        } else if let Some(duration) = event.duration {
            f.line("DURATION", &duration.to_string())?;
        }

        let summary = event.summary.as_deref().unwrap_or("New Event");
        f.line("SUMMARY", &escape_text(summary))?;
        if let Some(location) = &event.location {
            f.line("LOCATION", &escape_text(location))?;
        }
        if let Some(rule) = &event.recurrence {
            f.line("RRULE", &rule.to_rrule_in(event.start.time_zone()))?;
        }

        for reminder in &event.reminders {
            f.with_block("VALARM", |f| {
                f.line("ACTION", reminder.kind.as_ref())?;
                f.line("TRIGGER", &reminder.trigger())?;
                f.line("DESCRIPTION", &escape_text(summary))
            })?;
        }
        Ok(())
    })
}

fn format_local(zoned: &Zoned) -> String {
    zoned.strftime("%Y%m%dT%H%M%S").to_string()
}

fn format_utc(zoned: &Zoned) -> String {
    zoned
        .with_time_zone(TimeZone::UTC)
        .strftime("%Y%m%dT%H%M%SZ")
        .to_string()
}

/// Escapes a TEXT value.
fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            c => escaped.push(c),
        }
    }
    escaped
}
