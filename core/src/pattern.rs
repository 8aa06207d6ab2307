// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Pattern catalog: the rules that recognize temporal fragments in text.
//!
//! Every pattern pairs a regular expression with a builder. The regex finds candidate spans,
//! and the builder turns the captures into a [`ComponentValue`], or `None` when the captured
//! text is not a valid instance (hour 25, February 30th, ...).

mod date;
mod interval;
mod recurrence;
mod time;

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::{Captures, Regex};

use crate::component::ComponentValue;
use crate::context::ParsingContext;

/// Turns the captures of one match into a component value.
pub type BuildFn = dyn Fn(&Captures<'_>, &ParsingContext) -> Option<ComponentValue> + Send + Sync;

/// The family a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternDomain {
    /// Times of day.
    Time,

    /// Dates, weekdays and months.
    Date,

    /// Ranges between two times.
    Interval,

    /// Repeat rules.
    Recurrence,

    /// Patterns registered by the caller.
    Custom,
}

impl fmt::Display for PatternDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatternDomain::Time => "time",
            PatternDomain::Date => "date",
            PatternDomain::Interval => "interval",
            PatternDomain::Recurrence => "recurrence",
            PatternDomain::Custom => "custom",
        };
        f.write_str(s)
    }
}

/// An immutable matching rule.
#[derive(Clone)]
pub struct Pattern {
    name: String,
    domain: PatternDomain,
    regex: Regex,
    confidence: f64,
    priority: i32,
    build: Arc<BuildFn>,
}

impl Pattern {
    /// Creates a pattern from a regular expression source.
    ///
    /// The confidence is clamped into `[0, 1]`.
    pub fn new<F>(
        name: impl Into<String>,
        domain: PatternDomain,
        regex: &str,
        confidence: f64,
        priority: i32,
        build: F,
    ) -> Result<Self, PatternError>
    where
        F: Fn(&Captures<'_>, &ParsingContext) -> Option<ComponentValue> + Send + Sync + 'static,
    {
        let name = name.into();
        let regex = Regex::new(regex).map_err(|e| PatternError {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self::with_regex(name, domain, regex, confidence, priority, build))
    }

    /// Creates a pattern from an already compiled regular expression.
    pub fn with_regex<F>(
        name: impl Into<String>,
        domain: PatternDomain,
        regex: Regex,
        confidence: f64,
        priority: i32,
        build: F,
    ) -> Self
    where
        F: Fn(&Captures<'_>, &ParsingContext) -> Option<ComponentValue> + Send + Sync + 'static,
    {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };

        Self {
            name: name.into(),
            domain,
            regex,
            confidence,
            priority,
            build: Arc::new(build),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> PatternDomain {
        self.domain
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Runs the builder on one match.
    pub fn build(&self, captures: &Captures<'_>, context: &ParsingContext) -> Option<ComponentValue> {
        (self.build)(captures, context)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("regex", &self.regex.as_str())
            .field("confidence", &self.confidence)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Patterns ordered by priority, highest first.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English catalog.
    pub fn builtin() -> Self {
        static BUILTIN: OnceLock<PatternCatalog> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let mut catalog = PatternCatalog::new();
                time::patterns()
                    .into_iter()
                    .chain(date::patterns())
                    .chain(interval::patterns())
                    .chain(recurrence::patterns())
                    .for_each(|p| catalog.push(p));
                catalog
            })
            .clone()
    }

    /// Adds a pattern, keeping the catalog ordered by priority.
    ///
    /// Patterns of equal priority keep their insertion order.
    pub fn push(&mut self, pattern: Pattern) {
        let at = self
            .patterns
            .partition_point(|p| p.priority >= pattern.priority);
        self.patterns.insert(at, pattern);
    }

    #[must_use]
    pub fn with(mut self, pattern: Pattern) -> Self {
        self.push(pattern);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }
}

/// A custom pattern whose regular expression does not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    pub name: String,
    pub reason: String,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid pattern '{}': {}", self.name, self.reason)
    }
}

impl Error for PatternError {}

/// Compiles a built-in regex.
fn builtin_regex(re: &str) -> Regex {
    Regex::new(re).unwrap()
}

/// Parses a captured group as an integer.
fn capture_int(captures: &Captures<'_>, i: usize) -> Option<i64> {
    captures.get(i).and_then(|m| m.as_str().parse().ok())
}
