// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use jiff::Zoned;

use crate::component::{Component, ComponentKind};
use crate::context::ParsingContext;
use crate::event::EventDescriptor;
use crate::extract::extract;
use crate::pattern::PatternCatalog;
use crate::resolve::resolve;
use crate::select::select_components;
use crate::validate::{Validation, validate};

/// The components recognized in one phrase, with the context they were recognized in.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParsedPhrase {
    pub text: String,

    /// Non-overlapping components ordered by position.
    pub components: Vec<Component>,

    /// The instant relative expressions were resolved against.
    pub reference: Zoned,

    /// IANA name of the reference time zone.
    pub timezone: String,
}

impl ParsedPhrase {
    /// Components of one kind, in position order.
    pub fn components_of(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind() == kind)
    }

    /// The most confident component of one kind, the earliest one on ties.
    pub fn best(&self, kind: ComponentKind) -> Option<&Component> {
        most_confident(self.components_of(kind))
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.components_of(kind).next().is_some()
    }

    /// Components grouped by kind.
    pub fn group_by_kind(&self) -> BTreeMap<ComponentKind, Vec<Component>> {
        let mut groups: BTreeMap<ComponentKind, Vec<Component>> = BTreeMap::new();
        for component in &self.components {
            groups.entry(component.kind()).or_default().push(component.clone());
        }
        groups
    }
}

pub(crate) fn most_confident<'a>(
    components: impl Iterator<Item = &'a Component>,
) -> Option<&'a Component> {
    components.reduce(|best, c| if c.confidence > best.confidence { c } else { best })
}

/// Everything the shell shows for one phrase.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CalendarResult {
    pub phrase: ParsedPhrase,
    pub event: Option<EventDescriptor>,
    pub validation: Validation,
}

/// Turns phrases into components and events.
///
/// The parser shares its catalog and swaps its context as a whole, so a parse running while
/// the context is replaced sees either the old or the new context, never a mix.
#[derive(Debug)]
pub struct Parser {
    catalog: Arc<PatternCatalog>,
    context: RwLock<Arc<ParsingContext>>,
}

impl Parser {
    /// Creates a parser with the built-in patterns.
    pub fn new(context: ParsingContext) -> Self {
        Self::with_catalog(PatternCatalog::builtin(), context)
    }

    pub fn with_catalog(catalog: PatternCatalog, context: ParsingContext) -> Self {
        Self {
            catalog: Arc::new(catalog),
            context: RwLock::new(Arc::new(context)),
        }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// A snapshot of the current context.
    pub fn context(&self) -> Arc<ParsingContext> {
        self.context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the context used by later parses.
    pub fn set_context(&self, context: ParsingContext) {
        tracing::debug!(?context, "replacing parsing context");
        *self.context.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(context);
    }

    /// Recognizes the components of a phrase against the current context.
    #[tracing::instrument(skip(self))]
    pub fn parse(&self, text: &str) -> ParsedPhrase {
        let context = self.context();
        self.parse_with(text, &context)
    }

    /// Recognizes the components of a phrase against an explicit context.
    #[tracing::instrument(skip(self, context))]
    pub fn parse_with(&self, text: &str, context: &ParsingContext) -> ParsedPhrase {
        let candidates = extract(text, &self.catalog, context);
        let candidate_count = candidates.len();
        let components = select_components(candidates);
        tracing::debug!(
            candidates = candidate_count,
            selected = components.len(),
            "parsed phrase"
        );

        ParsedPhrase {
            text: text.to_string(),
            components,
            reference: context.reference().clone(),
            timezone: context.timezone_name(),
        }
    }

    /// Resolves a parsed phrase into an event.
    ///
    /// Returns `None` for a phrase without temporal reference when the context rejects
    /// invalid phrases.
    pub fn to_event(&self, phrase: &ParsedPhrase) -> Option<EventDescriptor> {
        if self.context().preferences().reject_invalid && !validate(phrase).is_valid {
            tracing::debug!(text = %phrase.text, "rejecting phrase without temporal reference");
            return None;
        }
        Some(resolve(phrase))
    }

    /// Parses, validates and resolves a phrase in one go.
    pub fn parse_to_calendar(&self, text: &str) -> CalendarResult {
        let phrase = self.parse(text);
        let validation = validate(&phrase);
        let event = self.to_event(&phrase);
        CalendarResult {
            phrase,
            event,
            validation,
        }
    }

    /// The components of a phrase grouped by kind.
    pub fn details(&self, text: &str) -> BTreeMap<ComponentKind, Vec<Component>> {
        self.parse(text).group_by_kind()
    }
}
