// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use jiff::civil::DateTime;

use nlcal_core::{ComponentKind, EventDescriptor, ParsedPhrase};

/// Asserts the kinds of the components of a phrase, in position order.
///
/// # Panics
///
/// Panics if the kinds differ.
pub fn assert_kinds(phrase: &ParsedPhrase, expected: &[ComponentKind]) {
    let kinds: Vec<_> = phrase.components.iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, expected, "Component kinds mismatch for {:?}", phrase.text);
}

/// Asserts that the components are ordered, disjoint, and point at their own text.
///
/// # Panics
///
/// Panics if two components overlap, are out of order, or a span does not match its text.
pub fn assert_no_overlap(phrase: &ParsedPhrase) {
    for c in &phrase.components {
        assert!(c.start < c.end, "Empty span {c:?}");
        assert_eq!(
            phrase.text.get(c.start..c.end),
            Some(c.text.as_str()),
            "Span does not match text"
        );
    }
    for pair in phrase.components.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "Overlapping or unordered components {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Asserts the wall clock start of an event.
///
/// # Panics
///
/// Panics if the start differs.
#[allow(dead_code)]
pub fn assert_starts_at(event: &EventDescriptor, expected: DateTime) {
    assert_eq!(event.start.datetime(), expected, "Event start mismatch");
}
