// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::component::Component;
use crate::context::ParsingContext;
use crate::pattern::{Pattern, PatternCatalog};

/// A match of one pattern, before conflicts with other matches are resolved.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub component: Component,
    pub pattern: &'a Pattern,
}

/// Runs every pattern of the catalog over the text.
///
/// Matches of different patterns may overlap. Matches whose builder rejects the captured
/// values are dropped. The result is in catalog order, then position order.
pub fn extract<'a>(
    text: &str,
    catalog: &'a PatternCatalog,
    context: &ParsingContext,
) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::new();
    for pattern in catalog.iter() {
        for captures in pattern.regex().captures_iter(text) {
            let Some(m) = captures.get(0) else {
                continue;
            };
            if m.is_empty() {
                continue;
            }

            let Some(value) = pattern.build(&captures, context) else {
                tracing::trace!(pattern = pattern.name(), text = m.as_str(), "discarding match");
                continue;
            };

            let metadata = BTreeMap::from([
                ("pattern".to_string(), pattern.name().to_string()),
                ("domain".to_string(), pattern.domain().to_string()),
            ]);

            let utf16_start = text[..m.start()].encode_utf16().count();
            candidates.push(Candidate {
                component: Component {
                    text: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                    utf16_start,
                    utf16_end: utf16_start + m.as_str().encode_utf16().count(),
                    value,
                    confidence: pattern.confidence(),
                    priority: pattern.priority(),
                    metadata,
                },
                pattern,
            });
        }
    }
    candidates
}
