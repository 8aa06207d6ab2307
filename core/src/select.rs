// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use crate::component::Component;
use crate::extract::Candidate;

/// Picks the non-overlapping candidates that make up a parsed phrase.
///
/// Candidates are ranked by priority, then by confidence band, then by position. Walking the
/// ranking, a candidate is kept only when it does not overlap an already kept one. The result
/// is ordered by position.
///
/// Confidences are meant to tie when they differ by at most 0.1. That pairwise rule is not
/// transitive, so it is approximated by bands of one tenth: `0.80` and `0.89` tie, while `0.89`
/// and `0.91` do not. Built-in patterns that can overlap always differ in priority, so only
/// custom patterns of equal priority see the difference.
pub fn select_components(mut candidates: Vec<Candidate<'_>>) -> Vec<Component> {
    candidates.sort_by(|a, b| rank(&a.component, &b.component));

    let mut selected: Vec<Component> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let component = candidate.component;
        if selected.iter().any(|c| c.overlaps(&component)) {
            tracing::trace!(text = %component.text, kind = %component.kind(), "dropping overlapped");
            continue;
        }
        selected.push(component);
    }

    selected.sort_by_key(|c| c.start);
    selected
}

fn rank(a: &Component, b: &Component) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| confidence_band(b.confidence).cmp(&confidence_band(a.confidence)))
        .then_with(|| a.start.cmp(&b.start))
}

/// Confidences closer than a tenth rank equally. Bands keep the ranking a total order.
fn confidence_band(confidence: f64) -> u8 {
    ((confidence + 1e-9) * 10.0).floor() as u8
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jiff::Zoned;

    use super::*;
    use crate::component::{ComponentKind, ComponentValue, TimeOfDay};
    use crate::context::ParsingContext;
    use crate::extract::extract;
    use crate::pattern::{Pattern, PatternCatalog, PatternDomain};

    fn select(text: &str) -> Vec<Component> {
        let catalog = PatternCatalog::builtin();
        let ctx = ParsingContext::new(Zoned::now());
        select_components(extract(text, &catalog, &ctx))
    }

    fn kinds(components: &[Component]) -> Vec<ComponentKind> {
        components.iter().map(Component::kind).collect()
    }

    #[test]
    fn interval_beats_the_times_it_contains() {
        let components = select("4pm to 8pm");
        assert_eq!(kinds(&components), [ComponentKind::Interval]);
        assert_eq!(components[0].text, "4pm to 8pm");
    }

    #[test]
    fn twelve_hour_time_beats_bare_clock() {
        let components = select("jan 15th 3:30 pm");
        assert_eq!(kinds(&components), [ComponentKind::Date, ComponentKind::Time]);
        assert_eq!(
            components[1].value,
            ComponentValue::Time(TimeOfDay::new(15, 30).unwrap())
        );
    }

    #[test]
    fn iso_date_beats_hyphen_interval() {
        let components = select("2024-01-15 9am");
        assert_eq!(kinds(&components), [ComponentKind::Date, ComponentKind::Time]);
    }

    #[test]
    fn next_weekday_absorbs_weekday() {
        let components = select("next tue 2pm");
        assert_eq!(kinds(&components), [ComponentKind::Date, ComponentKind::Time]);
        assert_eq!(components[0].text, "next tue");
    }

    #[test]
    fn keeps_fuzzy_word_next_to_recurrence() {
        let components = select("every tue afternoon 5pm");
        assert_eq!(
            kinds(&components),
            [
                ComponentKind::Recurrence,
                ComponentKind::FuzzyTime,
                ComponentKind::Time
            ]
        );
    }

    #[test]
    fn orders_output_by_position() {
        let components = select("3pm tomorrow");
        assert_eq!(kinds(&components), [ComponentKind::Time, ComponentKind::Date]);
        assert!(components.windows(2).all(|w| w[0].end <= w[1].start));
    }

    #[test]
    fn equal_rank_prefers_earlier_match() {
        let overlapping = |name: &'static str, hour| {
            Pattern::new(name, PatternDomain::Custom, r"\d+ \d+", 0.9, 1, move |_, _| {
                TimeOfDay::new(hour, 0).map(ComponentValue::Time)
            })
            .unwrap()
        };
        let catalog = PatternCatalog::new()
            .with(overlapping("first", 1))
            .with(overlapping("second", 2));
        let ctx = ParsingContext::new(Zoned::now());

        let components = select_components(extract("1 2 3", &catalog, &ctx));
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].pattern(), Some("first"));
    }

    #[test]
    fn higher_confidence_band_wins_within_priority() {
        let candidate = |start: usize, end: usize, confidence: f64| Component {
            text: "x".repeat(end - start),
            start,
            end,
            utf16_start: start,
            utf16_end: end,
            value: ComponentValue::Month(1),
            confidence,
            priority: 1,
            metadata: BTreeMap::new(),
        };
        let pattern = Pattern::new("p", PatternDomain::Custom, "x", 0.5, 1, |_, _| None).unwrap();
        let candidates = vec![
            Candidate { component: candidate(0, 4, 0.6), pattern: &pattern },
            Candidate { component: candidate(2, 6, 0.95), pattern: &pattern },
        ];

        let components = select_components(candidates);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].start, 2);
    }

    #[test]
    fn confidence_ties_follow_tenth_bands() {
        let candidate = |start: usize, confidence: f64| Component {
            text: "xxxx".to_string(),
            start,
            end: start + 4,
            utf16_start: start,
            utf16_end: start + 4,
            value: ComponentValue::Month(1),
            confidence,
            priority: 1,
            metadata: BTreeMap::new(),
        };
        let pattern = Pattern::new("p", PatternDomain::Custom, "x", 0.5, 1, |_, _| None).unwrap();
        let pick = |first: f64, second: f64| {
            let candidates = vec![
                Candidate { component: candidate(0, first), pattern: &pattern },
                Candidate { component: candidate(2, second), pattern: &pattern },
            ];
            select_components(candidates)[0].start
        };

        // same band, earlier match wins
        assert_eq!(pick(0.80, 0.89), 0);
        // adjacent bands, higher band wins even within 0.1
        assert_eq!(pick(0.89, 0.91), 2);
    }

    #[test]
    fn bands_confidences() {
        assert_eq!(confidence_band(0.95), 9);
        assert_eq!(confidence_band(0.9), 9);
        assert_eq!(confidence_band(0.85), 8);
        assert_eq!(confidence_band(0.7), 7);
        assert_eq!(confidence_band(1.0), 10);
    }
}
