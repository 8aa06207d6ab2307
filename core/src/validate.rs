// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::component::ComponentKind;
use crate::parser::ParsedPhrase;

/// Whether a phrase carries enough to build an event, and what looks off about it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Validation {
    pub is_valid: bool,

    /// Kinds whose absence makes the phrase invalid.
    pub missing: Vec<ComponentKind>,

    pub warnings: Vec<ValidationWarning>,
}

/// A non-fatal finding about a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarning {
    /// The phrase has no time, date or weekday.
    NoTemporalReference,

    /// More than one time of day survived selection.
    MultipleTimes,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::NoTemporalReference => f.write_str("No temporal reference found"),
            ValidationWarning::MultipleTimes => {
                f.write_str("Multiple time components found - may be ambiguous")
            }
        }
    }
}

impl serde::Serialize for ValidationWarning {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn validate(phrase: &ParsedPhrase) -> Validation {
    let mut missing = Vec::new();
    let mut warnings = Vec::new();

    let anchored = phrase.components.iter().any(|c| c.kind().is_temporal_anchor());
    if !anchored {
        missing.extend([ComponentKind::Time, ComponentKind::Date]);
        warnings.push(ValidationWarning::NoTemporalReference);
    }

    if phrase.components_of(ComponentKind::Time).count() > 1 {
        warnings.push(ValidationWarning::MultipleTimes);
    }

    Validation {
        is_valid: anchored,
        missing,
        warnings,
    }
}
