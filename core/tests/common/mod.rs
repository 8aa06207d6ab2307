// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Reference instants and parsers anchored at them (fixtures)
//! - Custom assertion helpers

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_kinds, assert_no_overlap, assert_starts_at};
#[allow(unused_imports)]
pub use fixtures::{monday, monday_at, parser_at, reference, test_parser};
