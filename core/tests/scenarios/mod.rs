// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios for the nlcal-core crate.
//!
//! These tests run whole phrases through recognition, selection, resolution and validation,
//! the way the command line uses the parser.

mod calendar;
mod configuration;
mod recognition;
mod resolution;
