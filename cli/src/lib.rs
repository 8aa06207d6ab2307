// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command line and interactive shell of nlcal.

mod arg;
mod cli;
mod cmd_details;
mod cmd_examples;
mod cmd_generate_completion;
mod cmd_parse;
mod cmd_repl;
mod config;
mod formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
