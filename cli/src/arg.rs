// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use nlcal_core::ComponentKind;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Arguments describing the phrase to parse and what it is relative to.
#[derive(Debug, Clone, Copy)]
pub struct PhraseArgs;

impl PhraseArgs {
    pub fn text() -> Arg {
        arg!(text: <TEXT> "The phrase to parse, words may be given unquoted")
            .num_args(1..)
    }

    pub fn get_text(matches: &ArgMatches) -> String {
        matches
            .get_many::<String>("text")
            .expect("text is required")
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn at() -> Arg {
        arg!(--at <DATETIME> "Reference date and time, defaults to now")
            .long_help(
                "\
Reference date and time that relative expressions are resolved against, in the format \
YYYY-MM-DD HH:MM, YYYY-MM-DD or HH:MM. Defaults to now.",
            )
    }

    pub fn get_at(matches: &ArgMatches) -> Option<String> {
        matches.get_one("at").cloned()
    }

    pub fn timezone() -> Arg {
        arg!(--timezone <TZ> "IANA time zone of the reference, such as Europe/London")
    }

    pub fn get_timezone(matches: &ArgMatches) -> Option<String> {
        matches.get_one("timezone").cloned()
    }

    pub fn kind() -> Arg {
        arg!(--kind <KIND> "Only show components of this kind")
            .value_parser(value_parser!(ComponentKind))
    }

    pub fn get_kind(matches: &ArgMatches) -> Option<ComponentKind> {
        matches.get_one("kind").copied()
    }
}
