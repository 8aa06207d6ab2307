// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use nlcal_core::{Config, Parser};

use crate::arg::{CommonArgs, PhraseArgs};
use crate::formatter::ResultFormatter;
use crate::util::{OutputFormat, build_context};

#[derive(Debug, Clone)]
pub struct CmdParse {
    pub text: String,
    pub at: Option<String>,
    pub timezone: Option<String>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdParse {
    pub const NAME: &str = "parse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("p")
            .about("Turn a phrase into a calendar event")
            .arg(PhraseArgs::text())
            .arg(PhraseArgs::at())
            .arg(PhraseArgs::timezone())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            text: PhraseArgs::get_text(matches),
            at: PhraseArgs::get_at(matches),
            timezone: PhraseArgs::get_timezone(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing phrase...");
        let context = build_context(config, self.at.as_deref(), self.timezone.as_deref())?;
        let parser = Parser::new(context);
        let result = parser.parse_to_calendar(&self.text);

        ResultFormatter::new(self.output_format)
            .with_verbose(self.verbose)
            .write_result(&mut io::stdout().lock(), &result)
    }
}
