// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use nlcal_core::{ComponentKind, Config, Parser};

use crate::arg::{CommonArgs, PhraseArgs};
use crate::formatter::ResultFormatter;
use crate::util::{OutputFormat, build_context};

#[derive(Debug, Clone)]
pub struct CmdDetails {
    pub text: String,
    pub kind: Option<ComponentKind>,
    pub at: Option<String>,
    pub timezone: Option<String>,

    pub output_format: OutputFormat,
}

impl CmdDetails {
    pub const NAME: &str = "details";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Show the components recognized in a phrase")
            .arg(PhraseArgs::text())
            .arg(PhraseArgs::kind())
            .arg(PhraseArgs::at())
            .arg(PhraseArgs::timezone())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            text: PhraseArgs::get_text(matches),
            kind: PhraseArgs::get_kind(matches),
            at: PhraseArgs::get_at(matches),
            timezone: PhraseArgs::get_timezone(matches),

            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing phrase details...");
        let context = build_context(config, self.at.as_deref(), self.timezone.as_deref())?;
        let parser = Parser::new(context);
        let result = parser.parse_to_calendar(&self.text);

        ResultFormatter::new(self.output_format).write_details(
            &mut io::stdout().lock(),
            &result,
            self.kind,
        )
    }
}
