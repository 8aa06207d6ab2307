// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use colored::Colorize;
use nlcal_core::{Config, Parser};

use crate::arg::CommonArgs;
use crate::formatter::ResultFormatter;
use crate::util::{OutputFormat, build_context};

/// Phrases that show what the parser understands.
pub const EXAMPLES: [&str; 10] = [
    "this wed new event 10am",
    "every tue afternoon 5pm at the office",
    "wed 10am",
    "tomorrow 3pm for 1hr",
    "every mon 9am",
    "fri 3pm rem 15 mins before",
    "next tue 2pm",
    "jan 15th 3:30pm",
    "every other sat 9am",
    "mon, thu & sat 2pm",
];

#[derive(Debug, Clone, Copy)]
pub struct CmdExamples {
    pub verbose: bool,
}

impl CmdExamples {
    pub const NAME: &str = "examples";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show example phrases")
            .arg(CommonArgs::verbose().help("Also show the event of each example"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        let parser = match self.verbose {
            true => Some(Parser::new(build_context(config, None, None)?)),
            false => None,
        };
        write_examples(&mut io::stdout().lock(), parser.as_ref())
    }
}

/// Lists the examples, each followed by its event when a parser is given.
pub fn write_examples(
    w: &mut impl io::Write,
    parser: Option<&Parser>,
) -> Result<(), Box<dyn Error>> {
    let formatter = ResultFormatter::new(OutputFormat::Table);
    for (i, example) in EXAMPLES.iter().enumerate() {
        writeln!(w, "{:>2}. {}", i + 1, example.bold())?;
        if let Some(parser) = parser {
            formatter.write_result(w, &parser.parse_to_calendar(example))?;
            writeln!(w)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use nlcal_core::ParsingContext;

    use super::*;

    #[test]
    fn test_every_example_builds_an_event() {
        let parser = Parser::new(ParsingContext::now());
        for example in EXAMPLES {
            let result = parser.parse_to_calendar(example);
            assert!(result.validation.is_valid, "{example}");
            assert!(result.event.is_some(), "{example}");
        }
    }

    #[test]
    fn test_write_examples() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_examples(&mut out, None).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), EXAMPLES.len());
        assert!(out.starts_with(" 1. this wed new event 10am\n"));
    }
}
