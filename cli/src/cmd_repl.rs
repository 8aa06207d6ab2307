// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};

use clap::{ArgMatches, Command};
use colored::Colorize;
use nlcal_core::{Config, Parser, ParsingContext};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::arg::PhraseArgs;
use crate::cmd_examples::write_examples;
use crate::formatter::ResultFormatter;
use crate::util::{OutputFormat, build_context, parse_datetime};

const PROMPT: &str = "nlcal> ";

const HELP: &str = "\
Commands:
  help                       Show this help
  exit, quit                 Leave the shell
  parse <text>               Turn a phrase into an event
  details <text>             Show the components of a phrase
  config                     Show the current parsing context
  set timezone <tz>          Use another time zone, keeping the wall clock time
  set locale <locale>        Use another locale
  set refdate <datetime>     Resolve against another date, YYYY-MM-DD [HH:MM] or HH:MM
  examples                   Show example phrases
  clear                      Clear the screen

Any other input is shown with its components, then parsed.";

#[derive(Debug, Clone)]
pub struct CmdRepl {
    pub at: Option<String>,
    pub timezone: Option<String>,
}

impl CmdRepl {
    pub const NAME: &str = "repl";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Start the interactive shell, the default command")
            .arg(PhraseArgs::at())
            .arg(PhraseArgs::timezone())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            at: PhraseArgs::get_at(matches),
            timezone: PhraseArgs::get_timezone(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        let context = build_context(config, self.at.as_deref(), self.timezone.as_deref())?;
        let repl = Repl::new(context);

        println!("{} - type {} for commands", "nlcal".bold(), "help".cyan());
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{PROMPT}");
            io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                println!();
                break;
            };

            let mut stdout = io::stdout().lock();
            let flow = match ReplCommand::parse(&line) {
                Ok(command) => repl.execute(command, &mut stdout),
                Err(e) => Err(e.into()),
            };
            match flow {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(stdout, "{} {}", "Error:".red(), e)?,
            }
        }
        Ok(())
    }
}

/// One line of input to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Parse(String),
    Details(String),
    Config,
    Set(Setting),
    Examples,
    Clear,

    /// A blank line.
    Empty,

    /// Input that is not a command.
    Phrase(String),
}

/// A context field changed by `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Timezone(String),
    Locale(String),
    RefDate(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head.to_lowercase().as_str() {
            "" => ReplCommand::Empty,
            "help" | "?" if rest.is_empty() => ReplCommand::Help,
            "exit" | "quit" if rest.is_empty() => ReplCommand::Exit,
            "config" if rest.is_empty() => ReplCommand::Config,
            "examples" if rest.is_empty() => ReplCommand::Examples,
            "clear" if rest.is_empty() => ReplCommand::Clear,
            "parse" => ReplCommand::Parse(required(rest, "parse <text>")?),
            "details" => ReplCommand::Details(required(rest, "details <text>")?),
            "set" => ReplCommand::Set(Setting::parse(rest)?),
            _ => ReplCommand::Phrase(line.to_string()),
        };
        Ok(command)
    }
}

impl Setting {
    fn parse(s: &str) -> Result<Self, String> {
        const USAGE: &str = "set timezone|locale|refdate <value>";
        let (key, value) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let value = required(value.trim(), USAGE)?;
        match key.to_lowercase().as_str() {
            "timezone" | "tz" => Ok(Setting::Timezone(value)),
            "locale" => Ok(Setting::Locale(value)),
            "refdate" => Ok(Setting::RefDate(value)),
            _ => Err(format!("Unknown setting '{key}', usage: {USAGE}")),
        }
    }
}

fn required(value: &str, usage: &str) -> Result<String, String> {
    match value.is_empty() {
        true => Err(format!("Usage: {usage}")),
        false => Ok(value.to_string()),
    }
}

/// Whether the shell keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The state of an interactive session.
#[derive(Debug)]
pub struct Repl {
    parser: Parser,
    formatter: ResultFormatter,
}

impl Repl {
    pub fn new(context: ParsingContext) -> Self {
        Self {
            parser: Parser::new(context),
            formatter: ResultFormatter::new(OutputFormat::Table),
        }
    }

    pub fn context(&self) -> ParsingContext {
        self.parser.context().as_ref().clone()
    }

    pub fn execute(
        &self,
        command: ReplCommand,
        w: &mut impl io::Write,
    ) -> Result<Flow, Box<dyn Error>> {
        tracing::debug!(?command, "executing shell command");
        match command {
            ReplCommand::Help => writeln!(w, "{HELP}")?,
            ReplCommand::Exit => return Ok(Flow::Exit),
            ReplCommand::Parse(text) => {
                let result = self.parser.parse_to_calendar(&text);
                self.formatter.write_result(w, &result)?;
            }
            ReplCommand::Details(text) => {
                let result = self.parser.parse_to_calendar(&text);
                self.formatter.write_details(w, &result, None)?;
            }
            ReplCommand::Config => self.write_config(w)?,
            ReplCommand::Set(setting) => {
                let context = self.apply(setting)?;
                self.parser.set_context(context);
                self.write_config(w)?;
            }
            ReplCommand::Examples => write_examples(w, Some(&self.parser))?,
            ReplCommand::Clear => write!(w, "\x1B[2J\x1B[1;1H")?,
            ReplCommand::Empty => {}
            ReplCommand::Phrase(text) => {
                let result = self.parser.parse_to_calendar(&text);
                self.formatter.write_details(w, &result, None)?;
                writeln!(w)?;
                self.formatter.write_result(w, &result)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Builds the context that replaces the current one.
    fn apply(&self, setting: Setting) -> Result<ParsingContext, Box<dyn Error>> {
        let context = self.context();
        let context = match setting {
            Setting::Timezone(tz) => context.with_timezone(&tz)?,
            Setting::Locale(locale) => context.with_locale(locale),
            Setting::RefDate(value) => {
                let datetime = parse_datetime(context.reference(), &value)?;
                context.with_reference_datetime(datetime)?
            }
        };
        Ok(context)
    }

    fn write_config(&self, w: &mut impl io::Write) -> io::Result<()> {
        let context = self.parser.context();
        let preferences = context.preferences();
        let hours = preferences.fuzzy_hours;
        writeln!(w, "{} {}", "Timezone:".bold(), context.timezone_name())?;
        writeln!(w, "{} {}", "Locale:".bold(), context.locale())?;
        writeln!(
            w,
            "{} {}",
            "Reference:".bold(),
            context.reference().strftime("%a %Y-%m-%d %H:%M")
        )?;
        writeln!(w, "{} {}", "Reject invalid:".bold(), preferences.reject_invalid)?;
        writeln!(
            w,
            "{} morning {}:00, afternoon {}:00, evening {}:00, night {}:00",
            "Fuzzy hours:".bold(),
            hours.morning,
            hours.afternoon,
            hours.evening,
            hours.night
        )
    }
}
