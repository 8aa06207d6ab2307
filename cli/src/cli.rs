// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use nlcal_core::{APP_NAME, Config};
use tracing_subscriber::EnvFilter;

use crate::cmd_details::CmdDetails;
use crate::cmd_examples::CmdExamples;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_parse::CmdParse;
use crate::cmd_repl::CmdRepl;
use crate::config::parse_config;

/// Run the nlcal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Turn short natural-language phrases into calendar events.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to repl
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/nlcal/config.toml on Linux and MacOS, \
%APPDATA%/nlcal/config.toml on Windows. Built-in defaults apply when the file does not exist.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdParse::command())
            .subcommand(CmdDetails::command())
            .subcommand(CmdExamples::command())
            .subcommand(CmdRepl::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdParse::NAME, matches)) => Parse(CmdParse::from(matches)),
            Some((CmdDetails::NAME, matches)) => Details(CmdDetails::from(matches)),
            Some((CmdExamples::NAME, matches)) => Examples(CmdExamples::from(matches)),
            Some((CmdRepl::NAME, matches)) => Repl(CmdRepl::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Repl(CmdRepl {
                at: None,
                timezone: None,
            }),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        // global, so it may follow the subcommand
        let config = matches
            .subcommand()
            .and_then(|(_, m)| m.get_one::<PathBuf>("config"))
            .or_else(|| matches.get_one("config"))
            .cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Turn a phrase into an event
    Parse(CmdParse),

    /// Show the components of a phrase
    Details(CmdDetails),

    /// Show example phrases
    Examples(CmdExamples),

    /// Start the interactive shell
    Repl(CmdRepl),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::GenerateCompletion(a) => a.run(),
            command => {
                tracing::debug!("parsing configuration...");
                let config = parse_config(config).await?;
                command.run_with(&config).await
            }
        }
    }

    async fn run_with(self, config: &Config) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Parse(a) => a.run(config),
            Details(a) => a.run(config),
            Examples(a) => a.run(config),
            Repl(a) => a.run(config).await,
            GenerateCompletion(a) => a.run(),
        }
    }
}
