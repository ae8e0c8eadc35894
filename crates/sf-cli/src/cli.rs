//! Argument definitions

use crate::commands::AnalyzeArgs;
use crate::config::{AppConfig, LogFormat};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use sf_core::{Application, Frequency, Stakeholder, TimeRequired};
use std::path::PathBuf;

fn parse_yes_no(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "ja" | "true" => Ok(true),
        "no" | "nein" | "false" => Ok(false),
        other => Err(format!("expected yes or no, got {other:?}")),
    }
}

/// Command-line interface of `solution-finder`
#[must_use]
pub fn command() -> Command {
    Command::new("solution-finder")
        .version(sf_core::VERSION)
        .about("Process intake and compliance result viewer")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Analysis API root"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter when RUST_LOG is unset"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .value_parser(|s: &str| s.parse::<LogFormat>())
                .help("Log output format: pretty or json"),
        )
        .arg(
            Arg::new("history-file")
                .long("history-file")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("JSON file holding submission history"),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .global(true)
                .help("Signed-in user id; history is only kept when set"),
        )
        .subcommand(Command::new("catalog").about("List accepted answers for every question"))
        .subcommand(
            Command::new("analyze")
                .about("Answer the intake questions and submit them for analysis")
                .arg(
                    Arg::new("description")
                        .long("description")
                        .default_value("")
                        .help("Process description (at least 20 characters)"),
                )
                .arg(
                    Arg::new("app")
                        .long("app")
                        .action(ArgAction::Append)
                        .value_parser(|s: &str| s.parse::<Application>())
                        .help("Application involved; repeat for several"),
                )
                .arg(
                    Arg::new("time")
                        .long("time")
                        .value_parser(|s: &str| s.parse::<TimeRequired>())
                        .help("Time per execution"),
                )
                .arg(
                    Arg::new("frequency")
                        .long("frequency")
                        .value_parser(|s: &str| s.parse::<Frequency>())
                        .help("How often the process runs"),
                )
                .arg(
                    Arg::new("stakeholder")
                        .long("stakeholder")
                        .action(ArgAction::Append)
                        .value_parser(|s: &str| s.parse::<Stakeholder>())
                        .help("Who benefits; repeat for several"),
                )
                .arg(
                    Arg::new("personal-data")
                        .long("personal-data")
                        .value_parser(parse_yes_no)
                        .help("Whether personal data is processed: yes or no"),
                ),
        )
        .subcommand(
            Command::new("result")
                .about("Show the analysis of a session")
                .arg(Arg::new("session-id").required(true).help("Session returned by analyze")),
        )
        .subcommand(Command::new("history").about("List your past submissions, newest first"))
        .subcommand(
            Command::new("export")
                .about("Export your stored data as CSV")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Write to this file instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete all of your stored submissions")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the deletion"),
                ),
        )
}

/// Answers of the `analyze` subcommand
#[must_use]
pub fn analyze_args(matches: &ArgMatches) -> AnalyzeArgs {
    AnalyzeArgs {
        description: matches
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default(),
        applications: matches
            .get_many::<Application>("app")
            .map(|apps| apps.copied().collect())
            .unwrap_or_default(),
        time_required: matches.get_one::<TimeRequired>("time").copied(),
        frequency: matches.get_one::<Frequency>("frequency").copied(),
        stakeholders: matches
            .get_many::<Stakeholder>("stakeholder")
            .map(|s| s.copied().collect())
            .unwrap_or_default(),
        uses_personal_data: matches.get_one::<bool>("personal-data").copied(),
    }
}

/// Config file given with `--config`
#[must_use]
pub fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("config").cloned()
}

/// Apply flag overrides on top of file and environment settings
#[must_use]
pub fn apply_overrides(mut config: AppConfig, matches: &ArgMatches) -> AppConfig {
    if let Some(url) = matches.get_one::<String>("base-url") {
        config = config.with_base_url(url.clone());
    }
    if let Some(&secs) = matches.get_one::<u64>("timeout") {
        config = config.with_timeout_secs(secs);
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config = config.with_log_level(level.clone());
    }
    if let Some(&format) = matches.get_one::<LogFormat>("log-format") {
        config = config.with_log_format(format);
    }
    if let Some(path) = matches.get_one::<PathBuf>("history-file") {
        config = config.with_history_path(path.clone());
    }
    if let Some(user) = matches.get_one::<String>("user") {
        config = config.with_user(user.clone());
    }
    config
}
