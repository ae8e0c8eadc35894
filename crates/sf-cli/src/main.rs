//! `solution-finder` binary entry point

use anyhow::{bail, Context};
use sf_cli::render::{
    missing_fields, CatalogListing, HistoryListing, ReportText, EMPTY_RESULT, SIGN_IN_REQUIRED,
};
use sf_cli::{cli, commands, logging, AnalyzeOutcome, AppConfig, FileRecordStore};
use sf_core::{CurrentUser, HistoryError, RecordStore, SessionId};
use sf_http::HttpTransport;
use sf_results::ViewState;
use std::path::PathBuf;
use std::process::ExitCode;

fn signed_in(config: &AppConfig) -> anyhow::Result<CurrentUser> {
    config
        .current_user()
        .ok_or(HistoryError::NotSignedIn)
        .context(SIGN_IN_REQUIRED)
}

async fn open_history(config: &AppConfig) -> anyhow::Result<FileRecordStore> {
    FileRecordStore::open(&config.history.path)
        .await
        .context("opening submission history")
}

async fn run() -> anyhow::Result<ExitCode> {
    let matches = cli::command().get_matches();

    let path = cli::config_path(&matches);
    let config = AppConfig::load(path.as_deref()).context("loading configuration")?;
    let config = cli::apply_overrides(config, &matches);
    logging::initialize(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");

    match matches.subcommand() {
        Some(("catalog", _)) => {
            print!("{CatalogListing}");
            Ok(ExitCode::SUCCESS)
        }
        Some(("analyze", args)) => {
            let transport = HttpTransport::new(&config.api).context("building HTTP transport")?;
            let answers = cli::analyze_args(args);
            let outcome = match config.current_user() {
                Some(user) => {
                    let store = open_history(&config).await?;
                    commands::analyze_and_record(&transport, &store, Some(&user), &answers).await
                }
                None => commands::analyze(&transport, &answers).await,
            };
            match outcome {
                AnalyzeOutcome::Submitted(session) => {
                    println!("{session}");
                    Ok(ExitCode::SUCCESS)
                }
                AnalyzeOutcome::Blocked { step, missing } => {
                    eprintln!("{step}: {}", step.title());
                    eprintln!("{}", missing_fields(&missing));
                    Ok(ExitCode::from(2))
                }
                AnalyzeOutcome::Failed(error) => {
                    Err(error).context("submitting intake failed")
                }
            }
        }
        Some(("result", args)) => {
            let Some(id) = args.get_one::<String>("session-id") else {
                bail!("session id required");
            };
            let transport = HttpTransport::new(&config.api).context("building HTTP transport")?;
            match commands::result(&transport, SessionId::new(id.as_str())).await {
                ViewState::Ready { report, .. } => {
                    print!("{}", ReportText(&report));
                    Ok(ExitCode::SUCCESS)
                }
                ViewState::Empty { .. } => {
                    println!("{EMPTY_RESULT}");
                    Ok(ExitCode::SUCCESS)
                }
                ViewState::Failed { session, error } => {
                    Err(error).with_context(|| format!("fetching result for {session} failed"))
                }
                ViewState::Idle | ViewState::Loading { .. } => bail!("result fetch did not finish"),
            }
        }
        Some(("history", _)) => {
            let user = signed_in(&config)?;
            let records = open_history(&config).await?.list_for_user(Some(&user)).await?;
            print!("{}", HistoryListing(&records));
            Ok(ExitCode::SUCCESS)
        }
        Some(("export", args)) => {
            let user = signed_in(&config)?;
            let csv = open_history(&config).await?.export_for_user(Some(&user)).await?;
            match args.get_one::<PathBuf>("output") {
                Some(path) => tokio::fs::write(path, csv)
                    .await
                    .with_context(|| format!("writing export to {}", path.display()))?,
                None => print!("{csv}"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(("delete", args)) => {
            let user = signed_in(&config)?;
            if !args.get_flag("yes") {
                eprintln!("Alle gespeicherten Analysen von {} löschen? Mit --yes bestätigen.", user.id);
                return Ok(ExitCode::from(2));
            }
            let removed = open_history(&config).await?.delete_for_user(Some(&user)).await?;
            println!("{removed} Einträge gelöscht.");
            Ok(ExitCode::SUCCESS)
        }
        Some((other, _)) => bail!("unknown command {other}"),
        None => bail!("no command given"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Fehler: {err:#}");
            ExitCode::FAILURE
        }
    }
}
