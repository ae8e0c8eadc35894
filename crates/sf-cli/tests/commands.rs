use pretty_assertions::assert_eq;
use sf_cli::commands::{analyze, analyze_and_record, result};
use sf_cli::render::{HistoryListing, ReportText, EMPTY_RESULT};
use sf_cli::{AnalyzeArgs, AnalyzeOutcome, AppConfig, FileRecordStore, LogFormat};
use sf_core::{
    Application, CurrentUser, FetchOutcome, Frequency, RecordStore, SessionId, Stakeholder,
    TimeRequired, TransportError,
};
use sf_results::ViewState;
use sf_test_utils::{analysis_payload, ScriptedTransport, SAMPLE_DESCRIPTION};
use std::io::Write;

#[tokio::test]
async fn analyze_then_show_result() {
    let transport = ScriptedTransport::new();
    let session = SessionId::new("0b7e-session");
    transport.push_analyze(Ok(session.clone())).await;
    transport
        .set_result(
            session.clone(),
            Ok(FetchOutcome::Found(analysis_payload("green", "warning", 7.0))),
        )
        .await;

    let args = AnalyzeArgs {
        description: SAMPLE_DESCRIPTION.to_string(),
        applications: vec![Application::GoogleWorkspace, Application::Slack],
        time_required: Some(TimeRequired::OneToTwoHours),
        frequency: Some(Frequency::Daily),
        stakeholders: vec![Stakeholder::Team, Stakeholder::Customers],
        uses_personal_data: Some(false),
    };
    let outcome = analyze(&transport, &args).await;
    assert_eq!(outcome, AnalyzeOutcome::Submitted(session.clone()));

    let ViewState::Ready { report, .. } = result(&transport, session.clone()).await else {
        panic!("expected a ready result");
    };
    let text = ReportText(&report).to_string();
    assert!(text.starts_with("EU AI Act  [ ][●][ ]  Warnung\n"));
    assert!(text.contains("DSGVO      [●][ ][ ]  Compliant\n"));
    assert!(text.contains("Business Value  7.0/10  Hoch\n"));
    assert_eq!(transport.fetched().await, vec![session]);
}

#[tokio::test]
async fn unknown_session_is_empty() {
    let transport = ScriptedTransport::new();
    let state = result(&transport, SessionId::new("missing")).await;
    assert_eq!(
        state,
        ViewState::Empty {
            session: SessionId::new("missing")
        }
    );
    assert_eq!(EMPTY_RESULT, "Keine Ergebnisse gefunden.");
}

#[tokio::test]
async fn fetch_failure_keeps_session_for_message() {
    let transport = ScriptedTransport::new();
    let session = SessionId::new("flaky");
    transport
        .set_result(session.clone(), Err(TransportError::Network("connection reset".to_string())))
        .await;

    let state = result(&transport, session.clone()).await;
    assert_eq!(
        state,
        ViewState::Failed {
            session,
            error: TransportError::Network("connection reset".to_string()),
        }
    );
}

#[test]
fn config_file_then_environment() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[api]\nbase_url = \"https://engine.internal\"\ntimeout_secs = 90\n\n[logging]\nlevel = \"debug\""
    )
    .unwrap();

    let config = AppConfig::from_file(file.path())
        .unwrap()
        .apply_env_from(|var| (var == "SF_LOG_FORMAT").then(|| "json".to_string()))
        .unwrap();

    assert_eq!(config.api.base_url, "https://engine.internal");
    assert_eq!(config.api.timeout_secs, 90);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[tokio::test]
async fn submission_history_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::default()
        .with_history_path(dir.path().join("history.json"))
        .apply_env_from(|var| match var {
            "SF_USER_ID" => Some("u-anna".to_string()),
            "SF_USER_EMAIL" => Some("anna@example.com".to_string()),
            _ => None,
        })
        .unwrap();
    let user = config.current_user().unwrap();

    let transport = ScriptedTransport::new();
    transport.push_analyze(Ok(SessionId::new("hist-1"))).await;
    let args = AnalyzeArgs {
        description: SAMPLE_DESCRIPTION.to_string(),
        applications: vec![Application::Notion],
        time_required: Some(TimeRequired::FifteenToThirtyMinutes),
        frequency: Some(Frequency::Weekly),
        stakeholders: vec![Stakeholder::Myself],
        uses_personal_data: Some(true),
    };
    let store = FileRecordStore::open(&config.history.path).await.unwrap();
    let outcome = analyze_and_record(&transport, &store, Some(&user), &args).await;
    assert_eq!(outcome, AnalyzeOutcome::Submitted(SessionId::new("hist-1")));
    drop(store);

    let store = FileRecordStore::open(&config.history.path).await.unwrap();
    let records = store.list_for_user(Some(&user)).await.unwrap();
    assert!(HistoryListing(&records)
        .to_string()
        .ends_with(&format!("hist-1  {SAMPLE_DESCRIPTION}\n")));

    let csv = store.export_for_user(Some(&user)).await.unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "id,process_description,created_at");
    assert!(lines[1].starts_with(&format!("{},{SAMPLE_DESCRIPTION},", records[0].id)));

    assert_eq!(store.delete_for_user(Some(&user)).await.unwrap(), 1);
    let other = CurrentUser::new("u-other", "");
    assert_eq!(store.delete_for_user(Some(&other)).await.unwrap(), 0);
    let reopened = FileRecordStore::open(&config.history.path).await.unwrap();
    assert!(reopened.list_for_user(Some(&user)).await.unwrap().is_empty());
}
