use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sf_core::{FetchOutcome, SessionId, TransportError};
use sf_results::{
    classify_ai_act, classify_business_band, classify_gdpr, interpret, ordered_indicator, Axis,
    BusinessBand, Interpretation, ResultView, ViewState, SLOT_COUNT,
};
use sf_test_utils::{analysis_json, analysis_payload, ScriptedTransport};

#[test]
fn documented_band_boundaries() {
    assert_eq!(classify_business_band(7.0), Ok(BusinessBand::High));
    assert_eq!(classify_business_band(6.999), Ok(BusinessBand::Medium));
    assert_eq!(classify_business_band(4.0), Ok(BusinessBand::Medium));
    assert_eq!(classify_business_band(3.999), Ok(BusinessBand::Low));
}

#[test]
fn both_axes_share_positions() {
    assert_eq!(classify_ai_act("ok"), Ok(0));
    assert_eq!(classify_gdpr("green"), Ok(0));
    assert_eq!(classify_ai_act("violation"), Ok(2));
    assert_eq!(classify_gdpr("red"), Ok(2));
}

#[test]
fn yellow_gdpr_ok_ai_act_medium_value() {
    let Interpretation::Available(report) = interpret(analysis_payload("yellow", "ok", 5.5)) else {
        panic!("payload is complete");
    };

    assert_eq!(report.gdpr.indicator().active_index(), Some(1));
    assert_eq!(report.ai_act.indicator().active_index(), Some(0));
    assert_eq!(report.business.band, Some(BusinessBand::Medium));
    assert_eq!(report.gdpr.section, "Art. 6 DSGVO");
    assert_eq!(report.ai_act.explanation, "Geringes Risiko");
    assert_eq!(report.business.narrative, "Spart zwei Stunden pro Woche");

    let tools: Vec<_> = report.recommendations.iter().map(|r| r.tool.as_str()).collect();
    assert_eq!(tools, vec!["Zapier", "Make"]);
}

#[test]
fn partial_json_is_absent() {
    let mut json = analysis_json("green", "ok", 8.0);
    json.as_object_mut().unwrap().remove("business");
    let payload = serde_json::from_value(json).unwrap();
    assert_eq!(interpret(payload), Interpretation::Absent);
}

#[tokio::test]
async fn view_loads_through_transport() {
    let transport = ScriptedTransport::new();
    let session = SessionId::new("s-42");
    transport
        .set_result(
            session.clone(),
            Ok(FetchOutcome::Found(analysis_payload("green", "violation", 1.0))),
        )
        .await;

    let mut view = ResultView::new();
    view.load(&transport, session.clone()).await;

    let report = view.report().expect("ready");
    assert_eq!(report.ai_act.index(), Some(2));
    assert_eq!(report.business.band, Some(BusinessBand::Low));
    assert_eq!(transport.fetched().await, vec![session]);
}

#[tokio::test]
async fn unknown_session_shows_empty_state() {
    let transport = ScriptedTransport::new();
    let mut view = ResultView::new();
    let state = view.load(&transport, SessionId::new("missing")).await;
    assert_eq!(
        state,
        &ViewState::Empty {
            session: SessionId::new("missing")
        }
    );
}

#[tokio::test]
async fn retry_after_failure_refetches() {
    let transport = ScriptedTransport::new();
    let session = SessionId::new("flaky");
    transport
        .set_result(session.clone(), Err(TransportError::Network("reset".to_string())))
        .await;

    let mut view = ResultView::new();
    view.load(&transport, session.clone()).await;
    assert!(matches!(view.state(), ViewState::Failed { .. }));

    transport
        .set_result(
            session.clone(),
            Ok(FetchOutcome::Found(analysis_payload("green", "ok", 9.0))),
        )
        .await;
    view.retry(&transport).await;
    assert!(view.report().is_some());
    assert_eq!(transport.fetched().await.len(), 2);
}

#[tokio::test]
async fn retry_from_empty_picks_up_late_result() {
    let transport = ScriptedTransport::new();
    let session = SessionId::new("late");

    let mut view = ResultView::new();
    view.load(&transport, session.clone()).await;
    assert_eq!(
        view.state(),
        &ViewState::Empty {
            session: session.clone()
        }
    );

    transport
        .set_result(
            session.clone(),
            Ok(FetchOutcome::Found(analysis_payload("red", "warning", 3.0))),
        )
        .await;
    let state = view.retry(&transport).await.expect("empty view can retry");
    assert!(matches!(state, ViewState::Ready { .. }));
    assert_eq!(view.report().map(|r| r.gdpr.index()), Some(Some(2)));
    assert_eq!(transport.fetched().await, vec![session.clone(), session]);
}

#[tokio::test]
async fn retry_without_request_does_nothing() {
    let transport = ScriptedTransport::new();
    let mut view = ResultView::new();
    assert!(view.retry(&transport).await.is_none());
    assert!(transport.fetched().await.is_empty());
}

proptest! {
    #[test]
    fn prop_band_is_monotonic(a in 0.0f64..=10.0, b in 0.0f64..=10.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |band: BusinessBand| match band {
            BusinessBand::Low => 0,
            BusinessBand::Medium => 1,
            BusinessBand::High => 2,
        };
        let lo_band = classify_business_band(lo).unwrap();
        let hi_band = classify_business_band(hi).unwrap();
        prop_assert!(rank(lo_band) <= rank(hi_band));
    }

    #[test]
    fn prop_out_of_scale_scores_are_rejected(score in prop_oneof![-1e6f64..-1e-9, 10.000_001f64..1e6]) {
        prop_assert!(classify_business_band(score).is_err());
    }

    #[test]
    fn prop_indicator_has_one_lit_slot(index in 0usize..SLOT_COUNT, gdpr in any::<bool>()) {
        let axis = if gdpr { Axis::Gdpr } else { Axis::AiAct };
        let indicator = ordered_indicator(axis, index);
        prop_assert_eq!(indicator.slots().iter().filter(|s| s.is_active()).count(), 1);
        prop_assert_eq!(indicator.active_index(), Some(index));
    }
}
