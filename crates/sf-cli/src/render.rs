//! Plain-text rendering of catalogs and analysis results

use sf_core::{Application, Frequency, HistoryRecord, Stakeholder, TimeRequired};
use sf_intake::MissingField;
use sf_results::{AnalysisReport, AxisFacet, AxisStatus, Indicator, Slot};
use std::fmt;

/// Shown when no analysis exists for a session
pub const EMPTY_RESULT: &str = "Keine Ergebnisse gefunden.";

/// Shown when the user has no recorded submissions
pub const EMPTY_HISTORY: &str = "Noch keine Analysen gespeichert.";

/// Shown when a history command runs without a signed-in user
pub const SIGN_IN_REQUIRED: &str = "Bitte melden Sie sich an, um Ihre Daten zu verwalten.";

/// Traffic light as `[●][ ][ ]`
#[derive(Debug, Clone, Copy)]
pub struct IndicatorText<'a>(pub &'a Indicator);

impl fmt::Display for IndicatorText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.0.slots() {
            match slot {
                Slot::Active(_) => f.write_str("[●]")?,
                Slot::Inactive => f.write_str("[ ]")?,
            }
        }
        Ok(())
    }
}

/// Full analysis result
#[derive(Debug, Clone, Copy)]
pub struct ReportText<'a>(pub &'a AnalysisReport);

fn write_axis<S: AxisStatus>(f: &mut fmt::Formatter<'_>, facet: &AxisFacet<S>) -> fmt::Result {
    writeln!(
        f,
        "{:<10} {}  {}",
        facet.axis().title(),
        IndicatorText(&facet.indicator()),
        facet.label()
    )?;
    if !facet.section.is_empty() {
        writeln!(f, "  Abschnitt: {}", facet.section)?;
    }
    if !facet.explanation.is_empty() {
        writeln!(f, "  {}", facet.explanation)?;
    }
    Ok(())
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        write_axis(f, &report.ai_act)?;
        write_axis(f, &report.gdpr)?;

        writeln!(
            f,
            "Business Value  {}  {}",
            report.business.display_score(),
            report.business.label()
        )?;
        if !report.business.narrative.is_empty() {
            writeln!(f, "  {}", report.business.narrative)?;
        }

        if report.recommendations.is_empty() {
            return Ok(());
        }
        writeln!(f, "Empfohlene Tools")?;
        for (n, rec) in report.recommendations.iter().enumerate() {
            if rec.reason.is_empty() {
                writeln!(f, "  {}. {}", n + 1, rec.tool)?;
            } else {
                writeln!(f, "  {}. {}: {}", n + 1, rec.tool, rec.reason)?;
            }
        }
        Ok(())
    }
}

/// Every catalog with its accepted labels
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogListing;

fn write_catalog<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    flag: &str,
    values: &[T],
) -> fmt::Result {
    writeln!(f, "{title} ({flag})")?;
    for value in values {
        writeln!(f, "  {value}")?;
    }
    Ok(())
}

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_catalog(f, "Anwendungen", "--app", Application::ALL)?;
        write_catalog(f, "Zeitaufwand", "--time", TimeRequired::ALL)?;
        write_catalog(f, "Häufigkeit", "--frequency", Frequency::ALL)?;
        write_catalog(f, "Beteiligte", "--stakeholder", Stakeholder::ALL)
    }
}

/// Past submissions, one per line: date, session, snippet
#[derive(Debug, Clone, Copy)]
pub struct HistoryListing<'a>(pub &'a [HistoryRecord]);

impl fmt::Display for HistoryListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "{EMPTY_HISTORY}");
        }
        for record in self.0 {
            writeln!(
                f,
                "{}  {}  {}",
                record.created_at.format("%Y-%m-%d %H:%M"),
                record.session_id,
                record.snippet()
            )?;
        }
        Ok(())
    }
}

/// One line per unmet requirement
#[must_use]
pub fn missing_fields(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(|field| format!("  - {field}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use chrono::TimeZone;
    use sf_core::{CurrentUser, SessionId};
    use sf_results::{interpret, ordered_indicator, Axis, Interpretation};
    use sf_test_utils::analysis_payload;

    fn report(gdpr: &str, ai_act: &str, score: f64) -> AnalysisReport {
        match interpret(analysis_payload(gdpr, ai_act, score)) {
            Interpretation::Available(report) => report,
            Interpretation::Absent => panic!("fixture is complete"),
        }
    }

    #[test]
    fn indicator_lights_one_slot() {
        assert_eq!(IndicatorText(&ordered_indicator(Axis::Gdpr, 1)).to_string(), "[ ][●][ ]");
        assert_eq!(IndicatorText(&Indicator::unknown(Axis::AiAct)).to_string(), "[ ][ ][ ]");
    }

    #[test]
    fn report_lists_both_axes_and_tools() {
        let text = ReportText(&report("yellow", "ok", 5.5)).to_string();
        assert_eq!(
            text,
            "EU AI Act  [●][ ][ ]  Compliant\n\
             \x20 Abschnitt: Art. 52 AI Act\n\
             \x20 Geringes Risiko\n\
             DSGVO      [ ][●][ ]  Warnung\n\
             \x20 Abschnitt: Art. 6 DSGVO\n\
             \x20 Einwilligung erforderlich\n\
             Business Value  5.5/10  Mittel\n\
             \x20 Spart zwei Stunden pro Woche\n\
             Empfohlene Tools\n\
             \x20 1. Zapier: Verbindet die Anwendungen\n\
             \x20 2. Make: Visuelle Automatisierung\n"
        );
    }

    #[test]
    fn unknown_status_renders_dark() {
        let text = ReportText(&report("purple", "violation", 9.0)).to_string();
        assert!(text.contains("DSGVO      [ ][ ][ ]  Unbekannt"));
        assert!(text.contains("EU AI Act  [ ][ ][●]  Verstoß"));
        assert!(text.contains("9.0/10  Hoch"));
    }

    #[test]
    fn catalog_listing_names_every_label() {
        let text = CatalogListing.to_string();
        for app in Application::ALL {
            assert!(text.contains(app.label()));
        }
        assert!(text.contains("mehrmals pro Woche"));
        assert!(text.contains("meinen Chef"));
        assert!(text.contains("> 2 h"));
    }

    #[test]
    fn missing_fields_one_per_line() {
        let text = missing_fields(&[MissingField::NoFrequency, MissingField::NoStakeholders]);
        assert_eq!(text, "  - frequency not chosen\n  - no stakeholder selected");
    }

    #[test]
    fn history_lists_date_session_and_snippet() {
        let user = CurrentUser::new("u-1", "anna@example.com");
        let at = chrono::Utc.with_ymd_and_hms(2026, 3, 9, 14, 5, 0).unwrap();
        let records = [
            HistoryRecord::new(&user, "x".repeat(70), SessionId::new("s-9")).with_created_at(at),
            HistoryRecord::new(&user, "", SessionId::new("s-8")).with_created_at(at),
        ];

        let text = HistoryListing(&records).to_string();
        assert_eq!(
            text,
            format!("2026-03-09 14:05  s-9  {}\n2026-03-09 14:05  s-8  Prozess\n", "x".repeat(60))
        );
        assert_eq!(HistoryListing(&[]).to_string(), format!("{EMPTY_HISTORY}\n"));
    }
}
