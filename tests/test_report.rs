use std::path::Path;

use lighthouse_report::audit::{self, AuditRun};
use lighthouse_report::error::LighthouseError;
use lighthouse_report::report::{self, Category, LighthouseReport, Preset};
use serde_json::json;

fn fixture() -> AuditRun {
    audit::load_saved(Path::new("tests/fixtures/report.json")).expect("fixture should load")
}

// ── decoding ──────────────────────────────────────────────────────────────────

#[test]
fn decodes_top_level_fields() {
    let report = fixture().report;
    assert_eq!(report.lighthouse_version, "12.2.1");
    assert_eq!(report.final_displayed_url, "https://example.com/");
    assert_eq!(report.fetch_time, "2024-05-01T12:34:56.789Z");
    assert!(report.user_agent.contains("HeadlessChrome"));
}

#[test]
fn categories_keep_document_order() {
    let report = fixture().report;
    let keys: Vec<&str> = report.categories.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["performance", "accessibility", "best-practices"]);
}

#[test]
fn audits_keep_document_order() {
    let report = fixture().report;
    let keys: Vec<&str> = report.audits.iter().map(|(k, _)| k.as_str()).take(3).collect();
    assert_eq!(
        keys,
        [
            "first-contentful-paint",
            "largest-contentful-paint",
            "render-blocking-resources"
        ]
    );
    assert_eq!(report.audits.len(), 13);
}

#[test]
fn null_score_decodes_as_none() {
    let report = fixture().report;
    let audit = report.audits.get("aria-info").unwrap();
    assert_eq!(audit.score, None);
    assert!(!audit.is_failed());
}

#[test]
fn details_are_decoded() {
    let report = fixture().report;
    let audit = report.audits.get("render-blocking-resources").unwrap();
    assert_eq!(audit.details_kind(), Some("opportunity"));
    assert_eq!(
        audit.details.as_ref().unwrap().overall_savings_ms,
        Some(1200.0)
    );
    assert_eq!(
        report.audits.get("main-thread-tasks").unwrap().details_kind(),
        Some("debugdata")
    );
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let report = LighthouseReport::from_value(&json!({})).unwrap();
    assert_eq!(report.final_displayed_url, "");
    assert!(report.categories.is_empty());
    assert!(report.audits.is_empty());

    let report = LighthouseReport::from_value(&json!({
        "categories": { "seo": {} },
        "audits": { "viewport": { "score": 0.5 } }
    }))
    .unwrap();
    let seo = report.categories.get("seo").unwrap();
    assert_eq!(seo.title, "");
    assert_eq!(seo.score, None);
    assert!(seo.audit_refs.is_empty());
    let viewport = report.audits.get("viewport").unwrap();
    assert_eq!(viewport.display_value, None);
    assert!(viewport.details.is_none());
}

#[test]
fn malformed_categories_is_an_error() {
    let err = audit::load_saved(Path::new("tests/fixtures/malformed-categories.json")).unwrap_err();
    assert!(matches!(err, LighthouseError::InvalidJson(_)), "got {err:?}");
}

#[test]
fn unreadable_file_is_an_io_error() {
    let err = audit::load_saved(Path::new("tests/fixtures/does-not-exist.json")).unwrap_err();
    assert!(matches!(err, LighthouseError::Io { .. }), "got {err:?}");
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn invalid_json_text_is_rejected() {
    let err = report::parse_json("Runtime error encountered").unwrap_err();
    assert!(err.to_string().starts_with("Error parsing Lighthouse output"));
}

// ── document order and nulls ──────────────────────────────────────────────────

#[test]
fn audits_decode_in_text_order() {
    let report: LighthouseReport =
        serde_json::from_str(r#"{"audits": {"z": {}, "a": {}, "m": {}}}"#).unwrap();
    let keys: Vec<&str> = report.audits.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn repeated_audit_key_keeps_first_position() {
    let report: LighthouseReport = serde_json::from_str(
        r#"{"audits": {"b": {"title": "first"}, "a": {"title": "A"}, "b": {"title": "second"}}}"#,
    )
    .unwrap();
    let entries: Vec<(&str, &str)> = report
        .audits
        .iter()
        .map(|(k, v)| (k.as_str(), v.title.as_str()))
        .collect();
    assert_eq!(entries, [("b", "second"), ("a", "A")]);
}

#[test]
fn null_text_fields_decode_as_empty() {
    let report = LighthouseReport::from_value(&json!({
        "finalDisplayedUrl": null,
        "fetchTime": null,
        "categories": { "seo": { "title": null, "description": null, "auditRefs": null } },
        "audits": { "a": { "title": null, "description": null, "score": 0.5 } }
    }))
    .unwrap();
    assert_eq!(report.final_displayed_url, "");
    assert_eq!(report.fetch_time, "");

    let seo = report.categories.get("seo").unwrap();
    assert_eq!(seo.title, "");
    assert!(seo.audit_refs.is_empty());

    let audit = report.audits.get("a").unwrap();
    assert_eq!(audit.title, "");
    assert_eq!(audit.description, "");
    assert_eq!(audit.score, Some(0.5));
    assert!(audit.is_failed());
}

#[test]
fn null_categories_and_audits_decode_as_empty() {
    let report = LighthouseReport::from_value(&json!({
        "categories": null,
        "audits": null
    }))
    .unwrap();
    assert!(report.categories.is_empty());
    assert!(report.audits.is_empty());
}

// ── categories and presets ───────────────────────────────────────────────────

#[test]
fn category_keys_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_key(category.key()), Some(category));
    }
    assert_eq!(Category::from_key("pwa"), None);
    assert_eq!(Category::BestPractices.key(), "best-practices");
    assert_eq!(Category::BestPractices.heading(), "BEST PRACTICES");
    assert_eq!(Category::BestPractices.label(), "Best Practices");
}

#[test]
fn preset_defaults_to_desktop() {
    assert_eq!(Preset::default(), Preset::Desktop);
    assert_eq!(Preset::Mobile.to_string(), "mobile");
}

// ── persistence ───────────────────────────────────────────────────────────────

#[test]
fn saved_report_reads_back_identical() {
    let run = fixture();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.json");

    report::write_json(&run.raw, &path).unwrap();
    let reread = report::read_json(&path).unwrap();

    assert_eq!(reread, run.raw);
}

#[test]
fn saved_report_is_pretty_printed_with_two_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.json");

    report::write_json(&json!({"finalDisplayedUrl": "https://example.com/"}), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert_eq!(content, "{\n  \"finalDisplayedUrl\": \"https://example.com/\"\n}");
}

#[test]
fn saved_report_keeps_fields_the_typed_view_ignores() {
    let run = fixture();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.json");

    report::write_json(&run.raw, &path).unwrap();
    let reread = report::read_json(&path).unwrap();

    assert_eq!(reread["configSettings"]["formFactor"], "desktop");
    assert_eq!(reread["audits"]["first-contentful-paint"]["numericValue"], 1203.5);
}
