//! Comprehensive tests for faro-seo
//!
//! Runs the whole audit suite through the runner over realistic artifacts.

use faro_audit::{
    AnchorElement, Artifacts, AuditRunner, HreflangLink, NodeRef, StyleOrigin, TextRun,
};

fn healthy_page() -> Artifacts {
    Artifacts {
        viewport: Some("width=device-width, initial-scale=1".to_string()),
        font_size: vec![
            TextRun {
                font_size_px: 18,
                text_length: 900,
                style_origin: StyleOrigin::UserAgent {
                    selectors: vec!["p".to_string()],
                },
                node: NodeRef::new(10, "p"),
            },
            TextRun {
                font_size_px: 12,
                text_length: 40,
                style_origin: StyleOrigin::Regular {
                    sheet_id: "main".to_string(),
                    source_url: Some("https://example.com/main.css".to_string()),
                    start_line: 45,
                    start_column: 2,
                    selectors: vec!["footer .legal".to_string()],
                },
                node: NodeRef::new(11, "small"),
            },
        ],
        crawlable_anchors: vec![
            AnchorElement {
                href: "https://example.com/pricing".to_string(),
                text: "Plans and pricing".to_string(),
            },
        ],
        canonical: vec!["https://example.com/articles/1".to_string()],
        hreflang: vec![HreflangLink {
            href: "https://example.com/fr/articles/1".to_string(),
            hreflang: "fr".to_string(),
        }],
        http_status_code: Some(200),
        response_headers: Some(vec![(
            "Link".to_string(),
            "<https://example.com/articles/1>; rel=\"canonical\"".to_string(),
        )]),
        ..Artifacts::new("https://example.com/articles/1")
    }
}

#[test]
fn test_healthy_page_passes_every_audit() {
    let mut runner = AuditRunner::new();
    for audit in faro_seo::all_audits() {
        runner.register(audit);
    }

    let results = runner.run(&healthy_page());
    assert_eq!(results.len(), 7);
    for result in &results {
        assert!(result.passed, "{} should pass", result.id);
    }
}

#[test]
fn test_font_size_result_carries_attribution_table() {
    let mut artifacts = healthy_page();
    // Shift the balance: most text now comes from the 12px footer rule.
    artifacts.font_size[0].text_length = 40;
    artifacts.font_size[1].text_length = 900;

    let results = {
        let mut runner = AuditRunner::new();
        for audit in faro_seo::all_audits() {
            runner.register(audit);
        }
        runner.run(&artifacts)
    };

    let font_size = results.iter().find(|r| r.id == "font-size").unwrap();
    assert!(!font_size.passed);

    let details = font_size.details.as_ref().unwrap();
    assert_eq!(details.row_count(), 1);
    let row = &details.rows()[0];
    assert_eq!(row[0], "https://example.com/main.css");
    assert_eq!(row[1], "footer .legal");
    assert_eq!(row[2], "45:2");
    assert_eq!(row[3], "95.74%");
    assert_eq!(row[4], "12px");
}

#[test]
fn test_missing_viewport_fails_both_mobile_audits() {
    let mut artifacts = healthy_page();
    artifacts.viewport = None;

    let mut runner = AuditRunner::new();
    for audit in faro_seo::all_audits() {
        runner.register(audit);
    }
    let results = runner.run(&artifacts);

    let viewport = results.iter().find(|r| r.id == "viewport").unwrap();
    assert!(!viewport.passed);

    let font_size = results.iter().find(|r| r.id == "font-size").unwrap();
    assert!(!font_size.passed);
    assert!(font_size
        .debug_string
        .as_deref()
        .unwrap()
        .contains("viewport"));
}

#[test]
fn test_errored_audits_still_appear_in_the_report() {
    let mut artifacts = healthy_page();
    artifacts.response_headers = None;

    let mut runner = AuditRunner::new();
    for audit in faro_seo::all_audits() {
        runner.register(audit);
    }
    let results = runner.run(&artifacts);

    assert_eq!(results.len(), 7);
    let canonical = results.iter().find(|r| r.id == "canonical").unwrap();
    assert!(!canonical.passed);
    assert!(canonical
        .debug_string
        .as_deref()
        .unwrap()
        .contains("could not complete"));
}
