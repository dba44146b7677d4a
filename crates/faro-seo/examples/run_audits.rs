//! Example: run the SEO audit suite over hand-built artifacts.

use faro_audit::{AnchorElement, Artifacts, AuditRunner, NodeRef, StyleOrigin, TextRun};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let artifacts = Artifacts {
        viewport: Some("width=device-width, initial-scale=1".to_string()),
        font_size: vec![
            TextRun {
                font_size_px: 12,
                text_length: 33,
                style_origin: StyleOrigin::Regular {
                    sheet_id: "sheet-1".to_string(),
                    source_url: Some("https://example.com/main.css".to_string()),
                    start_line: 12,
                    start_column: 2,
                    selectors: vec![".fine-print".to_string()],
                },
                node: NodeRef::new(7, "p").with_attr("class", "fine-print"),
            },
            TextRun {
                font_size_px: 18,
                text_length: 412,
                style_origin: StyleOrigin::UserAgent {
                    selectors: vec!["p".to_string()],
                },
                node: NodeRef::new(8, "p"),
            },
        ],
        crawlable_anchors: vec![
            AnchorElement {
                href: "https://example.com/pricing".to_string(),
                text: "Plans and pricing".to_string(),
            },
            AnchorElement {
                href: "https://example.com/docs".to_string(),
                text: "learn more".to_string(),
            },
        ],
        canonical: vec!["https://example.com/articles/1".to_string()],
        http_status_code: Some(200),
        response_headers: Some(Vec::new()),
        ..Artifacts::new("https://example.com/articles/1")
    };

    let mut runner = AuditRunner::new();
    for audit in faro_seo::all_audits() {
        runner.register(audit);
    }

    for result in runner.run(&artifacts) {
        let verdict = if result.passed { "PASS" } else { "FAIL" };
        println!("[{verdict}] {} — {}", result.id, result.title);
        if let Some(value) = &result.display_value {
            println!("       {value}");
        }
        if let Some(debug) = &result.debug_string {
            println!("       {debug}");
        }
        if let Some(details) = &result.details {
            for row in details.rows() {
                println!("       {}", row.join(" | "));
            }
        }
    }

    Ok(())
}
