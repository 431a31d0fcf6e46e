use std::fmt::Write;

use super::*;

/// Box opening on line 1 whose closing tag sits `distance` lines further down.
fn box_closing_after(kind: BoxKind, distance: usize) -> String {
    let mut text = format!("<div {}>\n", kind.marker());
    for i in 1..distance {
        let _ = writeln!(text, "<p>paragraph {i}</p>");
    }
    text.push_str("</div>\n");
    text
}

fn unclosed_box(kind: BoxKind, filler: usize) -> String {
    let mut text = format!("<div {}>\n", kind.marker());
    for i in 0..filler {
        let _ = writeln!(text, "<p>paragraph {i}</p>");
    }
    text
}

#[test]
fn detect_recognizes_both_markers() {
    assert_eq!(
        BoxKind::detect(r#"<div class="callout">"#),
        Some(BoxKind::Callout)
    );
    assert_eq!(
        BoxKind::detect(r#"<div class="quick-facts">"#),
        Some(BoxKind::QuickFacts)
    );
    assert_eq!(BoxKind::detect("<div class=\"note\">"), None);
}

#[test]
fn detect_ignores_similar_class_names() {
    assert_eq!(BoxKind::detect(r#"<div class="callout-box">"#), None);
    assert_eq!(BoxKind::detect(r#"<div class="quick-facts wide">"#), None);
}

#[test]
fn detect_prefers_callout_when_both_markers_present() {
    let line = r#"<div class="quick-facts"><div class="callout">"#;
    assert_eq!(BoxKind::detect(line), Some(BoxKind::Callout));
}

#[test]
fn detect_labels_quick_facts_with_callout_child_as_callout() {
    let line = r#"<div class="quick-facts"><div class="callout-content">"#;
    assert_eq!(BoxKind::detect(line), Some(BoxKind::Callout));
}

#[test]
fn detect_labels_quick_facts_without_callout_word() {
    let line = r#"<div class="quick-facts"><div class="facts-content">"#;
    assert_eq!(BoxKind::detect(line), Some(BoxKind::QuickFacts));
}

#[test]
fn scan_reports_callout_label_for_mixed_line() {
    let mut text = String::from("<div class=\"quick-facts\"><div class=\"callout-content\">\n");
    for i in 0..150 {
        let _ = writeln!(text, "<p>paragraph {i}</p>");
    }
    text.push_str("</div></div>\n");

    let issues = BoxScanner::default().scan(&text);
    assert_eq!(
        issues,
        vec![Issue::SlowClose {
            line: 1,
            kind: BoxKind::Callout,
            lines: 151,
        }]
    );
}

#[test]
fn box_closing_on_next_line_is_fine() {
    let scanner = BoxScanner::default();
    let text = "<div class=\"callout\">\n</div>\n";
    assert!(scanner.scan(text).is_empty());
}

#[test]
fn box_closing_at_warn_limit_is_fine() {
    let scanner = BoxScanner::default();
    let text = box_closing_after(BoxKind::Callout, 100);
    assert!(scanner.scan(&text).is_empty());
}

#[test]
fn box_closing_one_past_warn_limit_warns() {
    let scanner = BoxScanner::default();
    let text = box_closing_after(BoxKind::Callout, 101);
    let issues = scanner.scan(&text);

    assert_eq!(
        issues,
        vec![Issue::SlowClose {
            line: 1,
            kind: BoxKind::Callout,
            lines: 101,
        }]
    );
    assert_eq!(
        issues[0].to_string(),
        "Line 1: callout section took 101 lines to close (suspicious)"
    );
}

#[test]
fn box_never_closing_is_reported_unclosed() {
    let scanner = BoxScanner::default();
    let text = unclosed_box(BoxKind::QuickFacts, 250);
    let issues = scanner.scan(&text);

    assert_eq!(
        issues,
        vec![Issue::Unclosed {
            line: 1,
            kind: BoxKind::QuickFacts,
            limit: 200,
        }]
    );
    assert_eq!(
        issues[0].to_string(),
        "Line 1: quick-facts section still unclosed after 200+ lines!"
    );
}

#[test]
fn unclosed_report_stops_the_scan() {
    // The closing tag sits past the unclosed limit; it must not turn into a slow close.
    let scanner = BoxScanner::default();
    let text = box_closing_after(BoxKind::Callout, 202);
    let issues = scanner.scan(&text);

    assert_eq!(issues.len(), 1);
    assert!(matches!(issues[0], Issue::Unclosed { limit: 200, .. }));
}

#[test]
fn closure_is_checked_before_unclosed_limit() {
    let scanner = BoxScanner::default();
    let text = box_closing_after(BoxKind::Callout, 201);
    let issues = scanner.scan(&text);

    assert_eq!(
        issues,
        vec![Issue::SlowClose {
            line: 1,
            kind: BoxKind::Callout,
            lines: 201,
        }]
    );
}

#[test]
fn box_open_at_end_of_document_is_silent() {
    let scanner = BoxScanner::default();
    let text = unclosed_box(BoxKind::Callout, 50);
    assert!(scanner.scan(&text).is_empty());
}

#[test]
fn opening_line_never_counts_as_closure() {
    // Depth is back to zero on the opening line itself; the box only closes
    // when a later line returns depth to zero.
    let scanner = BoxScanner::new(1, 10);
    let text = "<div class=\"callout\">inline</div>\n<div>\n</div>\n";
    let issues = scanner.scan(text);

    assert_eq!(
        issues,
        vec![Issue::SlowClose {
            line: 1,
            kind: BoxKind::Callout,
            lines: 2,
        }]
    );
}

#[test]
fn negative_depth_never_closes() {
    let scanner = BoxScanner::new(1, 3);
    let text = "<div class=\"callout\"></div></div>\n<p>a</p>\n<p>b</p>\n<p>c</p>\n<p>d</p>\n";
    assert!(scanner.scan(text).is_empty());
}

#[test]
fn nested_boxes_are_scanned_independently() {
    let mut text = String::from("<div class=\"callout\">\n");
    text.push_str("<div class=\"quick-facts\">\n");
    text.push_str("</div>\n");
    for i in 0..146 {
        let _ = writeln!(text, "<p>{i}</p>");
    }
    text.push_str("</div>\n");

    let issues = BoxScanner::default().scan(&text);

    assert_eq!(
        issues,
        vec![Issue::SlowClose {
            line: 1,
            kind: BoxKind::Callout,
            lines: 149,
        }]
    );
}

#[test]
fn warnings_are_ordered_by_opening_line() {
    let scanner = BoxScanner::new(2, 5);
    let text = "intro\n\
                <div class=\"quick-facts\">\n\
                <p>a</p>\n\
                <p>b</p>\n\
                </div>\n\
                <div class=\"callout\">\n\
                <p>c</p>\n\
                <p>d</p>\n\
                <p>e</p>\n\
                <p>f</p>\n\
                <p>g</p>\n\
                <p>h</p>\n";
    let issues = scanner.scan(text);

    assert_eq!(
        issues,
        vec![
            Issue::SlowClose {
                line: 2,
                kind: BoxKind::QuickFacts,
                lines: 3,
            },
            Issue::Unclosed {
                line: 6,
                kind: BoxKind::Callout,
                limit: 5,
            },
        ]
    );
}

#[test]
fn custom_thresholds_are_respected() {
    let scanner = BoxScanner::new(10, 20);
    assert_eq!(scanner.warn_after(), 10);
    assert_eq!(scanner.unclosed_after(), 20);

    let text = box_closing_after(BoxKind::Callout, 11);
    assert_eq!(scanner.scan(&text).len(), 1);

    let text = box_closing_after(BoxKind::Callout, 10);
    assert!(scanner.scan(&text).is_empty());
}

#[test]
fn text_without_boxes_has_no_warnings() {
    let scanner = BoxScanner::default();
    assert!(scanner.scan("").is_empty());
    assert!(scanner.scan("<div>\n<p>hi</p>\n</div>").is_empty());
}
