use super::*;

#[test]
fn paragraph_check_request_rejects_blank_paragraph() {
    assert_eq!(ParagraphCheckRequest::new("   ", "", true), None);
}

#[test]
fn paragraph_check_request_serializes_null_doc_url() {
    let request = ParagraphCheckRequest::new("සිංහල පාඨය", "  ", false).expect("request");
    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "paragraph": "සිංහල පාඨය",
            "top_k": 3,
            "google_doc_url": null,
            "use_web_search": false,
        })
    );
}

#[test]
fn paragraph_check_request_keeps_trimmed_doc_url() {
    let request = ParagraphCheckRequest::new("text", " https://docs.google.com/document/d/x ", true).expect("request");
    assert_eq!(request.google_doc_url.as_deref(), Some("https://docs.google.com/document/d/x"));
}

#[test]
fn paragraph_report_tolerates_missing_fields() {
    let report: ParagraphReport =
        serde_json::from_str(r#"{"paragraph_score": 42.5, "matches": [{"combined": 0.5, "corpus_text": "x"}], "extra": 1}"#)
            .expect("parse");
    assert_eq!(report.paragraph_score, Some(42.5));
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].lexical, 0.0);

    let empty: ParagraphReport = serde_json::from_str("{}").expect("parse");
    assert!(empty.matches.is_empty());
}

#[test]
fn format_ratio_renders_percentage() {
    assert_eq!(format_ratio(0.25), "25.00%");
    assert_eq!(format_ratio(1.0), "100.00%");
}
